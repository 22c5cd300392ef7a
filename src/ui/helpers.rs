use ratatui::style::Color as TermColor;

use crate::color::{Color, Tone};

/// A swatch color as a truecolor terminal background.
pub fn fill(color: Color) -> TermColor {
    TermColor::Rgb(color.r, color.g, color.b)
}

/// The overlay color a tone prescribes for text/markers.
pub fn overlay(tone: Tone) -> TermColor {
    match tone {
        Tone::Light => TermColor::White,
        Tone::Dark => TermColor::Black,
    }
}
