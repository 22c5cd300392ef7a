/// Color primitives: random generation, hex parsing and contrast.
use std::fmt;

use rand::RngExt;

/// A 24-bit RGB color. Canonical external form is `#RRGGBB` (uppercase).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Which overlay color keeps text readable on a given background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Dark background: render overlay text/icons in white.
    Light,
    /// Light background: render overlay text/icons in black.
    Dark,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniformly random 24-bit color (each hex digit uniform over 0-F).
    pub fn random<R: RngExt>(rng: &mut R) -> Self {
        let v: u32 = rng.random_range(0..0x0100_0000);
        Self {
            r: (v >> 16) as u8,
            g: (v >> 8) as u8,
            b: v as u8,
        }
    }

    /// Parse `#RRGGBB`. Input case is ignored; anything else is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    // 0.299 R + 0.587 G + 0.114 B, scaled by 1000 so the 0.5 threshold
    // (127_500) is exact in integer arithmetic.
    fn weighted_sum(&self) -> u32 {
        299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32
    }

    /// Perceived brightness in [0, 1]. A simplified weighted average,
    /// not the CIE formula.
    pub fn luminance(&self) -> f64 {
        self.weighted_sum() as f64 / 255_000.0
    }

    /// Pick the overlay tone: luminance strictly below 0.5 means the
    /// background is dark enough for white text.
    pub fn tone(&self) -> Tone {
        if self.weighted_sum() < 127_500 {
            Tone::Light
        } else {
            Tone::Dark
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
