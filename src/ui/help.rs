use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use super::theme::Theme;

pub fn build_help_text() -> Text<'static> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key bindings",
        Style::default()
            .fg(Theme::accent())
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(section_title("Palette"));
    lines.extend(section_lines(&[
        "space: New palette (locked swatches keep their color)",
        "Left/Right: Select a swatch",
        "l / Enter: Lock or unlock the selected swatch",
        "c: Copy the selected hex code to the clipboard",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Theme hint"));
    lines.extend(section_lines(&[
        "/ or t: Edit the hint (e.g. \"gaming\", \"fintech startup\")",
        "Enter: Apply the hint and refresh",
        "Esc: Close the hint editor",
    ]));

    lines.push(Line::from(""));
    lines.push(section_title("Global"));
    lines.extend(section_lines(&["?: Toggle help", "q: Quit"]));

    Text::from(lines)
}

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Theme::primary())
            .add_modifier(Modifier::BOLD),
    ))
}

fn section_lines(entries: &[&'static str]) -> Vec<Line<'static>> {
    entries
        .iter()
        .map(|entry| {
            Line::from(Span::styled(
                format!("  {entry}"),
                Style::default().fg(Theme::text()),
            ))
        })
        .collect()
}
