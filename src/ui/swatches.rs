use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{fill, overlay};
use super::theme::Theme;
use crate::app::App;

/// Renders the swatch row: one colored column per palette slot, with the
/// hex code and lock marker overlaid in the slot's contrast tone.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if app.palette.is_empty() {
        return;
    }
    let count = app.palette.len() as u32;
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (index, swatch) in app.palette.iter().enumerate() {
        let bg = fill(swatch.color);
        let fg = overlay(swatch.tone);
        let selected = index == app.selected;

        // A locked swatch gets a double border in its own overlay tone
        // (the terminal stand-in for the page's dashed lock border); the
        // selection outline takes color priority.
        let border_color = if selected {
            Theme::highlight()
        } else if swatch.locked {
            fg
        } else {
            bg
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if swatch.locked {
                BorderType::Double
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(border_color).bg(bg))
            .style(Style::default().bg(bg));
        let inner = block.inner(columns[index]);
        frame.render_widget(block, columns[index]);

        let mut lines: Vec<Line> = Vec::new();
        let pad = inner.height.saturating_sub(2) / 2;
        for _ in 0..pad {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            swatch.color.to_string(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )));
        if swatch.locked {
            lines.push(Line::from(Span::styled(
                "[locked]",
                Style::default().fg(fg),
            )));
        }

        let body = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg));
        frame.render_widget(body, inner);
    }
}
