mod help;
mod helpers;
mod swatches;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use theme::Theme;

/// Renders the entire UI for a single frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(7),
            Constraint::Length(5),
        ])
        .split(area);

    let header_lines = vec![Line::from(vec![
        Span::styled(
            "  Swatchr  ",
            Style::default().fg(Color::Black).bg(Theme::primary()),
        ),
        Span::raw(" "),
        Span::styled(
            "color palette generator",
            Style::default()
                .fg(Theme::accent())
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    let header = Paragraph::new(Text::from(header_lines))
        .alignment(Alignment::Left)
        .block(frame_block());
    frame.render_widget(header, layout[0]);

    swatches::render(frame, layout[1], app);

    let footer = Paragraph::new(Text::from(footer_lines(app)))
        .alignment(Alignment::Left)
        .block(frame_block());
    frame.render_widget(footer, layout[2]);

    if app.show_help {
        render_help_popup(frame);
    }
}

fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Theme::secondary()))
}

fn footer_lines(app: &App) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    if app.hint_active {
        lines.push(Line::from(vec![
            Span::styled(
                "Theme: ",
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(app.hint.as_str(), Style::default().fg(Theme::text())),
            Span::styled("_", Style::default().fg(Theme::highlight())),
        ]));
        lines.push(Line::from(Span::styled(
            "Type a hint, Enter to apply, Esc to close",
            Style::default().fg(Theme::dim()),
        )));
    } else {
        let hint_text = if app.hint.trim().is_empty() {
            Span::styled("none (press / to set)", Style::default().fg(Theme::dim()))
        } else {
            Span::styled(app.hint.as_str(), Style::default().fg(Theme::text()))
        };
        lines.push(Line::from(vec![
            Span::styled("Theme: ", Style::default().fg(Theme::accent())),
            hint_text,
        ]));
        if let Some(status) = &app.status {
            lines.push(Line::from(Span::styled(
                status.as_str(),
                Style::default()
                    .fg(Theme::highlight())
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "space: new palette  <-/->: select  l: lock  c: copy  ?: help  q: quit",
                Style::default().fg(Theme::dim()),
            )));
        }
    }

    lines
}

fn render_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(help::build_help_text())
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Theme::secondary()))
                .title(" Help "),
        );
    frame.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
