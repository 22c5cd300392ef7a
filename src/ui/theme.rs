use ratatui::style::Color;

/// Unified chrome colors for the application. Deliberately muted so the
/// swatches themselves carry the screen.
pub struct Theme;

impl Theme {
    /// Primary branding color
    pub fn primary() -> Color {
        Color::Magenta
    }

    /// Borders and frame chrome
    pub fn secondary() -> Color {
        Color::DarkGray
    }

    /// Selected swatch outline
    pub fn highlight() -> Color {
        Color::Yellow
    }

    /// Dimmed/inactive text
    pub fn dim() -> Color {
        Color::DarkGray
    }

    /// Normal text
    pub fn text() -> Color {
        Color::White
    }

    /// Section titles and status messages
    pub fn accent() -> Color {
        Color::LightCyan
    }
}
