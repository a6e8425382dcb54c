use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(64, 196, 180);
    pub const BG_SURFACE: Color = Color::Rgb(30, 32, 40);
    pub const BG_ELEVATED: Color = Color::Rgb(44, 47, 58);
    pub const TEXT_MUTED: Color = Color::Rgb(128, 132, 148);
    pub const ALERT: Color = Color::Rgb(236, 196, 96);

    pub fn border_type() -> BorderType {
        BorderType::Rounded
    }

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn button_label() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn count() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn alert_text() -> Style {
        Style::default().fg(Color::White).bg(Self::BG_SURFACE)
    }

    pub fn hint() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Self::BG_ELEVATED)
    }

    pub fn status_key() -> Style {
        Style::default()
            .fg(Self::ACCENT_TEAL)
            .bg(Self::BG_ELEVATED)
            .add_modifier(Modifier::BOLD)
    }
}
