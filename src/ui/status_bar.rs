use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &[(&str, &str)] = &[("-", "down"), ("+", "up"), ("f", "fact"), ("q", "quit")];

pub fn render(frame: &mut Frame, area: Rect, service_host: &str) {
    frame.render_widget(Paragraph::new(status_line(area.width, service_host)), area);
}

fn status_line(width: u16, service_host: &str) -> Line<'static> {
    let mut parts: Vec<Span> = Vec::new();

    for (key, label) in HINTS {
        parts.push(Span::styled(format!(" {} ", key), Theme::status_key()));
        parts.push(Span::styled(format!("{} ", label), Theme::status_bar()));
    }

    // Pad so the host sits at the right edge
    let host = Span::styled(format!(" {} ", service_host), Theme::status_bar());
    let used: usize = parts.iter().map(|s| s.width()).sum();
    let remaining = (width as usize).saturating_sub(used + host.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(host);

    Line::from(parts)
}
