//! Modal alert showing the last fetched fact.

use crate::app::state::AppState;
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

const MIN_WIDTH: u16 = 30;
const MAX_WIDTH: u16 = 60;
const HINT: &str = "[ OK ]  Enter/Esc";

pub fn render(frame: &mut Frame, state: &AppState) {
    let Some(text) = state.pending_alert.as_deref() else {
        return;
    };

    let area = frame.area();
    let body = Paragraph::new(text)
        .style(Theme::alert_text())
        .wrap(Wrap { trim: true });

    let popup_w = popup_width(text, area.width);
    // border + padding on each side
    let text_w = popup_w.saturating_sub(4).max(1);
    // border, text, blank line, hint
    let text_h = u16::try_from(body.line_count(text_w).max(1)).unwrap_or(u16::MAX);
    let popup_h = text_h.saturating_add(4).min(area.height);
    let popup_area = centered(area, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Number fact ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Style::default().fg(Theme::ALERT))
        .style(Style::default().bg(Theme::BG_SURFACE));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let hint_h = if inner.height >= 3 { 2 } else { 0 };
    let text_area = Rect::new(
        inner.x.saturating_add(1),
        inner.y,
        inner.width.saturating_sub(2),
        inner.height - hint_h,
    );
    frame.render_widget(body, text_area);

    if hint_h > 0 {
        let hint_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        let hint = Paragraph::new(Span::styled(HINT, Theme::hint())).alignment(Alignment::Center);
        frame.render_widget(hint, hint_area);
    }
}

/// Fits the widest text line plus padding, within the min/max bounds.
fn popup_width(text: &str, area_width: u16) -> u16 {
    u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .saturating_add(4)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(area_width)
}
