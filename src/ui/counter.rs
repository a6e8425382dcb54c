use crate::app::state::AppState;
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    let panel = Block::default()
        .title(" Counter ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    frame.render_widget(panel, layout.panel);

    render_button(frame, layout.decrement, "−");
    render_button(frame, layout.increment, "+");
    render_button(frame, layout.fact, "Number fact");

    // Middle line of the three-row counter strip
    let count = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(state.count.to_string(), Theme::count())),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(count, layout.count);
}

fn render_button(frame: &mut Frame, area: Rect, label: &str) {
    let button = Paragraph::new(Span::styled(label, Theme::button_label()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(Theme::border_type())
                .border_style(Theme::button()),
        );
    frame.render_widget(button, area);
}
