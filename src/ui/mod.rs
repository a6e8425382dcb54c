mod counter;
mod fact_alert;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

/// Draw one frame from the current state snapshot.
pub fn render(frame: &mut Frame, state: &AppState, service_host: &str) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    counter::render(frame, &app_layout, state);
    status_bar::render(frame, app_layout.status_bar, service_host);

    // Drawn last so it sits above the controls.
    fact_alert::render(frame, state);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    /// Flatten the rendered buffer into one string per row.
    pub fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    pub fn screen(terminal: &Terminal<TestBackend>) -> String {
        rows(terminal).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::screen;
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|f| render(f, state, "numbersapi.com"))
            .unwrap();
        screen(&terminal)
    }

    #[test]
    fn test_render_without_alert() {
        let text = draw(&AppState {
            count: -12,
            pending_alert: None,
        });
        assert!(text.contains("-12"));
        assert!(text.contains("Number fact"));
        assert!(text.contains("numbersapi.com"));
        assert!(!text.contains("Enter/Esc"));
    }

    #[test]
    fn test_render_with_alert() {
        let text = draw(&AppState {
            count: 3,
            pending_alert: Some("3 is odd".to_string()),
        });
        assert!(text.contains("3 is odd"));
        assert!(text.contains("Enter/Esc"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        let state = AppState {
            count: 1,
            pending_alert: Some("1 is the loneliest number.".to_string()),
        };
        terminal.draw(|f| render(f, &state, "numbersapi.com")).unwrap();
    }
}
