use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

const PANEL_WIDTH: u16 = 36;
const PANEL_HEIGHT: u16 = 10;
const BUTTON_WIDTH: u16 = 7;
const FACT_BUTTON_WIDTH: u16 = 17;

pub struct AppLayout {
    pub panel: Rect,
    pub decrement: Rect,
    pub count: Rect,
    pub increment: Rect,
    pub fact: Rect,
    pub status_bar: Rect,
}

/// Which control sits under a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Decrement,
    Increment,
    Fact,
}

impl AppLayout {
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let pos = Position::new(column, row);
        if self.decrement.contains(pos) {
            Some(Control::Decrement)
        } else if self.increment.contains(pos) {
            Some(Control::Increment)
        } else if self.fact.contains(pos) {
            Some(Control::Fact)
        } else {
            None
        }
    }
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(PANEL_HEIGHT), // Counter panel
            Constraint::Length(1),         // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let panel = centered(content, PANEL_WIDTH, PANEL_HEIGHT);

    // Inside the panel border: gap | counter row | gap | fact row
    let inner = Rect::new(
        panel.x.saturating_add(1),
        panel.y.saturating_add(1),
        panel.width.saturating_sub(2),
        panel.height.saturating_sub(2),
    );
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top padding
            Constraint::Length(3), // − count +
            Constraint::Length(1), // Gap
            Constraint::Length(3), // Number fact
        ])
        .split(inner);

    let counter_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .horizontal_margin(2)
        .split(rows[1]);

    let fact = centered(rows[3], FACT_BUTTON_WIDTH, 3);

    AppLayout {
        panel,
        decrement: counter_row[0],
        count: counter_row[1],
        increment: counter_row[2],
        fact,
        status_bar,
    }
}

/// A `width` x `height` rect centered in `area`, clipped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_inside_panel() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = compute_layout(area);
        for rect in [layout.decrement, layout.count, layout.increment, layout.fact] {
            assert!(layout.panel.contains(Position::new(rect.x, rect.y)));
            assert!(rect.width > 0 && rect.height > 0);
        }
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
        assert!(layout.decrement.right() <= layout.count.x);
        assert!(layout.count.right() <= layout.increment.x);
    }

    #[test]
    fn test_control_at() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        let hit = |r: Rect| layout.control_at(r.x + r.width / 2, r.y + r.height / 2);
        assert_eq!(hit(layout.decrement), Some(Control::Decrement));
        assert_eq!(hit(layout.increment), Some(Control::Increment));
        assert_eq!(hit(layout.fact), Some(Control::Fact));
        assert_eq!(hit(layout.count), None);
        assert_eq!(layout.control_at(0, 0), None);
    }

    #[test]
    fn test_centered_clips_to_area() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(centered(area, 20, 20), area);
        assert_eq!(centered(area, 4, 2), Rect::new(5, 4, 4, 2));
    }
}
