use crate::app::action::Action;
use crate::app::state::AppState;
use crate::ui::layout::{compute_layout, Control};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

/// What the run loop should do with a terminal event.
#[derive(Debug)]
pub enum UiCommand {
    Dispatch(Action),
    Quit,
}

/// Translate a terminal event into a command. `viewport` is the full
/// terminal area, used to hit-test mouse clicks against the controls.
pub fn handle_terminal(state: &AppState, event: CEvent, viewport: Rect) -> Option<UiCommand> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse, viewport),
        _ => None,
    }
}

fn handle_key(state: &AppState, key: KeyEvent) -> Option<UiCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiCommand::Quit);
    }
    if key.code == KeyCode::Char('q') {
        return Some(UiCommand::Quit);
    }

    // The alert is modal: only dismissal gets through.
    if state.alert_visible() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                Some(UiCommand::Dispatch(Action::AlertDismissed))
            }
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Char('-') | KeyCode::Left => Action::Decrement,
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => Action::Increment,
        KeyCode::Char('f') | KeyCode::Enter => Action::RequestFact,
        _ => return None,
    };
    Some(UiCommand::Dispatch(action))
}

fn handle_mouse(state: &AppState, mouse: MouseEvent, viewport: Rect) -> Option<UiCommand> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if state.alert_visible() {
        return Some(UiCommand::Dispatch(Action::AlertDismissed));
    }

    let action = match compute_layout(viewport).control_at(mouse.column, mouse.row)? {
        Control::Decrement => Action::Decrement,
        Control::Increment => Action::Increment,
        Control::Fact => Action::RequestFact,
    };
    Some(UiCommand::Dispatch(action))
}
