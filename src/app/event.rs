use crate::app::action::Action;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Follow-up action produced by a finished effect
    Action(Action),

    /// Terminal input stream ended or failed; nothing can reach the app anymore
    InputClosed,
}
