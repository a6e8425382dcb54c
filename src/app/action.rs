use crate::fact::FactError;

/// Everything that can change [`AppState`](crate::app::state::AppState).
///
/// User gestures produce the first four variants; `FactLoaded` only ever
/// comes back from the effect runner.
#[derive(Debug)]
pub enum Action {
    Increment,
    Decrement,
    RequestFact,
    FactLoaded(Result<String, FactError>),
    AlertDismissed,
}
