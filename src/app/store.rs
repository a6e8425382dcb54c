use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::state::AppState;
use tracing::debug;

pub const FACT_FAILURE_TEXT: &str = "Could not load a number fact";

/// Single owner of [`AppState`]. All mutation goes through [`Store::dispatch`].
#[derive(Debug, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        debug!(?action, "dispatch");
        reduce(&mut self.state, action)
    }
}

/// Apply `action` to `state` and describe any follow-up work.
///
/// Synchronous and side-effect free; the returned effect is executed
/// elsewhere.
pub fn reduce(state: &mut AppState, action: Action) -> Option<Effect> {
    match action {
        Action::Increment => {
            state.count = state.count.wrapping_add(1);
            None
        }
        Action::Decrement => {
            state.count = state.count.wrapping_sub(1);
            None
        }
        Action::RequestFact => Some(Effect::FetchFact {
            number: state.count,
        }),
        Action::FactLoaded(Ok(text)) => {
            state.pending_alert = Some(text);
            None
        }
        Action::FactLoaded(Err(_)) => {
            state.pending_alert = Some(FACT_FAILURE_TEXT.to_string());
            None
        }
        Action::AlertDismissed => {
            state.pending_alert = None;
            None
        }
    }
}
