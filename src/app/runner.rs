use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::event::AppEvent;
use crate::fact::FactSource;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Executes effects off the event loop and posts their follow-up actions
/// back onto the same channel as terminal input.
///
/// Effects are never de-duplicated or cancelled. Two fetches in flight both
/// report back, in whatever order they finish.
pub struct EffectRunner<S> {
    source: Arc<S>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl<S: FactSource> EffectRunner<S> {
    pub fn new(source: Arc<S>, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { source, event_tx }
    }

    pub fn run(&self, effect: Effect) -> tokio::task::JoinHandle<()> {
        match effect {
            Effect::FetchFact { number } => {
                let source = Arc::clone(&self.source);
                let tx = self.event_tx.clone();
                tokio::spawn(async move {
                    info!(number, "fetching number fact");
                    let result = source.fetch(number).await;
                    match &result {
                        Ok(text) => info!(number, len = text.len(), "number fact loaded"),
                        Err(e) => warn!(number, error = %e, "number fact failed"),
                    }
                    // Receiver is gone only during shutdown.
                    let _ = tx.send(AppEvent::Action(Action::FactLoaded(result)));
                })
            }
        }
    }
}
