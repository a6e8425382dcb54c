/// The whole application state.
///
/// Only [`Store`](crate::app::store::Store) mutates it; everything else sees
/// a shared reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub count: i64,
    /// Text of the alert waiting to be dismissed, if any.
    pub pending_alert: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alert_visible(&self) -> bool {
        self.pending_alert.is_some()
    }
}
