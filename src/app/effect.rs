/// Asynchronous work requested by the store.
///
/// An effect only describes the work. The runner executes it and feeds the
/// resulting action back through the event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Fetch trivia for `number`, captured when the request was dispatched.
    FetchFact { number: i64 },
}
