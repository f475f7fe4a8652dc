#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Editor content changed; carries the document's plain text.
    ContentChanged(String),
    /// Character limit configured, or removed with `None`.
    CharacterLimitChanged(Option<usize>),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
