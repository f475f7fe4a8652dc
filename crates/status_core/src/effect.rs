#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Content grew past the character limit.
    LimitExceeded { characters: usize, limit: usize },
    /// Content is back within the limit, or the limit was lifted.
    LimitRestored,
}
