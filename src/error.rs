//! Failure signals for the mutating [`Tree`][crate::Tree] operations.

/// The ways [`Tree::add`][crate::Tree::add] and [`Tree::remove`][crate::Tree::remove] can fail.
/// Both leave the tree exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TreeError {
    /// An equal value is already stored in the tree.
    #[error("an equal value is already stored in the tree")]
    DuplicateKey,
    /// No stored value compares equal to the requested one.
    #[error("no equal value is stored in the tree")]
    NotFound,
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T> = std::result::Result<T, TreeError>;
