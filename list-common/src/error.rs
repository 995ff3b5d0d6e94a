//! Errors reported by the non-panicking list accessors.

use thiserror::Error;

/// Failure of a list operation that needs a non-empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The named operation (`"head"` or `"tail"`) was applied to the empty list.
    #[error("{operation} on empty list")]
    EmptyList { operation: &'static str },
}
