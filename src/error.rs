//! Error types for container operations.
//!
//! `remove` is the only fallible operation in the public surface. Everything
//! else either cannot fail or treats misuse as a caller bug.

use thiserror::Error;

/// Errors reported by [`OrderedContainer`](crate::OrderedContainer).
///
/// [`NotFound`](ContainerError::NotFound) covers both an empty container and
/// a value with zero occurrences; callers that need to tell the two apart
/// check `is_empty()` before removing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The requested value has no occurrence in the container.
    #[error("value not found in container")]
    NotFound,
}
