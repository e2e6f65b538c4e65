use crate::types::Capability;

/// The caller supplied a content source whose uri is not a valid absolute
/// URL. There is no safe address to substitute, so resolution surfaces
/// this to whoever triggered it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed content source uri `{uri}`: {reason}")]
pub struct MalformedSourceError {
    /// The uri exactly as the caller supplied it.
    pub uri: String,
    /// Parser description of what is wrong with it.
    pub reason: String,
}

/// The caller invoked an operation the current backend cannot provide.
///
/// Carries the operation so callers branching on capability can tell these
/// apart from source or bridge failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unsupported operation: {operation}")]
pub struct UnsupportedOperationError {
    pub operation: Capability,
}

#[derive(Debug, thiserror::Error)]
pub enum GlasspaneError {
    #[error(transparent)]
    Source(#[from] MalformedSourceError),

    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperationError),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("{0}")]
    Other(String),
}
