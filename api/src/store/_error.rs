// this module is transparently re-exported by its parent `store`
use thiserror::Error;

/// Type alias for `Result` with default error [`StoreError`].
pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;

/// An error raised by a [`Store`](super::Store).
///
/// Lifecycle errors ([`NotFound`](StoreError::NotFound), [`Busy`](StoreError::Busy))
/// are never retried automatically.
/// After an [`Io`](StoreError::Io) error, the state of the current transaction is undefined,
/// and the store should be reopened.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No storage exists at the given locator, and creation was not requested.
    #[error("No store found at '{locator}'")]
    NotFound { locator: String },
    /// The storage at the given locator is in use.
    #[error("Store at '{locator}' is busy")]
    Busy { locator: String },
    /// The backend failed.
    #[error("Store backend failure: {0}")]
    Io(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The quad can not be stored (predicate is not an IRI, or context is a literal).
    #[error("Invalid quad: {0}")]
    InvalidQuad(String),
    /// The store can not hold any more distinct terms.
    #[error("Store capacity exceeded: more than {0} distinct terms")]
    Capacity(usize),
}

impl StoreError {
    /// Wrap any backend error into [`StoreError::Io`].
    pub fn io<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        StoreError::Io(err.into())
    }
}
