//! Credential store errors.
//!
//! Storage adapters classify their native failures into these values.
//! Anything that is not a missing row or a duplicate email stays opaque.

use thiserror::Error;

/// Boxed error used for opaque causes.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors reported by the credential store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No account row matched the lookup
    #[error("account not found")]
    AccountNotFound,

    /// No application row matched the lookup
    #[error("application not found")]
    ApplicationNotFound,

    /// An account with the same email is already stored
    #[error("account already exists")]
    AccountExists,

    /// Any other storage failure
    #[error("{op}: storage failure")]
    Storage {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl StoreError {
    /// Wrap an opaque storage failure with the store operation name
    pub fn storage(op: &'static str, source: impl Into<BoxError>) -> Self {
        StoreError::Storage {
            op,
            source: source.into(),
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
