//! Unified error handling for the authentication service.
//!
//! Provides a single error type that:
//! - carries the failing operation name for diagnostics
//! - exposes a stable `AppErrorKind` callers branch on
//! - converts to Tonic gRPC status codes

use domain::{BoxError, StoreError};
use thiserror::Error;
use tonic::Status;

/// Classification callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppErrorKind {
    InvalidCredentials,
    AccountAlreadyExists,
    AccountNotFound,
    ApplicationNotFound,
    Unexpected,
}

impl AppErrorKind {
    /// Error code for clients
    pub fn code(&self) -> &'static str {
        match self {
            AppErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            AppErrorKind::AccountAlreadyExists => "ACCOUNT_ALREADY_EXISTS",
            AppErrorKind::AccountNotFound => "ACCOUNT_NOT_FOUND",
            AppErrorKind::ApplicationNotFound => "APPLICATION_NOT_FOUND",
            AppErrorKind::Unexpected => "INTERNAL_ERROR",
        }
    }
}

/// Authentication service errors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Unknown email or wrong password. Carries no cause on purpose:
    /// both paths must look the same to the caller.
    #[error("{op}: invalid credentials")]
    InvalidCredentials { op: &'static str },

    #[error("{op}: account already exists")]
    AccountAlreadyExists {
        op: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("{op}: account not found")]
    AccountNotFound {
        op: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("{op}: application not found")]
    ApplicationNotFound {
        op: &'static str,
        #[source]
        source: StoreError,
    },

    /// Hashing, signing or storage failure that has no dedicated kind
    #[error("{op}: unexpected failure")]
    Unexpected {
        op: &'static str,
        #[source]
        source: BoxError,
    },
}

impl AppError {
    pub fn kind(&self) -> AppErrorKind {
        match self {
            AppError::InvalidCredentials { .. } => AppErrorKind::InvalidCredentials,
            AppError::AccountAlreadyExists { .. } => AppErrorKind::AccountAlreadyExists,
            AppError::AccountNotFound { .. } => AppErrorKind::AccountNotFound,
            AppError::ApplicationNotFound { .. } => AppErrorKind::ApplicationNotFound,
            AppError::Unexpected { .. } => AppErrorKind::Unexpected,
        }
    }

    /// Name of the operation that failed
    pub fn op(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials { op }
            | AppError::AccountAlreadyExists { op, .. }
            | AppError::AccountNotFound { op, .. }
            | AppError::ApplicationNotFound { op, .. }
            | AppError::Unexpected { op, .. } => *op,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials { .. } => "invalid email or password".to_string(),
            AppError::AccountAlreadyExists { .. } => "account already exists".to_string(),
            AppError::AccountNotFound { .. } => "account not found".to_string(),
            AppError::ApplicationNotFound { .. } => "application not found".to_string(),
            AppError::Unexpected { op, source } => {
                tracing::error!(op = %op, error = %source, "Unexpected error");
                "internal error".to_string()
            }
        }
    }
}

// =============================================================================
// gRPC Status (Tonic)
// =============================================================================

impl From<AppError> for Status {
    fn from(err: AppError) -> Self {
        let code = match err.kind() {
            AppErrorKind::InvalidCredentials => tonic::Code::Unauthenticated,
            AppErrorKind::AccountAlreadyExists => tonic::Code::AlreadyExists,
            AppErrorKind::AccountNotFound | AppErrorKind::ApplicationNotFound => {
                tonic::Code::NotFound
            }
            AppErrorKind::Unexpected => tonic::Code::Internal,
        };
        tracing::debug!(op = err.op(), code = err.kind().code(), "Request failed");

        Status::new(code, err.user_message())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_credentials(op: &'static str) -> Self {
        AppError::InvalidCredentials { op }
    }

    pub fn unexpected(op: &'static str, source: impl Into<BoxError>) -> Self {
        AppError::Unexpected {
            op,
            source: source.into(),
        }
    }
}
