//! Common utilities shared across services.
//!
//! This crate provides:
//! - Unified error handling with gRPC status conversion
//! - Configuration structures
//! - Tracing setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{AppError, AppErrorKind, AppResult};
