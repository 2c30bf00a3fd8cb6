//! gRPC protocol buffer definitions.
//!
//! This crate contains the generated gRPC service definitions for the
//! `sso.Auth` service: Register, Login and IsAdmin.

/// Single-sign-on service definitions.
pub mod sso {
    tonic::include_proto!("sso");
}

// Re-export commonly used items
pub use sso::auth_server::{Auth, AuthServer};
