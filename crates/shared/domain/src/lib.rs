//! Domain layer - Core identity entities and capabilities.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Storage, token signing and transport live in the service crates.

pub mod account;
pub mod application;
pub mod constants;
pub mod error;
pub mod password;

pub use account::Account;
pub use application::Application;
pub use constants::*;
pub use error::{BoxError, StoreError, StoreResult};
pub use password::{Argon2Hasher, HashCost, HashError, PasswordHasher};
