//! Repository layer for data access.

pub mod entities;
mod credential_store;

pub use credential_store::{AccountProvider, AccountSaver, ApplicationProvider, CredentialStore};

#[cfg(any(test, feature = "test-utils"))]
pub use credential_store::{MockAccountProvider, MockAccountSaver, MockApplicationProvider};
