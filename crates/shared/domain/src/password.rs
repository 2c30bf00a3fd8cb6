//! Password hashing capability.
//!
//! The service only depends on the `PasswordHasher` trait, so the algorithm
//! can be swapped without touching the authentication logic.
//! `Argon2Hasher` is the production implementation.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

use crate::constants::{
    DEFAULT_ARGON2_ITERATIONS, DEFAULT_ARGON2_MEMORY_KIB, DEFAULT_ARGON2_PARALLELISM,
};

/// Errors raised by a password hashing capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The configured cost parameters are rejected by the algorithm
    #[error("invalid hashing parameters: {0}")]
    InvalidParams(String),

    /// Hash derivation failed
    #[error("password hash failed: {0}")]
    Hash(String),

    /// The stored hash is not a valid PHC string
    #[error("invalid hash format: {0}")]
    Malformed(String),
}

/// One-way password hashing capability.
pub trait PasswordHasher: Send + Sync {
    /// Derive a salted hash of `plain_text`.
    fn hash(&self, plain_text: &str) -> Result<String, HashError>;

    /// Check `plain_text` against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch. Errors are reserved for hashes
    /// that cannot be checked at all.
    fn verify(&self, plain_text: &str, hash: &str) -> Result<bool, HashError>;
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_ARGON2_MEMORY_KIB,
            iterations: DEFAULT_ARGON2_ITERATIONS,
            parallelism: DEFAULT_ARGON2_PARALLELISM,
        }
    }
}

/// Argon2id password hasher with configurable cost.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl std::fmt::Debug for Argon2Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Argon2Hasher")
            .field("memory_kib", &self.params.m_cost())
            .field("iterations", &self.params.t_cost())
            .field("parallelism", &self.params.p_cost())
            .finish()
    }
}

impl Argon2Hasher {
    /// Build a hasher, rejecting cost parameters Argon2 does not accept.
    pub fn new(cost: HashCost) -> Result<Self, HashError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| HashError::InvalidParams(e.to_string()))?;
        Ok(Self { params })
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| HashError::Hash(e.to_string()))?;
        Ok(hash.to_string())
    }

    fn verify(&self, plain_text: &str, hash: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashError::Malformed(e.to_string()))?;

        // Cost parameters come from the stored hash, not from self.
        match self.argon2().verify_password(plain_text.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HashError::Malformed(e.to_string())),
        }
    }
}
