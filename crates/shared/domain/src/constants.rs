//! Domain-level constants.
//!
//! These constants define hashing defaults and operation names.

// =============================================================================
// Password hashing (Argon2id)
// =============================================================================

/// Default memory cost in KiB
pub const DEFAULT_ARGON2_MEMORY_KIB: u32 = 19_456;

/// Default number of iterations
pub const DEFAULT_ARGON2_ITERATIONS: u32 = 2;

/// Default degree of parallelism
pub const DEFAULT_ARGON2_PARALLELISM: u32 = 1;

// =============================================================================
// Operation names (used to tag errors and log spans)
// =============================================================================

pub const OP_REGISTER: &str = "auth.register";
pub const OP_LOGIN: &str = "auth.login";
pub const OP_IS_ADMIN: &str = "auth.is_admin";
