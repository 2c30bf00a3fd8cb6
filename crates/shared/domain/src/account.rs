//! Account domain entity.

/// A registered credential holder.
///
/// Accounts are created by registration and never mutated afterwards.
/// The admin flag is provisioned outside this service.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    pub email: String,
    /// PHC-formatted one-way hash, only ever checked through a `PasswordHasher`
    pub password_hash: String,
    pub is_admin: bool,
}

// Don't expose the hash in debug output
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

impl Account {
    /// Create a non-admin account
    pub fn new(id: i64, email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
            password_hash: password_hash.into(),
            is_admin: false,
        }
    }
}
