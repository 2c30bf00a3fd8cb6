//! Application (relying party) domain entity.

/// An external consumer of issued tokens.
///
/// Applications are provisioned outside this service. Each one holds the
/// symmetric secret its users' tokens are signed with.
#[derive(Clone, PartialEq, Eq)]
pub struct Application {
    pub id: i32,
    pub name: String,
    pub secret: String,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

impl Application {
    pub fn new(id: i32, name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            secret: secret.into(),
        }
    }

    /// Secret bytes used as the signing key
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}
