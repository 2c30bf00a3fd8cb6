//! Authentication service - registration, login and admin checks.
//!
//! Depends only on injected capabilities: the credential store traits,
//! a password hasher and a token issuer. Holds no mutable state.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::repository::{AccountProvider, AccountSaver, ApplicationProvider};
use crate::token::TokenIssuer;
use common::{AppError, AppResult};
use domain::{BoxError, PasswordHasher, StoreError, OP_IS_ADMIN, OP_LOGIN, OP_REGISTER};

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account and return its id
    async fn register(&self, email: String, password: String) -> AppResult<i64>;

    /// Verify credentials and return a token signed for the application
    async fn login(&self, email: String, password: String, app_id: i32) -> AppResult<String>;

    /// Report whether the account has administrator privileges
    async fn is_admin(&self, account_id: i64) -> AppResult<bool>;
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    account_saver: Arc<dyn AccountSaver>,
    account_provider: Arc<dyn AccountProvider>,
    application_provider: Arc<dyn ApplicationProvider>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: TokenIssuer,
    token_ttl: Duration,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(
        account_saver: Arc<dyn AccountSaver>,
        account_provider: Arc<dyn AccountProvider>,
        application_provider: Arc<dyn ApplicationProvider>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: TokenIssuer,
        token_ttl: Duration,
    ) -> Self {
        Self {
            account_saver,
            account_provider,
            application_provider,
            hasher,
            issuer,
            token_ttl,
        }
    }

    /// Hash on the blocking pool; Argon2 is deliberately slow.
    async fn hash_password(&self, password: String) -> Result<String, BoxError> {
        let hasher = Arc::clone(&self.hasher);
        let hash = tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;
        Ok(hash)
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, BoxError> {
        let hasher = Arc::clone(&self.hasher);
        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash)).await??;
        Ok(valid)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    #[instrument(skip(self, password), fields(op = OP_REGISTER))]
    async fn register(&self, email: String, password: String) -> AppResult<i64> {
        debug!("Registering account");

        let password_hash = self.hash_password(password).await.map_err(|e| {
            error!(error = %e, "Failed to hash password");
            AppError::unexpected(OP_REGISTER, e)
        })?;

        match self.account_saver.create_account(email, password_hash).await {
            Ok(account_id) => {
                info!(account_id, "Account registered");
                Ok(account_id)
            }
            Err(source @ StoreError::AccountExists) => {
                warn!("Account already exists");
                Err(AppError::AccountAlreadyExists {
                    op: OP_REGISTER,
                    source,
                })
            }
            Err(e) => Err(AppError::unexpected(OP_REGISTER, e)),
        }
    }

    #[instrument(skip(self, password), fields(op = OP_LOGIN))]
    async fn login(&self, email: String, password: String, app_id: i32) -> AppResult<String> {
        debug!("Logging in account");

        let account = match self.account_provider.find_account_by_email(&email).await {
            Ok(account) => account,
            Err(StoreError::AccountNotFound) => {
                warn!("Account not found");
                // Spend the same hashing work as a real verification so the
                // unknown email path cannot be told apart by timing.
                if let Err(e) = self.hash_password(password).await {
                    debug!(error = %e, "Throwaway hash failed");
                }
                return Err(AppError::invalid_credentials(OP_LOGIN));
            }
            Err(e) => return Err(AppError::unexpected(OP_LOGIN, e)),
        };

        let password_valid = self
            .verify_password(password, account.password_hash.clone())
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to verify password");
                AppError::unexpected(OP_LOGIN, e)
            })?;

        if !password_valid {
            warn!("Invalid password");
            return Err(AppError::invalid_credentials(OP_LOGIN));
        }

        let application = match self.application_provider.find_application_by_id(app_id).await {
            Ok(application) => application,
            Err(source @ StoreError::ApplicationNotFound) => {
                error!("Application not found");
                return Err(AppError::ApplicationNotFound {
                    op: OP_LOGIN,
                    source,
                });
            }
            Err(e) => {
                error!(error = %e, "Failed to get application");
                return Err(AppError::unexpected(OP_LOGIN, e));
            }
        };

        let token = self
            .issuer
            .issue(&account, &application, self.token_ttl)
            .map_err(|e| {
                error!(error = %e, "Failed to create token");
                AppError::unexpected(OP_LOGIN, e)
            })?;

        info!(
            account_id = account.id,
            app_name = %application.name,
            "Account logged in"
        );

        Ok(token)
    }

    #[instrument(skip(self), fields(op = OP_IS_ADMIN))]
    async fn is_admin(&self, account_id: i64) -> AppResult<bool> {
        debug!("Checking admin status");

        match self.account_provider.is_account_admin(account_id).await {
            Ok(is_admin) => {
                info!(is_admin, "Admin status checked");
                Ok(is_admin)
            }
            Err(source @ StoreError::AccountNotFound) => {
                warn!("Account not found");
                Err(AppError::AccountNotFound {
                    op: OP_IS_ADMIN,
                    source,
                })
            }
            Err(e) => Err(AppError::unexpected(OP_IS_ADMIN, e)),
        }
    }
}
