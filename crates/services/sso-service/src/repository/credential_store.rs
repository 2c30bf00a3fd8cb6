//! Credential store: account and application persistence.
//!
//! The authentication service depends on three narrow capabilities rather
//! than on the concrete store, so each can be replaced by a test double.
//! Every operation is a single parameterized statement.

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect, Set, SqlErr,
};

use super::entities::account::{self, Entity as AccountEntity};
use super::entities::application::Entity as ApplicationEntity;
use domain::{Account, Application, StoreError, StoreResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Persists new accounts.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountSaver: Send + Sync {
    /// Insert an account and return its new id.
    ///
    /// Fails with `StoreError::AccountExists` if the email is taken.
    async fn create_account(&self, email: String, password_hash: String) -> StoreResult<i64>;
}

/// Reads accounts.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountProvider: Send + Sync {
    /// Fails with `StoreError::AccountNotFound` if no account has this email.
    async fn find_account_by_email(&self, email: &str) -> StoreResult<Account>;

    /// Fails with `StoreError::AccountNotFound` if the id is unknown.
    async fn is_account_admin(&self, account_id: i64) -> StoreResult<bool>;
}

/// Reads relying-party applications.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ApplicationProvider: Send + Sync {
    /// Fails with `StoreError::ApplicationNotFound` if the id is unknown.
    async fn find_application_by_id(&self, id: i32) -> StoreResult<Application>;
}

/// SeaORM-backed implementation of all three capabilities.
#[derive(Clone)]
pub struct CredentialStore {
    db: DatabaseConnection,
}

impl CredentialStore {
    /// Create new store instance over a pooled connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Classify an insert failure: only a uniqueness violation has a domain meaning.
fn classify_insert_error(op: &'static str, err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::AccountExists,
        _ => StoreError::storage(op, err),
    }
}

#[async_trait]
impl AccountSaver for CredentialStore {
    async fn create_account(&self, email: String, password_hash: String) -> StoreResult<i64> {
        const OP: &str = "store.create_account";

        // is_admin is left to the column default
        let active_model = account::ActiveModel {
            email: Set(email),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        let result = AccountEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| classify_insert_error(OP, e))?;

        Ok(result.last_insert_id)
    }
}

#[async_trait]
impl AccountProvider for CredentialStore {
    async fn find_account_by_email(&self, email: &str) -> StoreResult<Account> {
        const OP: &str = "store.find_account_by_email";

        AccountEntity::find()
            .filter(account::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::storage(OP, e))?
            .map(Account::from)
            .ok_or(StoreError::AccountNotFound)
    }

    async fn is_account_admin(&self, account_id: i64) -> StoreResult<bool> {
        const OP: &str = "store.is_account_admin";

        AccountEntity::find_by_id(account_id)
            .select_only()
            .column(account::Column::IsAdmin)
            .into_tuple::<bool>()
            .one(&self.db)
            .await
            .map_err(|e| StoreError::storage(OP, e))?
            .ok_or(StoreError::AccountNotFound)
    }
}

#[async_trait]
impl ApplicationProvider for CredentialStore {
    async fn find_application_by_id(&self, id: i32) -> StoreResult<Application> {
        const OP: &str = "store.find_application_by_id";

        ApplicationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StoreError::storage(OP, e))?
            .map(Application::from)
            .ok_or(StoreError::ApplicationNotFound)
    }
}
