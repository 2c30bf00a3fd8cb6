//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, Set};

use common::DatabaseConfig;
use domain::{
    Account, Application, Argon2Hasher, HashCost, PasswordHasher, StoreError, StoreResult,
};
use sso_service_lib::infra::Database;
use sso_service_lib::repository::entities::application;
use sso_service_lib::repository::{AccountProvider, AccountSaver, ApplicationProvider};

pub const APP_ID: i32 = 1;
pub const APP_SECRET: &str = "test_secret";
pub const TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Argon2id with the smallest cost that still exercises the real algorithm.
pub fn cheap_hasher() -> Arc<dyn PasswordHasher> {
    Arc::new(
        Argon2Hasher::new(HashCost {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .expect("valid argon2 params"),
    )
}

/// Fresh in-memory SQLite database with migrations applied and one
/// application seeded.
///
/// Every pooled connection to `sqlite::memory:` opens a separate database,
/// so the pool is pinned to a single connection.
pub async fn sqlite_db() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
        connect_timeout_secs: 5,
    };
    let db = Database::connect(&config)
        .await
        .expect("in-memory database");

    seed_application(db.connection(), APP_ID, "test", APP_SECRET).await;
    db
}

pub async fn seed_application(conn: &DatabaseConnection, id: i32, name: &str, secret: &str) {
    let model = application::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        secret: Set(secret.to_string()),
    };
    application::Entity::insert(model)
        .exec(conn)
        .await
        .expect("seed application");
}

#[derive(Default)]
struct Tables {
    accounts: Vec<Account>,
    applications: HashMap<i32, Application>,
}

/// In-memory implementation of the three store capabilities.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn with_application(self, application: Application) -> Self {
        self.tables
            .lock()
            .unwrap()
            .applications
            .insert(application.id, application);
        self
    }

    pub fn set_admin(&self, account_id: i64, is_admin: bool) {
        let mut tables = self.tables.lock().unwrap();
        if let Some(account) = tables.accounts.iter_mut().find(|a| a.id == account_id) {
            account.is_admin = is_admin;
        }
    }

    pub fn account_count(&self) -> usize {
        self.tables.lock().unwrap().accounts.len()
    }
}

#[async_trait]
impl AccountSaver for InMemoryStore {
    async fn create_account(&self, email: String, password_hash: String) -> StoreResult<i64> {
        let mut tables = self.tables.lock().unwrap();
        if tables.accounts.iter().any(|a| a.email == email) {
            return Err(StoreError::AccountExists);
        }
        let id = tables.accounts.len() as i64 + 1;
        tables.accounts.push(Account::new(id, email, password_hash));
        Ok(id)
    }
}

#[async_trait]
impl AccountProvider for InMemoryStore {
    async fn find_account_by_email(&self, email: &str) -> StoreResult<Account> {
        self.tables
            .lock()
            .unwrap()
            .accounts
            .iter()
            .find(|a| a.email == email)
            .cloned()
            .ok_or(StoreError::AccountNotFound)
    }

    async fn is_account_admin(&self, account_id: i64) -> StoreResult<bool> {
        self.tables
            .lock()
            .unwrap()
            .accounts
            .iter()
            .find(|a| a.id == account_id)
            .map(|a| a.is_admin)
            .ok_or(StoreError::AccountNotFound)
    }
}

#[async_trait]
impl ApplicationProvider for InMemoryStore {
    async fn find_application_by_id(&self, id: i32) -> StoreResult<Application> {
        self.tables
            .lock()
            .unwrap()
            .applications
            .get(&id)
            .cloned()
            .ok_or(StoreError::ApplicationNotFound)
    }
}
