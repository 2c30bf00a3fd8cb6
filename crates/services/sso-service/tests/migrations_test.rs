//! Migration lifecycle tests.

mod support;

use sea_orm::EntityTrait;

use common::DatabaseConfig;
use sso_service_lib::infra::Database;
use sso_service_lib::repository::entities::application;
use sso_service_lib::{run_migrations, MigrateAction};
use support::{sqlite_db, APP_ID};

const ACCOUNTS_MIGRATION: &str = "m20240101_000001_create_accounts_table";
const APPLICATIONS_MIGRATION: &str = "m20240101_000002_create_applications_table";

#[tokio::test]
async fn test_connect_applies_all_migrations() {
    let db = sqlite_db().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(
        status,
        vec![
            (ACCOUNTS_MIGRATION.to_string(), true),
            (APPLICATIONS_MIGRATION.to_string(), true),
        ]
    );
    db.ping().await.unwrap();
}

#[tokio::test]
async fn test_rollback_reverts_last_migration() {
    let db = sqlite_db().await;

    db.rollback_migration().await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert_eq!(status[0], (ACCOUNTS_MIGRATION.to_string(), true));
    assert_eq!(status[1], (APPLICATIONS_MIGRATION.to_string(), false));
    assert!(application::Entity::find()
        .all(db.connection())
        .await
        .is_err());

    db.run_migrations().await.unwrap();
    assert!(db.migration_status().await.unwrap().iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_fresh_drops_data_and_reapplies() {
    let db = sqlite_db().await;
    assert!(application::Entity::find_by_id(APP_ID)
        .one(db.connection())
        .await
        .unwrap()
        .is_some());

    db.fresh_migrations().await.unwrap();

    assert!(application::Entity::find()
        .all(db.connection())
        .await
        .unwrap()
        .is_empty());
    assert!(db.migration_status().await.unwrap().iter().all(|(_, applied)| *applied));
}

#[tokio::test]
async fn test_migrate_commands_need_only_database_config() {
    let path = std::env::temp_dir().join(format!("sso-migrate-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let config = DatabaseConfig {
        url: format!("sqlite://{}?mode=rwc", path.display()),
        ..DatabaseConfig::default()
    };

    for action in [
        MigrateAction::Up,
        MigrateAction::Status,
        MigrateAction::Down,
        MigrateAction::Fresh,
    ] {
        run_migrations(&config, action).await.unwrap();
    }

    let db = Database::connect_without_migrations(&config).await.unwrap();
    assert!(db.migration_status().await.unwrap().iter().all(|(_, applied)| *applied));

    drop(db);
    let _ = std::fs::remove_file(&path);
}
