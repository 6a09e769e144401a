#![allow(dead_code)]

use std::sync::Arc;
use sea_orm::ConnectOptions;
use scrum_scrum::config::EnvConfig;
use scrum_scrum::db::db_service::DbService;

pub mod client;

pub const TEST_EXPIRATION_DAYS: i64 = 7;

pub struct TestContext {
    pub db: Arc<DbService>,
    pub config: EnvConfig,
}

impl TestContext {
    /// Fresh, migrated in-memory database per test.
    pub async fn new() -> TestContext {
        // one connection, otherwise every pooled connection sees its own empty database
        let mut options = ConnectOptions::new("sqlite::memory:");
        options.max_connections(1).min_connections(1).sqlx_logging(false);

        let db = Arc::new(
            DbService::connect(options)
                .await
                .expect("Failed to initialize DbService"),
        );

        TestContext {
            db,
            config: get_test_config(),
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        db_url: "sqlite::memory:".to_string(),
        token_expiration_days: TEST_EXPIRATION_DAYS,
    }
}

// Test data helpers
pub mod test_data {
    use scrum_scrum::types::user::RUserCreate;

    pub const PASSWORD: &str = "sprint-planning-42";

    pub fn sample_user(username: &str) -> RUserCreate {
        RUserCreate {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            name: "Test User".to_string(),
            password: PASSWORD.to_string(),
        }
    }
}
