use actix_web::{web, App};
use chrono::{Duration, Utc};
use entity::scrum_scrum_user::{ActiveModel as UserActive, Model as UserModel};
use entity::scrum_scrum_user_token::{ActiveModel as TokenActive, Client, Model as TokenModel};
use scrum_scrum::{
    config::EnvConfig,
    db::db_service::DbService,
    types::{error::AppError, user::DBUserCreate},
    utils::token::encrypt,
};
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;

use super::test_data::PASSWORD;

pub struct TestClient {
    pub db: Arc<DbService>,
    pub config: EnvConfig,
}

impl TestClient {
    pub fn new(db: Arc<DbService>, config: EnvConfig) -> Self {
        TestClient { db, config }
    }

    #[allow(dead_code)]
    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.config.clone()))
            .configure(scrum_scrum::routes::configure_routes)
    }

    /// Inserts a user whose password is [`PASSWORD`].
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str) -> Result<UserModel, AppError> {
        let password_hash = encrypt(PASSWORD).expect("Failed to hash password");
        self.db.create_user(DBUserCreate {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            name: "Test User".to_string(),
            password_hash,
        }).await
    }

    /// Issues a token directly, skipping the login route.
    #[allow(dead_code)]
    pub async fn issue_token(&self, user: &UserModel, client: Client) -> TokenModel {
        self.db.get_or_create_token(user.id, client)
            .await
            .expect("Failed to issue token")
            .0
    }

    /// Moves a token's `created_on` into the past.
    #[allow(dead_code)]
    pub async fn age_token(&self, token: TokenModel, age: Duration) -> TokenModel {
        let mut am: TokenActive = token.into();
        am.created_on = Set(Utc::now() - age);
        am.update(self.db.connection())
            .await
            .expect("Failed to age token")
    }

    /// Flips `is_active` off, as an admin would.
    #[allow(dead_code)]
    pub async fn deactivate(&self, user: &UserModel) -> UserModel {
        let mut am: UserActive = user.clone().into();
        am.is_active = Set(false);
        am.update(self.db.connection())
            .await
            .expect("Failed to deactivate user")
    }
}
