use crate::db::db_service::DbService;
use crate::{
    types::{
        error::AppError,
        user::{duplicate_username, DBUserCreate, DBUserUpdate},
    },
    utils::token::{self, verify},
};
use chrono::Utc;
use entity::scrum_scrum_user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, SqlErr,
};
use tracing::{info, warn};
use uuid::Uuid;

impl DbService {
    pub async fn user_exists_by_username(&self, username: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .count(&self.database_connection)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.database_connection)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Username)
            .all(&self.database_connection)
            .await?)
    }

    /// Signup: create user. Usernames are unique.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        if self.user_exists_by_username(&payload.username).await? {
            return Err(AppError::Fields(duplicate_username()));
        }
        let now = Utc::now();

        let inserted = UserActive {
            id: Set(token::new_id()),
            username: Set(payload.username),
            email: Set(payload.email),
            name: Set(payload.name),
            password: Set(payload.password_hash),
            is_superuser: Set(false),
            is_staff: Set(false),
            is_active: Set(true),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.database_connection)
        .await;

        match inserted {
            Ok(user) => {
                info!("created user {} ({})", user.username, user.id);
                Ok(user)
            }
            // lost a race against a signup with the same username
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::Fields(duplicate_username()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Applies the restricted update set. Absent fields are left untouched.
    pub async fn update_user(&self, user_id: Uuid, changes: DBUserUpdate) -> Result<UserModel, AppError> {
        let mut am: UserActive = self.get_user_by_id(&user_id).await?.into();
        if let Some(email) = changes.email {
            am.email = Set(email);
        }
        if let Some(name) = changes.name {
            am.name = Set(name);
        }
        if let Some(hash) = changes.password_hash {
            am.password = Set(hash);
        }
        am.updated_at = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Credential check for login. Every failure reads the same to the caller.
    pub async fn check_credentials(&self, username: &str, password: &str) -> Result<UserModel, AppError> {
        let invalid = || AppError::Validation("Unable to log in with provided credentials.".to_string());

        let user = match self.get_user_by_username(username).await {
            Ok(user) => user,
            Err(AppError::NotFound) => return Err(invalid()),
            Err(e) => return Err(e),
        };

        let matches = verify(password, &user.password)
            .map_err(|e| AppError::Internal(format!("stored password hash unreadable: {e}")))?;
        if !matches || !user.is_active {
            warn!("failed login for {}", username);
            return Err(invalid());
        }

        Ok(user)
    }
}
