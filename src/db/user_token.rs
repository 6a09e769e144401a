use crate::db::db_service::DbService;
use crate::{types::error::AppError, utils::token::new_token};
use chrono::Utc;
use entity::scrum_scrum_user::{Entity as User, Model as UserModel};
use entity::scrum_scrum_user_token::{
    ActiveModel as TokenActive, Client, Column, Entity as Token, Model as TokenModel,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, SqlErr};
use tracing::info;
use uuid::Uuid;

impl DbService {
    pub async fn get_token(&self, user_id: Uuid, client: Client) -> Result<Option<TokenModel>, AppError> {
        Ok(Token::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Client.eq(client))
            .one(&self.database_connection)
            .await?)
    }

    /// Returns the token for (user, client), creating it when missing.
    /// The flag is `true` when a new token was created.
    pub async fn get_or_create_token(&self, user_id: Uuid, client: Client) -> Result<(TokenModel, bool), AppError> {
        if let Some(existing) = self.get_token(user_id, client).await? {
            return Ok((existing, false));
        }

        let inserted = TokenActive {
            key: Set(new_token()),
            user_id: Set(user_id),
            client: Set(client),
            created_on: Set(Utc::now()),
        }
        .insert(&self.database_connection)
        .await;

        match inserted {
            Ok(token) => {
                info!("issued {} token for user {}", client.as_str(), user_id);
                Ok((token, true))
            }
            // a concurrent login for the same (user, client) won the insert
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let existing = self
                    .get_token(user_id, client)
                    .await?
                    .ok_or(AppError::Db(e))?;
                Ok((existing, false))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Restarts the expiration window. The key stays the same.
    pub async fn refresh_token(&self, token: TokenModel) -> Result<TokenModel, AppError> {
        let mut am: TokenActive = token.into();
        am.created_on = Set(Utc::now());
        Ok(am.update(&self.database_connection).await?)
    }

    /// Looks a bearer key up together with its owner.
    pub async fn get_token_with_user(&self, key: &str) -> Result<(TokenModel, UserModel), AppError> {
        match Token::find_by_id(key.to_owned())
            .find_also_related(User)
            .one(&self.database_connection)
            .await?
        {
            Some((token, Some(user))) => Ok((token, user)),
            _ => Err(AppError::invalid_token()),
        }
    }
}
