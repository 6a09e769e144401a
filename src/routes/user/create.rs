use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{DBUserCreate, RUserCreate, UserRes};
use crate::utils::token::encrypt;
use actix_web::{post, web};
use std::sync::Arc;
use validator::Validate;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RUserCreate>,
) -> ApiResult<UserRes> {
    body.validate()?;
    let body = body.into_inner();

    let password_hash = encrypt(&body.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = db
        .create_user(DBUserCreate {
            username: body.username,
            email: body.email,
            name: body.name,
            password_hash,
        })
        .await?;

    Ok(ApiResponse::Created(user.into()))
}
