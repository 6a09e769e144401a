use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::AuthenticatedUser;
use crate::types::user::{DBUserUpdate, RUserPartialUpdate, RUserUpdate, UserRes};
use crate::utils::{permissions::update_own_user, token::encrypt};
use actix_web::{patch, put, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Shared tail of PUT and PATCH: load, authorize, validate, persist.
async fn apply_update(
    db: &DbService,
    actor: &AuthenticatedUser,
    target_id: Uuid,
    changes: RUserPartialUpdate,
) -> Result<UserRes, AppError> {
    let target = db.get_user_by_id(&target_id).await?;
    update_own_user(&actor.user, &target)?;
    changes.validate()?;

    let password_hash = changes
        .password
        .as_deref()
        .map(encrypt)
        .transpose()
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let updated = db
        .update_user(
            target.id,
            DBUserUpdate {
                email: changes.email,
                name: changes.name,
                password_hash,
            },
        )
        .await?;

    Ok(updated.into())
}

#[put("")]
async fn update(
    db: web::Data<Arc<DbService>>,
    auth: web::ReqData<AuthenticatedUser>,
    path: web::Path<Uuid>,
    body: web::Json<RUserUpdate>,
) -> ApiResult<UserRes> {
    let user = apply_update(&db, &auth, path.into_inner(), body.into_inner().into()).await?;
    Ok(ApiResponse::Ok(user))
}

#[patch("")]
async fn partial_update(
    db: web::Data<Arc<DbService>>,
    auth: web::ReqData<AuthenticatedUser>,
    path: web::Path<Uuid>,
    body: web::Json<RUserPartialUpdate>,
) -> ApiResult<UserRes> {
    let user = apply_update(&db, &auth, path.into_inner(), body.into_inner()).await?;
    Ok(ApiResponse::Ok(user))
}
