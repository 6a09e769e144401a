use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::UserRes;
use actix_web::{get, web};
use std::sync::Arc;
use uuid::Uuid;

#[get("")]
async fn list(
    db: web::Data<Arc<DbService>>,
) -> ApiResult<Vec<UserRes>> {
    let users = db.list_users().await?;
    Ok(ApiResponse::Ok(users.into_iter().map(UserRes::from).collect()))
}

#[get("/{id}")]
async fn retrieve(
    db: web::Data<Arc<DbService>>,
    path: web::Path<Uuid>,
) -> ApiResult<UserRes> {
    let user = db.get_user_by_id(&path.into_inner()).await?;
    Ok(ApiResponse::Ok(user.into()))
}
