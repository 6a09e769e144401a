use actix_web::{post, web};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::db::db_service::DbService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::token::{LoginRes, RLogin};
use crate::utils::webutils::get_client;

/// Exchanges credentials for a token scoped to the caller's client type.
///
/// Web clients get a token that expires `TOKEN_EXPIRATION_DAYS` after it was
/// issued or last refreshed; mobile clients get one that never expires. A
/// repeated login for the same client hands back the same key and restarts
/// its expiration window.
#[post("")]
async fn login(
    req: actix_web::HttpRequest,
    db: web::Data<Arc<DbService>>,
    body: web::Json<RLogin>,
) -> ApiResult<LoginRes> {
    body.validate()?;
    let user = db.check_credentials(&body.username, &body.password).await?;

    let client = get_client(req.headers())?;

    let (token, created) = db.get_or_create_token(user.id, client).await?;
    let token = if created {
        token
    } else {
        db.refresh_token(token).await?
    };

    info!("user {} logged in from {} client", user.id, client.as_str());
    Ok(ApiResponse::Ok(LoginRes { token: token.key }))
}
