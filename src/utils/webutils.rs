use std::sync::Arc;

use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    http::header::{self, HeaderMap},
    middleware::Next,
    web, HttpMessage,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;

use crate::config::EnvConfig;
use crate::db::db_service::DbService;
use crate::types::error::AppError;
use crate::types::token::{expected_clients, AuthenticatedUser, Client, CLIENT_HEADER};
use crate::utils::token::authenticate_token;

/// Reads the client type from the `Client` header.
///
/// `Ok(None)` when the header is absent; an error when it is present but not
/// one of the known client types.
pub fn client_from_headers(headers: &HeaderMap) -> Result<Option<Client>, AppError> {
    let Some(raw) = headers.get(CLIENT_HEADER) else {
        return Ok(None);
    };

    let value = raw.to_str().map_err(|_| {
        AppError::BadRequest("The `Client` header must be plain text.".to_string())
    })?;

    value.parse::<Client>().map(Some).map_err(|e| {
        AppError::BadRequest(format!("Invalid client header: {e}. Expected one of: {}.", expected_clients()))
    })
}

/// Same as [`client_from_headers`] but the header is mandatory.
pub fn get_client(headers: &HeaderMap) -> Result<Client, AppError> {
    client_from_headers(headers)?.ok_or_else(|| {
        AppError::BadRequest(format!(
            "Missing `Client` header. Expected one of: {}.",
            expected_clients()
        ))
    })
}

async fn authenticate(req: &ServiceRequest, credentials: &BearerAuth) -> Result<(), AppError> {
    client_from_headers(req.headers())?;

    let db = req
        .app_data::<web::Data<Arc<DbService>>>()
        .ok_or_else(|| AppError::Internal("database not configured".to_string()))?;
    let lifetime = req
        .app_data::<web::Data<EnvConfig>>()
        .map(|config| config.token_lifetime())
        .ok_or_else(|| AppError::Internal("config not registered".to_string()))?;

    let authenticated = authenticate_token(db, credentials.token(), lifetime).await?;
    req.extensions_mut().insert(authenticated);
    Ok(())
}

/// Bearer validator for `HttpAuthentication::bearer`. On success the request
/// carries an [`AuthenticatedUser`].
pub async fn validate_token(req: ServiceRequest, credentials: BearerAuth) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    // already done by `authenticate_if_present` further out
    if req.extensions().contains::<AuthenticatedUser>() {
        return Ok(req);
    }
    match authenticate(&req, &credentials).await {
        Ok(()) => Ok(req),
        Err(e) => Err((e.into(), req)),
    }
}

/// Middleware for routes open to anonymous callers. Requests without an
/// `Authorization` header pass through untouched; requests with one are
/// authenticated exactly like protected routes, and rejected on failure.
pub async fn authenticate_if_present<B: MessageBody + 'static>(
    mut req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<EitherBody<B>>, actix_web::Error> {
    if req.headers().contains_key(header::AUTHORIZATION) {
        let credentials = match req.extract::<BearerAuth>().await {
            Ok(credentials) => credentials,
            Err(e) => return Ok(req.error_response(e).map_into_right_body()),
        };
        if let Err(e) = authenticate(&req, &credentials).await {
            return Ok(req.error_response(e).map_into_right_body());
        }
    }

    next.call(req).await.map(ServiceResponse::map_into_left_body)
}
