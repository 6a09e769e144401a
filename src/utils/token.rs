use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Duration, Utc};
use entity::scrum_scrum_user_token::Model as TokenModel;
use rand_core::{OsRng, RngCore};
use tracing::warn;
use uuid::Uuid;

use crate::db::db_service::DbService;
use crate::types::{error::AppError, token::AuthenticatedUser};

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

pub fn encrypt(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

/// Mobile tokens never expire. Web tokens expire once strictly older than `lifetime`.
pub fn token_expired(token: &TokenModel, now: DateTime<Utc>, lifetime: Duration) -> bool {
    token.client.expires() && now - token.created_on > lifetime
}

/// Resolves a bearer key to its user, enforcing the per-client expiration policy.
pub async fn authenticate_token(
    db: &DbService,
    key: &str,
    lifetime: Duration,
) -> Result<AuthenticatedUser, AppError> {
    let (token, user) = db.get_token_with_user(key).await?;

    if !user.is_active {
        return Err(AppError::Unauthorized("User inactive or deleted.".to_string()));
    }

    if token_expired(&token, Utc::now(), lifetime) {
        warn!("rejected expired {} token for user {}", token.client.as_str(), user.id);
        return Err(AppError::Unauthorized("Token has expired.".to_string()));
    }

    Ok(AuthenticatedUser { user, token })
}
