use std::borrow::Cow;

use chrono::{DateTime, Utc};
use entity::scrum_scrum_user::Model as UserModel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

pub const USERNAME_MAX_LEN: u64 = 150;

/// Letters, digits and `@.+-_`, same alphabet as the usual username validators.
fn validate_username(username: &str) -> Result<(), ValidationError> {
    let ok = username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'));
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new("username_chars").with_message(Cow::Borrowed(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        )))
    }
}

pub fn duplicate_username() -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(
        "username",
        ValidationError::new("unique")
            .with_message(Cow::Borrowed("A user with that username already exists.")),
    );
    errors
}

/// Full field set, accepted on creation only.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct RUserCreate {
    #[validate(
        length(min = 1, max = 150, message = "Username must be between 1 and 150 characters."),
        custom(function = "validate_username")
    )]
    pub username: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters."))]
    pub password: String,
}

/// Restricted field set for PUT. Username and the flags cannot be replaced;
/// unknown keys such as `username` are dropped by serde.
#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct RUserUpdate {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(max = 255))]
    pub name: String,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters."))]
    pub password: Option<String>,
}

/// Restricted field set for PATCH, every field optional.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct RUserPartialUpdate {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 8, max = 128, message = "Password must be between 8 and 128 characters."))]
    pub password: Option<String>,
}

impl From<RUserUpdate> for RUserPartialUpdate {
    fn from(full: RUserUpdate) -> Self {
        Self {
            email: Some(full.email),
            name: Some(full.name),
            password: full.password,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct DBUserCreate {
    pub username: String,
    pub email: String,
    pub name: String,
    pub password_hash: String,
}

#[derive(Default)]
pub struct DBUserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password_hash: Option<String>,
}

/// Public representation. Never carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserRes {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub name: String,
    pub is_superuser: bool,
    pub is_staff: bool,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserModel> for UserRes {
    fn from(u: UserModel) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
            name: u.name,
            is_superuser: u.is_superuser,
            is_staff: u.is_staff,
            is_active: u.is_active,
            last_login: u.last_login,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
