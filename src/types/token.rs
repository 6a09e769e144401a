use entity::scrum_scrum_user::Model as UserModel;
use entity::scrum_scrum_user_token::Model as TokenModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use entity::scrum_scrum_user_token::Client;

/// Header naming the kind of caller (`web` or `mobile`).
pub const CLIENT_HEADER: &str = "client";

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct RLogin {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub username: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginRes {
    pub token: String,
}

/// What a successful bearer authentication attaches to the request.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user: UserModel,
    pub token: TokenModel,
}

pub fn expected_clients() -> String {
    Client::ALL
        .iter()
        .map(Client::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
