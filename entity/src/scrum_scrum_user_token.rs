use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of caller a token was issued to. Decides the expiration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Client {
    #[sea_orm(string_value = "web")]
    Web,
    #[sea_orm(string_value = "mobile")]
    Mobile,
}

impl Client {
    pub const ALL: [Client; 2] = [Client::Web, Client::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Client::Web => "web",
            Client::Mobile => "mobile",
        }
    }

    /// Web tokens age out, mobile tokens live until replaced.
    pub fn expires(&self) -> bool {
        matches!(self, Client::Web)
    }
}

/// A client string that is neither `web` nor `mobile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownClient(pub String);

impl fmt::Display for UnknownClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown client type `{}`", self.0)
    }
}

impl std::error::Error for UnknownClient {}

impl FromStr for Client {
    type Err = UnknownClient;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim();
        Client::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownClient(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "scrum_scrum_user_token")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key: String,
    pub user_id: Uuid, // FK -> scrum_scrum_user.id
    pub client: Client,
    pub created_on: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::scrum_scrum_user::Entity",
        from = "Column::UserId",
        to   = "super::scrum_scrum_user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::scrum_scrum_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
