use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Token {
    pub is_word: bool,
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct BannedWord {
    pub word: String,
    pub active: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Comment {
    pub id: String,
    pub listing_id: String,
    pub author_id: String,
    pub created: i64,
    pub text: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Listing {
    pub id          : String,
    pub url         : String,
    pub title       : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price       : Option<String>,
    pub description : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published   : Option<i64>,
    pub views_count : u64,
    pub created     : i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_blocked: bool,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    DeleteComment,
    BlockUser,
    UnblockUser,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ModerationLogEntry {
    pub id: String,
    pub action: ModerationAction,
    pub at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
