use avitolog_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::{Access, DbConnection, DbReadOnly, DbReadWrite, Tables};

mod banned_word;
mod comment;
mod listing;
mod moderation_log;
mod user;

type Result<T> = std::result::Result<T, repo::Error>;
