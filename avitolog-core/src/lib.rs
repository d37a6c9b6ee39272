//! # avitolog-core
//!
//! Business logic of Avitolog: the comment censor, the repository
//! interfaces and the use cases built on top of them.

pub mod authorization;
pub mod db;
pub mod repositories;
pub mod text;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use avitolog_entities::{
        activity::*, banned_word::BannedWord, comment::*, email::*, id::*, listing::*,
        moderation::*, password::Password, time::*, url::Url, user::*,
    };
}
