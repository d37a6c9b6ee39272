#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # avitolog-entities
//!
//! Reusable, agnostic domain entities for Avitolog.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod activity;
pub mod banned_word;
pub mod comment;
pub mod email;
pub mod id;
pub mod listing;
pub mod moderation;
pub mod password;
pub mod time;
pub mod user;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;
