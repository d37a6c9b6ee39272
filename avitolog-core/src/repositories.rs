// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;
}

pub trait ListingRepo {
    // Fails with `AlreadyExists` if another listing has the same URL
    fn create_listing(&self, listing: Listing) -> Result<()>;

    fn get_listing(&self, id: &str) -> Result<Listing>;
    fn try_get_listing_by_url(&self, url: &Url) -> Result<Option<Listing>>;

    // Returns the listing with the updated counter
    fn increment_listing_views(&self, id: &str) -> Result<Listing>;

    // Ordered by views (descending) and creation time (newest first)
    fn most_viewed_listings(&self, limit: usize) -> Result<Vec<Listing>>;
    fn count_listings(&self) -> Result<usize>;
}

pub trait CommentRepository {
    fn create_comment(&self, comment: Comment) -> Result<()>;

    // Also returns deleted comments
    fn load_comment(&self, id: &str) -> Result<Comment>;

    // Only comments that have not been deleted, newest first
    fn load_comments_of_listing(&self, listing_id: &str) -> Result<Vec<Comment>>;

    fn mark_comment_deleted(&self, id: &str, activity: &Activity) -> Result<()>;
}

pub trait BannedWordRepo {
    // Inserts the word or reactivates an existing one
    fn add_or_activate_banned_word(&self, word: &BannedWord) -> Result<()>;
    fn deactivate_banned_word(&self, word: &str) -> Result<()>;

    fn all_banned_words(&self) -> Result<Vec<BannedWord>>;

    fn active_banned_words(&self) -> Result<Vec<String>> {
        Ok(self
            .all_banned_words()?
            .into_iter()
            .filter(|w| w.active)
            .map(Into::into)
            .collect())
    }
}

pub trait ModerationLogRepo {
    fn log_moderation_action(&self, entry: &ModerationLogEntry) -> Result<()>;

    // Newest first
    fn recent_moderation_actions(&self, limit: usize) -> Result<Vec<ModerationLogEntry>>;
}
