use super::prelude::*;
use crate::repositories::Error as RepoError;
use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    pub listings: RefCell<Vec<Listing>>,
    pub comments: RefCell<Vec<Comment>>,
    pub banned_words: RefCell<Vec<BannedWord>>,
    pub moderation_log: RefCell<Vec<ModerationLogEntry>>,
    // Simulates an unavailable moderation word list
    pub banned_words_unavailable: Cell<bool>,
}

impl MockDb {
    pub fn add_banned_words(&self, words: &[&str]) {
        self.banned_words
            .borrow_mut()
            .extend(words.iter().map(|w| BannedWord::new(w)));
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.id == user.id) {
            return Err(RepoError::AlreadyExists);
        }
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *existing = user.clone();
        Ok(())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        self.users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }
}

impl ListingRepo for MockDb {
    fn create_listing(&self, listing: Listing) -> RepoResult<()> {
        if self
            .listings
            .borrow()
            .iter()
            .any(|l| l.id == listing.id || l.url == listing.url)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.listings.borrow_mut().push(listing);
        Ok(())
    }

    fn get_listing(&self, id: &str) -> RepoResult<Listing> {
        self.listings
            .borrow()
            .iter()
            .find(|l| l.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn try_get_listing_by_url(&self, url: &Url) -> RepoResult<Option<Listing>> {
        Ok(self
            .listings
            .borrow()
            .iter()
            .find(|l| &l.url == url)
            .cloned())
    }

    fn increment_listing_views(&self, id: &str) -> RepoResult<Listing> {
        let mut listings = self.listings.borrow_mut();
        let listing = listings
            .iter_mut()
            .find(|l| l.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        listing.views_count += 1;
        Ok(listing.clone())
    }

    fn most_viewed_listings(&self, limit: usize) -> RepoResult<Vec<Listing>> {
        let mut listings: Vec<_> = self.listings.borrow().iter().rev().cloned().collect();
        listings.sort_by(|a, b| {
            b.views_count
                .cmp(&a.views_count)
                .then(b.created_at.cmp(&a.created_at))
        });
        listings.truncate(limit);
        Ok(listings)
    }

    fn count_listings(&self) -> RepoResult<usize> {
        Ok(self.listings.borrow().len())
    }
}

impl CommentRepository for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        self.comments.borrow_mut().push(comment);
        Ok(())
    }

    fn load_comment(&self, id: &str) -> RepoResult<Comment> {
        self.comments
            .borrow()
            .iter()
            .find(|c| c.id.as_str() == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn load_comments_of_listing(&self, listing_id: &str) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<_> = self
            .comments
            .borrow()
            .iter()
            .rev()
            .filter(|c| c.listing_id.as_str() == listing_id && !c.is_deleted())
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(comments)
    }

    fn mark_comment_deleted(&self, id: &str, activity: &Activity) -> RepoResult<()> {
        let mut comments = self.comments.borrow_mut();
        let comment = comments
            .iter_mut()
            .find(|c| c.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        comment.deleted = Some(activity.clone());
        Ok(())
    }
}

impl BannedWordRepo for MockDb {
    fn add_or_activate_banned_word(&self, word: &BannedWord) -> RepoResult<()> {
        let mut words = self.banned_words.borrow_mut();
        match words.iter_mut().find(|w| w.as_str() == word.as_str()) {
            Some(existing) => existing.active = true,
            None => words.push(word.clone()),
        }
        Ok(())
    }

    fn deactivate_banned_word(&self, word: &str) -> RepoResult<()> {
        let mut words = self.banned_words.borrow_mut();
        let existing = words
            .iter_mut()
            .find(|w| w.as_str() == word)
            .ok_or(RepoError::NotFound)?;
        existing.active = false;
        Ok(())
    }

    fn all_banned_words(&self) -> RepoResult<Vec<BannedWord>> {
        if self.banned_words_unavailable.get() {
            return Err(RepoError::Other(anyhow::anyhow!(
                "banned words are unavailable"
            )));
        }
        Ok(self.banned_words.borrow().clone())
    }
}

impl ModerationLogRepo for MockDb {
    fn log_moderation_action(&self, entry: &ModerationLogEntry) -> RepoResult<()> {
        self.moderation_log.borrow_mut().push(entry.clone());
        Ok(())
    }

    fn recent_moderation_actions(&self, limit: usize) -> RepoResult<Vec<ModerationLogEntry>> {
        Ok(self
            .moderation_log
            .borrow()
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect())
    }
}
