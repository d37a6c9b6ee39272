use super::prelude::*;
use crate::text;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub text: String,
}

/// Stores a new comment on a listing.
///
/// The text is censored with the currently active banned words before
/// it is stored, the original text is not kept. If the word list cannot
/// be loaded the comment is stored without censoring.
pub fn create_comment<R>(
    repo: &R,
    author_id: &str,
    listing_id: &str,
    new_comment: NewComment,
) -> Result<Comment>
where
    R: UserRepo + ListingRepo + CommentRepository + BannedWordRepo,
{
    let author = super::authenticate_user(repo, author_id)?;
    if author.is_blocked() {
        return Err(Error::UserBlocked);
    }
    let listing = repo.get_listing(listing_id)?;
    let text = new_comment.text.trim();
    if text.is_empty() {
        return Err(Error::EmptyComment);
    }
    let banned_words = repo.active_banned_words().unwrap_or_else(|err| {
        log::warn!("Failed to load banned words, storing comment without censoring: {err}");
        vec![]
    });
    let comment = Comment {
        id: Id::new(),
        listing_id: listing.id,
        author_id: author.id,
        created_at: Timestamp::now(),
        deleted: None,
        text: text::censor(text, &banned_words),
    };
    log::debug!(
        "Creating new comment {} on listing {}",
        comment.id,
        comment.listing_id
    );
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
