use super::prelude::*;

/// Comments of a listing that have not been deleted, newest first.
pub fn load_comments_of_listing<R>(repo: &R, listing_id: &str) -> Result<Vec<Comment>>
where
    R: ListingRepo + CommentRepository,
{
    let listing = repo.get_listing(listing_id)?;
    Ok(repo.load_comments_of_listing(listing.id.as_str())?)
}
