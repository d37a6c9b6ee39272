use super::prelude::*;

/// Returns the listing and counts the view.
pub fn view_listing<R: ListingRepo>(repo: &R, id: &str) -> Result<Listing> {
    Ok(repo.increment_listing_views(id)?)
}
