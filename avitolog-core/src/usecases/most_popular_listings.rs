use super::prelude::*;

pub const DEFAULT_LISTING_LIMIT: usize = 20;
pub const MAX_LISTING_LIMIT: usize = 50;

/// Most viewed listings first.
///
/// A missing limit falls back to [`DEFAULT_LISTING_LIMIT`], any other
/// value is clamped into `1..=MAX_LISTING_LIMIT`.
pub fn most_popular_listings<R: ListingRepo>(repo: &R, limit: Option<i64>) -> Result<Vec<Listing>> {
    let limit = limit
        .map(|l| l.clamp(1, MAX_LISTING_LIMIT as i64) as usize)
        .unwrap_or(DEFAULT_LISTING_LIMIT);
    Ok(repo.most_viewed_listings(limit)?)
}
