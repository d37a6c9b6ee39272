use super::*;

macro_rules! impl_listing_repo {
    ($($db:ty),+) => {$(
        impl ListingRepo for $db {
            fn create_listing(&self, listing: Listing) -> Result<()> {
                self.write(|t| create_listing(t, listing))
            }

            fn get_listing(&self, id: &str) -> Result<Listing> {
                self.read(|t| get_listing(t, id))
            }
            fn try_get_listing_by_url(&self, url: &Url) -> Result<Option<Listing>> {
                self.read(|t| Ok(t.listings.iter().find(|l| &l.url == url).cloned()))
            }

            fn increment_listing_views(&self, id: &str) -> Result<Listing> {
                self.write(|t| increment_listing_views(t, id))
            }

            fn most_viewed_listings(&self, limit: usize) -> Result<Vec<Listing>> {
                self.read(|t| Ok(most_viewed_listings(t, limit)))
            }
            fn count_listings(&self) -> Result<usize> {
                self.read(|t| Ok(t.listings.len()))
            }
        }
    )+};
}

impl_listing_repo!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);

fn create_listing(tables: &mut Tables, listing: Listing) -> Result<()> {
    if tables
        .listings
        .iter()
        .any(|l| l.id == listing.id || l.url == listing.url)
    {
        return Err(repo::Error::AlreadyExists);
    }
    tables.listings.push(listing);
    Ok(())
}

fn get_listing(tables: &Tables, id: &str) -> Result<Listing> {
    tables
        .listings
        .iter()
        .find(|l| l.id.as_str() == id)
        .cloned()
        .ok_or(repo::Error::NotFound)
}

fn increment_listing_views(tables: &mut Tables, id: &str) -> Result<Listing> {
    let listing = tables
        .listings
        .iter_mut()
        .find(|l| l.id.as_str() == id)
        .ok_or(repo::Error::NotFound)?;
    listing.views_count = listing.views_count.saturating_add(1);
    listing.updated_at = Timestamp::now();
    Ok(listing.clone())
}

fn most_viewed_listings(tables: &Tables, limit: usize) -> Vec<Listing> {
    let mut listings: Vec<_> = tables.listings.iter().rev().collect();
    listings.sort_by(|a, b| {
        b.views_count
            .cmp(&a.views_count)
            .then(b.created_at.cmp(&a.created_at))
    });
    listings.into_iter().take(limit).cloned().collect()
}
