use super::prelude::*;
use crate::util::validate;

#[derive(Debug, Clone, Default)]
pub struct NewListing {
    pub url: String,
    pub title: String,
    pub image_url: Option<String>,
    pub price: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<Timestamp>,
}

pub fn create_listing<R: ListingRepo>(repo: &R, new_listing: NewListing) -> Result<Listing> {
    let NewListing {
        url,
        title,
        image_url,
        price,
        description,
        published_at,
    } = new_listing;
    let url = url.trim().parse::<Url>()?;
    if !validate::is_allowed_listing_url(&url) {
        return Err(Error::ListingDomain);
    }
    if repo.try_get_listing_by_url(&url)?.is_some() {
        return Err(Error::ListingExists);
    }
    let image_url = image_url
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<Url>)
        .transpose()?;
    let price = price
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<Price>)
        .transpose()?;
    let now = Timestamp::now();
    let listing = Listing {
        id: Id::new(),
        url,
        title: title.trim().to_owned(),
        image_url,
        price,
        description: description.unwrap_or_default(),
        published_at,
        views_count: 0,
        created_at: now,
        updated_at: now,
    };
    log::debug!("Creating new listing: url = {}", listing.url);
    repo.create_listing(listing.clone())?;
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_listing(url: &str) -> NewListing {
        NewListing {
            url: url.into(),
            title: " iPhone 15 ".into(),
            price: Some("99990.00".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_new_listing() {
        let db = MockDb::default();
        let listing =
            create_listing(&db, new_listing("https://www.avito.ru/moskva/iphone_1")).unwrap();
        assert_eq!("iPhone 15", listing.title);
        assert_eq!(0, listing.views_count);
        assert_eq!(Some(Price::from_minor_units(9_999_000)), listing.price);
        assert_eq!(1, db.count_listings().unwrap());
    }

    #[test]
    fn reject_foreign_domains() {
        let db = MockDb::default();
        assert!(matches!(
            create_listing(&db, new_listing("https://example.com/iphone_1")),
            Err(Error::ListingDomain)
        ));
        assert!(matches!(
            create_listing(&db, new_listing("not a url")),
            Err(Error::Url)
        ));
    }

    #[test]
    fn reject_duplicate_urls() {
        let db = MockDb::default();
        create_listing(&db, new_listing("https://avito.ru/item/1")).unwrap();
        assert!(matches!(
            create_listing(&db, new_listing("https://avito.ru/item/1")),
            Err(Error::ListingExists)
        ));
    }

    #[test]
    fn reject_invalid_price() {
        let db = MockDb::default();
        let mut l = new_listing("https://avito.ru/item/1");
        l.price = Some("a lot".into());
        assert!(matches!(create_listing(&db, l), Err(Error::Price)));
    }
}
