use url::Url;

pub use fast_chemail::is_valid_email;

/// Listings can only be taken from this marketplace (or one of its subdomains).
pub const ALLOWED_LISTING_DOMAIN: &str = "avito.ru";

pub const MAX_USERNAME_LEN: usize = 150;

pub fn is_valid_username(username: &str) -> bool {
    let len = username.chars().count();
    len > 0 && len <= MAX_USERNAME_LEN && username.trim() == username
}

pub fn is_allowed_listing_url(url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host_str() {
        Some(host) => {
            let host = host.to_lowercase();
            host == ALLOWED_LISTING_DOMAIN
                || host
                    .strip_suffix(ALLOWED_LISTING_DOMAIN)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usernames() {
        assert!(is_valid_username("ivan"));
        assert!(is_valid_username("Иван Петров"));
        assert!(!is_valid_username(""));
        assert!(!is_valid_username(" ivan"));
        assert!(!is_valid_username(&"x".repeat(MAX_USERNAME_LEN + 1)));
        assert!(is_valid_username(&"x".repeat(MAX_USERNAME_LEN)));
    }

    #[test]
    fn listing_urls() {
        let allowed = |s: &str| is_allowed_listing_url(&s.parse().unwrap());
        assert!(allowed("https://avito.ru/item/1"));
        assert!(allowed("https://www.avito.ru/moskva/telefony/iphone_123"));
        assert!(allowed("http://M.AVITO.RU/x"));
        assert!(!allowed("https://notavito.ru/item/1"));
        assert!(!allowed("https://avito.ru.evil.com/item/1"));
        assert!(!allowed("ftp://avito.ru/item/1"));
        assert!(!allowed("https://example.com/avito.ru"));
    }
}
