use crate::repositories;
use avitolog_entities::{email::EmailAddressParseError, listing::PriceParseError, password};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid username")]
    Username,
    #[error("Invalid password")]
    Password,
    #[error("Invalid email address")]
    EmailAddress,
    #[error("Invalid URL")]
    Url,
    #[error("Only listings from {} are allowed", crate::util::validate::ALLOWED_LISTING_DOMAIN)]
    ListingDomain,
    #[error("Invalid price")]
    Price,
    #[error("The username is already taken")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("The listing already exists")]
    ListingExists,
    #[error("Invalid username or password")]
    Credentials,
    #[error("The account is deactivated")]
    AccountInactive,
    #[error("The user is blocked")]
    UserBlocked,
    #[error("Empty comment")]
    EmptyComment,
    #[error("Empty banned word")]
    BannedWord,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<password::ParseError> for Error {
    fn from(_: password::ParseError) -> Self {
        Self::Password
    }
}

impl From<EmailAddressParseError> for Error {
    fn from(_: EmailAddressParseError) -> Self {
        Self::EmailAddress
    }
}

impl From<url::ParseError> for Error {
    fn from(_: url::ParseError) -> Self {
        Self::Url
    }
}

impl From<PriceParseError> for Error {
    fn from(_: PriceParseError) -> Self {
        Self::Price
    }
}
