use std::{fmt, str::FromStr};
use thiserror::Error;

/// A single e-mail address without a display name.
///
/// The domain part is stored in lowercase, the local part as given.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid e-mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let addr = mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
            .map(|info| info.addr)
            .ok_or(EmailAddressParseError)?;
        match addr.rsplit_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(format!("{local}@{}", domain.to_lowercase())))
            }
            _ => Err(EmailAddressParseError),
        }
    }
}

impl From<EmailAddress> for String {
    fn from(from: EmailAddress) -> Self {
        from.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_display_name() {
        let email: EmailAddress = "Ivan <ivan@example.ru>".parse().unwrap();
        assert_eq!("ivan@example.ru", email.as_str());
    }

    #[test]
    fn lowercase_domain_only() {
        let email: EmailAddress = "Olga.P@Mail.RU".parse().unwrap();
        assert_eq!("Olga.P@mail.ru", email.to_string());
    }

    #[test]
    fn reject_incomplete_addresses() {
        assert!("".parse::<EmailAddress>().is_err());
        assert!("ivan".parse::<EmailAddress>().is_err());
    }
}
