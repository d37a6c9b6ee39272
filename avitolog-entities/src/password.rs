use std::{fmt, str::FromStr};
use thiserror::Error;

/// Minimum number of characters of a plain text password.
pub const MIN_LEN: usize = 8;

/// The bcrypt hash of a password. The plain text is never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    hash: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Passwords need at least {MIN_LEN} characters")]
    TooShort,
    #[error(transparent)]
    Hash(#[from] pwhash::error::Error),
}

impl Password {
    pub fn verify(&self, plain: &str) -> bool {
        pwhash::bcrypt::verify(plain, &self.hash)
    }

    pub fn as_hash(&self) -> &str {
        &self.hash
    }
}

impl FromStr for Password {
    type Err = ParseError;

    fn from_str(plain: &str) -> Result<Self, Self::Err> {
        if plain.chars().count() < MIN_LEN {
            return Err(ParseError::TooShort);
        }
        let hash = pwhash::bcrypt::hash(plain)?;
        Ok(Self { hash })
    }
}

// Never prints the hash
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let plain = "p^$$w%&7*{}";
        let password = plain.parse::<Password>().unwrap();
        assert_ne!(plain, password.as_hash());
        assert!(password.verify(plain));
        assert!(!password.verify("something else"));
    }

    #[test]
    fn count_characters_not_bytes() {
        assert!(matches!(
            "пароль1".parse::<Password>(),
            Err(ParseError::TooShort)
        ));
        assert!("пароль12".parse::<Password>().is_ok());
        assert!("abcdefgh".parse::<Password>().is_ok());
        assert!("".parse::<Password>().is_err());
    }

    #[test]
    fn hide_hash_in_debug_output() {
        let password = "secret123".parse::<Password>().unwrap();
        assert_eq!("Password(***)", format!("{password:?}"));
    }
}
