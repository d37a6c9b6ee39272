use std::{fmt, num::ParseIntError, str::FromStr};
use thiserror::Error;

use crate::{id::*, time::*, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub id           : Id,
    pub url          : Url,
    pub title        : String,
    pub image_url    : Option<Url>,
    pub price        : Option<Price>,
    pub description  : String,
    pub published_at : Option<Timestamp>,
    pub views_count  : u64,
    pub created_at   : Timestamp,
    pub updated_at   : Timestamp,
}

/// A monetary amount with two fractional digits, stored in minor units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const fn from_minor_units(minor_units: u64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Error)]
pub enum PriceParseError {
    #[error("Price must consist of digits")]
    Digits,
    #[error("Too many fractional digits")]
    Fraction,
    #[error("Price out of range")]
    Overflow,
    #[error(transparent)]
    Int(#[from] ParseIntError),
}

impl FromStr for Price {
    type Err = PriceParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (int, frac) = match s.split_once(['.', ',']) {
            Some((int, frac)) => (int, frac),
            None => (s, ""),
        };
        if int.is_empty() && frac.is_empty() {
            return Err(PriceParseError::Digits);
        }
        if !int.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
            return Err(PriceParseError::Digits);
        }
        if frac.len() > 2 {
            return Err(PriceParseError::Fraction);
        }
        let int: u64 = if int.is_empty() { 0 } else { int.parse()? };
        let frac: u64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<u64>()? * 10,
            _ => frac.parse()?,
        };
        int.checked_mul(100)
            .and_then(|x| x.checked_add(frac))
            .map(Self)
            .ok_or(PriceParseError::Overflow)
    }
}
