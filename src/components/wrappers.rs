use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::iter::Sum;
use std::ops::Add;

/// The numeric id of an airport in the source dataset.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    Hash,
    FromStr,
)]
#[non_exhaustive]
pub struct AirportId(pub u32);

/// A 3 or 4 character airport code, e.g. `KJFK`. Matching is exact and case-sensitive.
#[derive(
    Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize, Hash, FromStr,
)]
#[non_exhaustive]
pub struct AirportCode(pub String);

impl From<String> for AirportCode {
    #[inline]
    fn from(s: String) -> Self {
        AirportCode(s)
    }
}

impl From<&str> for AirportCode {
    #[inline]
    fn from(s: &str) -> Self {
        AirportCode(s.to_owned())
    }
}

impl AsRef<str> for AirportCode {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AirportCode {
    #[inline]
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Latitude in signed decimal degrees.
#[derive(Copy, Clone, Debug, Display, PartialEq, PartialOrd, Deserialize, Serialize, FromStr)]
#[non_exhaustive]
pub struct Latitude(pub f64);

/// Longitude in signed decimal degrees.
#[derive(Copy, Clone, Debug, Display, PartialEq, PartialOrd, Deserialize, Serialize, FromStr)]
#[non_exhaustive]
pub struct Longitude(pub f64);

/// Field elevation as given by the dataset. Not used for distances.
#[derive(Copy, Clone, Debug, Display, PartialEq, PartialOrd, Deserialize, Serialize, FromStr)]
#[non_exhaustive]
pub struct Altitude(pub f64);

/// A whole number of statute miles.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Deserialize,
    Serialize,
    Hash,
    FromStr,
)]
#[non_exhaustive]
pub struct Miles(pub u32);

impl Add for Miles {
    type Output = Miles;

    /// Saturates at `u32::MAX` instead of wrapping.
    #[inline]
    fn add(self, other: Miles) -> Miles {
        Miles(self.0.saturating_add(other.0))
    }
}

impl Sum for Miles {
    #[inline]
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Miles::default(), |total, leg| total + leg)
    }
}

impl Miles {
    /// Formats the distance with comma thousands separators, e.g. `2,469`.
    #[must_use]
    #[inline]
    pub fn with_separators(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}
