//! Products

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use rust_decimal::Decimal;
use thiserror::Error;

/// Product identifier, as keyed by the product feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Country a product is manufactured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryOfOrigin {
    /// Turkey
    Turkey,

    /// United States
    Usa,

    /// Germany
    Germany,

    /// Anywhere else
    Other,
}

impl CountryOfOrigin {
    /// All countries, in display order.
    pub const ALL: [CountryOfOrigin; 4] = [Self::Turkey, Self::Usa, Self::Germany, Self::Other];

    /// Feed representation of the country.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Turkey => "Turkey",
            Self::Usa => "USA",
            Self::Germany => "Germany",
            Self::Other => "Other",
        }
    }
}

impl Display for CountryOfOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An unrecognised country of origin.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown country of origin: {0}")]
pub struct UnknownCountry(pub String);

impl FromStr for CountryOfOrigin {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|country| country.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}

/// Product, as received from the product feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Decimal,

    /// Long-form description
    pub description: String,

    /// Product image location
    pub image_url: String,

    /// Manufacturer brand
    pub brand: String,

    /// Country of manufacture
    pub country_of_origin: CountryOfOrigin,
}

impl Product {
    /// Whether the product was made in Turkey.
    #[must_use]
    pub fn is_turkish(&self) -> bool {
        self.country_of_origin == CountryOfOrigin::Turkey
    }
}
