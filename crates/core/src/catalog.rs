//! Product Catalog Fixtures
//!
//! Loads product collections from YAML, keyed by product id:
//!
//! ```yaml
//! products:
//!   "1":
//!     name: Beko Refrigerator
//!     price: "15000"
//!     description: A high-quality, energy-efficient refrigerator.
//!     image_url: https://example.com/beko.png
//!     brand: Beko
//!     country_of_origin: Turkey
//! ```

use std::{fs, path::Path, str::FromStr};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    products::{CountryOfOrigin, Product, ProductId, UnknownCountry},
    snapshot::ProductSnapshot,
};

/// Catalog Parsing Errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading the catalog file
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Price is not a non-negative decimal
    #[error("Invalid price for product {id}: {price}")]
    InvalidPrice {
        /// Product id
        id: String,
        /// Raw price text
        price: String,
    },

    /// Country of origin is not recognised
    #[error("Invalid country for product {id}: {source}")]
    InvalidCountry {
        /// Product id
        id: String,
        /// Parse failure
        #[source]
        source: UnknownCountry,
    },
}

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of product id -> product fixture
    pub products: FxHashMap<String, ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product name
    pub name: String,

    /// Unit price (e.g. "2.99")
    pub price: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Image location
    #[serde(default)]
    pub image_url: String,

    /// Brand
    pub brand: String,

    /// Country of origin (Turkey, USA, Germany or Other)
    pub country_of_origin: String,
}

impl ProductFixture {
    /// Convert into a [`Product`] with the given id.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when the price or country can't be parsed.
    pub fn into_product(self, id: String) -> Result<Product, CatalogError> {
        let price = parse_price(&self.price).ok_or_else(|| CatalogError::InvalidPrice {
            id: id.clone(),
            price: self.price.clone(),
        })?;

        let country_of_origin = CountryOfOrigin::from_str(&self.country_of_origin)
            .map_err(|source| CatalogError::InvalidCountry {
                id: id.clone(),
                source,
            })?;

        Ok(Product {
            id: ProductId::from(id),
            name: self.name,
            price,
            description: self.description,
            image_url: self.image_url,
            brand: self.brand,
            country_of_origin,
        })
    }
}

/// Parse a non-negative decimal price.
pub fn parse_price(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim())
        .ok()
        .filter(|price| !price.is_sign_negative())
}

/// Parse a YAML catalog into a product snapshot.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or a product is invalid.
pub fn parse_catalog(contents: &str) -> Result<ProductSnapshot, CatalogError> {
    let fixture: CatalogFixture = serde_norway::from_str(contents)?;

    let products = fixture
        .products
        .into_iter()
        .map(|(id, product)| product.into_product(id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProductSnapshot::new(products))
}

/// Load a YAML catalog file into a product snapshot.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<ProductSnapshot, CatalogError> {
    let contents = fs::read_to_string(path)?;

    parse_catalog(&contents)
}

/// The product catalog shipped with the crate.
pub const BUNDLED_CATALOG: &str = include_str!("../fixtures/products/catalog.yml");

/// Parse the bundled product catalog.
///
/// # Errors
///
/// Returns an error if the bundled YAML is invalid.
pub fn bundled_catalog() -> Result<ProductSnapshot, CatalogError> {
    parse_catalog(BUNDLED_CATALOG)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_accepts_decimals() {
        assert_eq!(parse_price("2.99"), Some(Decimal::new(299, 2)));
        assert_eq!(parse_price(" 15000 "), Some(Decimal::new(15_000, 0)));
        assert_eq!(parse_price("0"), Some(Decimal::ZERO));
    }

    #[test]
    fn parse_price_rejects_negative_and_garbage() {
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("ten"), None);
    }

    #[test]
    fn parse_catalog_builds_products() -> TestResult {
        let snapshot = parse_catalog(
            r#"
products:
  "1":
    name: Beko Refrigerator
    price: "15000"
    brand: Beko
    country_of_origin: Turkey
"#,
        )?;

        let product = snapshot.get(&ProductId::from("1")).ok_or("missing product")?;

        assert_eq!(product.name, "Beko Refrigerator");
        assert_eq!(product.price, Decimal::new(15_000, 0));
        assert_eq!(product.country_of_origin, CountryOfOrigin::Turkey);
        assert_eq!(product.description, "");

        Ok(())
    }

    #[test]
    fn parse_catalog_rejects_unknown_country() {
        let result = parse_catalog(
            r#"
products:
  "1":
    name: Moon Rock
    price: "1"
    brand: NASA
    country_of_origin: Moon
"#,
        );

        assert!(matches!(result, Err(CatalogError::InvalidCountry { id, .. }) if id == "1"));
    }

    #[test]
    fn parse_catalog_rejects_negative_price() {
        let result = parse_catalog(
            r#"
products:
  "1":
    name: Refund
    price: "-5"
    brand: Beko
    country_of_origin: Turkey
"#,
        );

        assert!(matches!(result, Err(CatalogError::InvalidPrice { price, .. }) if price == "-5"));
    }

    #[test]
    fn bundled_catalog_loads() -> TestResult {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/products/catalog.yml");

        let snapshot = load_catalog(path)?;

        assert_eq!(snapshot.len(), 7);
        assert_eq!(snapshot, bundled_catalog()?);

        Ok(())
    }
}
