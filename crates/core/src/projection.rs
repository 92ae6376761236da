//! Product Feed Projection
//!
//! Derives the displayed product list from a feed snapshot and the shopper's
//! view parameters. The pipeline runs in a fixed order:
//!
//! 1. search filter over name and brand
//! 2. origin filter
//! 3. base ordering: Turkish products first (only when unfiltered by origin), then by name
//! 4. optional price ordering, stable over the base ordering
//!
//! Steps 3 and 4 are separate stable sorts so that price ties keep their
//! base-ordering position.

use std::{cmp::Ordering, str::FromStr};

use icu_collator::{Collator, CollatorBorrowed};

use thiserror::Error;

use crate::products::{CountryOfOrigin, Product, UnknownCountry};

/// Restricts displayed products to one country of origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OriginFilter {
    /// No restriction.
    #[default]
    All,

    /// Only products from the given country.
    Only(CountryOfOrigin),
}

impl OriginFilter {
    /// Whether a product passes the filter.
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(country) => product.country_of_origin == country,
        }
    }
}

impl FromStr for OriginFilter {
    type Err = UnknownCountry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }

        s.parse().map(Self::Only)
    }
}

/// Explicit ordering applied after the base ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOption {
    /// Keep the base ordering.
    #[default]
    Default,

    /// Cheapest first.
    PriceAscending,

    /// Most expensive first.
    PriceDescending,
}

/// An unrecognised sort option.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort option: {0} (expected default, price-asc or price-desc)")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "price-asc" | "price-ascending" => Ok(Self::PriceAscending),
            "price-desc" | "price-descending" => Ok(Self::PriceDescending),
            _ => Err(UnknownSortOption(s.to_string())),
        }
    }
}

/// The three independent view parameters of the product list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    /// Case-insensitive search over name and brand.
    pub search: String,

    /// Country of origin restriction.
    pub origin: OriginFilter,

    /// Price ordering override.
    pub sort: SortOption,
}

impl ViewParams {
    /// Project a product collection through these parameters.
    pub fn project<'a>(&self, products: impl IntoIterator<Item = &'a Product>) -> Vec<Product> {
        project(products, &self.search, self.origin, self.sort)
    }
}

/// Filter and order a raw product collection for display.
///
/// Pure: identical inputs always yield the same list in the same order.
pub fn project<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    search: &str,
    origin: OriginFilter,
    sort: SortOption,
) -> Vec<Product> {
    let needle = search.to_lowercase();

    let mut displayed: Vec<Product> = products
        .into_iter()
        .filter(|product| matches_search(product, &needle))
        .filter(|product| origin.matches(product))
        .cloned()
        .collect();

    base_order(&mut displayed, origin);
    price_order(&mut displayed, sort);

    displayed
}

/// Whether the product's name or brand contains an already lowercased needle.
fn matches_search(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.brand.to_lowercase().contains(needle)
}

/// Stable sort by the Turkey-first partition (unfiltered lists only), then by name.
///
/// Names that collate equal keep their incoming order.
pub fn base_order(products: &mut [Product], origin: OriginFilter) {
    let partitioned = origin == OriginFilter::All;
    let collator = name_collator();

    products.sort_by(|a, b| {
        let partition = if partitioned {
            b.is_turkish().cmp(&a.is_turkish())
        } else {
            Ordering::Equal
        };

        partition.then_with(|| collate(collator.as_ref(), &a.name, &b.name))
    });
}

/// Stable sort by price; `SortOption::Default` leaves the order untouched.
pub fn price_order(products: &mut [Product], sort: SortOption) {
    match sort {
        SortOption::Default => {}
        SortOption::PriceAscending => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOption::PriceDescending => products.sort_by(|a, b| b.price.cmp(&a.price)),
    }
}

/// Locale-aware name comparison using the root collation.
///
/// Accented letters sort with their base letter and lowercase precedes
/// uppercase when names otherwise match.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collate(name_collator().as_ref(), a, b)
}

fn name_collator() -> Option<CollatorBorrowed<'static>> {
    Collator::try_new(Default::default(), Default::default()).ok()
}

fn collate(collator: Option<&CollatorBorrowed<'_>>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}
