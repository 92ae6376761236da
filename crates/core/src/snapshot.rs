//! Feed Snapshots

use std::collections::BTreeMap;

use crate::products::{Product, ProductId};

/// The complete product collection as last delivered by the feed.
///
/// Products are keyed by id; a later product with an existing id replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSnapshot {
    products: BTreeMap<ProductId, Product>,
}

impl ProductSnapshot {
    /// Build a snapshot from a collection of products.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|product| (product.id.clone(), product))
                .collect(),
        }
    }

    /// Get a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    /// Look up a product, producing an explicit not-found state when absent.
    pub fn lookup(&self, id: &ProductId) -> ProductLookup<'_> {
        self.get(id)
            .map_or_else(|| ProductLookup::NotFound(id.clone()), ProductLookup::Found)
    }

    /// Iterate over the products in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the snapshot holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Result of resolving a product id against the current snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup<'a> {
    /// The product is in the snapshot.
    Found(&'a Product),

    /// No product with this id is in the snapshot.
    NotFound(ProductId),
}

impl<'a> ProductLookup<'a> {
    /// Returns the product when found.
    pub fn found(self) -> Option<&'a Product> {
        match self {
            Self::Found(product) => Some(product),
            Self::NotFound(_) => None,
        }
    }
}
