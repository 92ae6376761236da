//! Cart
//!
//! The shopper's cart: an ordered set of line items, one per product, each
//! carrying a quantity of at least one.

use rust_decimal::Decimal;
use tracing::debug;

use crate::products::{Product, ProductId};

/// A product in the cart, with its quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Returns the product in this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Returns the product id of this line.
    pub fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// Returns the number of units in this line. Always at least one.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price multiplied by quantity.
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Cart
///
/// Mutations with an id that isn't in the cart are ignored.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product, appending a new line if it isn't already in the cart.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(item) = self.find_mut(&product.id) {
            item.quantity += 1;

            debug!(product = %product.id, quantity = item.quantity, "incremented cart line");

            return;
        }

        self.items.push(CartItem::new(product.clone()));

        debug!(product = %product.id, "added cart line");
    }

    /// Add one unit to an existing line.
    pub fn increase_quantity(&mut self, id: &ProductId) {
        if let Some(item) = self.find_mut(id) {
            item.quantity += 1;

            debug!(product = %id, quantity = item.quantity, "increased quantity");
        }
    }

    /// Remove one unit from an existing line, dropping the line when it reaches zero.
    pub fn decrease_quantity(&mut self, id: &ProductId) {
        let Some(position) = self.position(id) else {
            return;
        };

        let Some(item) = self.items.get_mut(position) else {
            return;
        };

        if item.quantity == 1 {
            self.items.remove(position);

            debug!(product = %id, "removed cart line at zero quantity");
        } else {
            item.quantity -= 1;

            debug!(product = %id, quantity = item.quantity, "decreased quantity");
        }
    }

    /// Remove a line regardless of its quantity.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        let before = self.items.len();

        self.items.retain(|item| item.id() != id);

        if self.items.len() != before {
            debug!(product = %id, "removed cart line");
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();

        debug!("cleared cart");
    }

    /// Sum of price times quantity over every line.
    pub fn cart_total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total number of units across all lines.
    pub fn cart_item_count(&self) -> u32 {
        self.items.iter().map(CartItem::quantity).sum()
    }

    /// Get the line for a product.
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Quantity of a product in the cart, zero when absent.
    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.get(id).map_or(0, CartItem::quantity)
    }

    /// Iterate over the lines in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }

    /// Number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}
