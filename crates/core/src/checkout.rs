//! Checkout
//!
//! Form validation and order summaries. Validation runs the fields in form
//! order and stops at the first failure.

use std::fmt::{self, Display, Formatter};

use jiff::Timestamp;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    cart::Cart,
    products::ProductId,
    validation::{
        is_valid_address, is_valid_card_number, is_valid_city, is_valid_cvv,
        is_valid_expiry_date, is_valid_name, is_valid_postal_code,
    },
};

/// A checkout form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutField {
    /// Full name
    Name,

    /// Street address
    Address,

    /// City
    City,

    /// Postal code
    PostalCode,

    /// Card number
    CardNumber,

    /// Card expiry date
    ExpiryDate,

    /// Card verification value
    Cvv,
}

impl CheckoutField {
    /// User-facing message shown when this field fails validation.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Name => "Please enter a valid name.",
            Self::Address => "Please enter a valid address.",
            Self::City => "Please enter a valid city.",
            Self::PostalCode => "Please enter a valid postal code (digits only).",
            Self::CardNumber => "Please enter a valid 16-digit card number.",
            Self::ExpiryDate => "Please enter a valid expiry date in MM/YY format.",
            Self::Cvv => "Please enter a valid 3 or 4 digit CVV.",
        }
    }
}

impl Display for CheckoutField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::City => "city",
            Self::PostalCode => "postal code",
            Self::CardNumber => "card number",
            Self::ExpiryDate => "expiry date",
            Self::Cvv => "CVV",
        };

        f.write_str(name)
    }
}

/// A checkout field failed validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{}", .field.message())]
pub struct ValidationError {
    /// The offending field.
    pub field: CheckoutField,
}

/// Shipping and payment details entered at checkout.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    /// Full name
    pub name: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// Postal code
    pub postal_code: String,

    /// Card number
    pub card_number: String,

    /// Expiry date, `MM/YY`
    pub expiry_date: String,

    /// Card verification value
    pub cvv: String,
}

impl CheckoutForm {
    /// Validate every field in form order.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first field that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let checks: [(CheckoutField, bool); 7] = [
            (CheckoutField::Name, is_valid_name(&self.name)),
            (CheckoutField::Address, is_valid_address(&self.address)),
            (CheckoutField::City, is_valid_city(&self.city)),
            (
                CheckoutField::PostalCode,
                is_valid_postal_code(&self.postal_code),
            ),
            (
                CheckoutField::CardNumber,
                is_valid_card_number(&self.card_number),
            ),
            (
                CheckoutField::ExpiryDate,
                is_valid_expiry_date(&self.expiry_date),
            ),
            (CheckoutField::Cvv, is_valid_cvv(&self.cvv)),
        ];

        match checks.into_iter().find(|(_, valid)| !valid) {
            Some((field, _)) => Err(ValidationError { field }),
            None => Ok(()),
        }
    }
}

/// One line of a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Product id
    pub product: ProductId,

    /// Product name at the time of ordering
    pub name: String,

    /// Units ordered
    pub quantity: u32,

    /// Unit price times quantity
    pub line_total: Decimal,
}

/// Summary of a placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// Ordered lines, in cart order
    pub lines: Vec<OrderLine>,

    /// Total units
    pub item_count: u32,

    /// Order total
    pub total: Decimal,

    /// When the order was placed
    pub placed_at: Timestamp,
}

impl OrderConfirmation {
    /// Summarise the current contents of a cart.
    pub fn from_cart(cart: &Cart, placed_at: Timestamp) -> Self {
        let lines = cart
            .items()
            .map(|item| OrderLine {
                product: item.id().clone(),
                name: item.product().name.clone(),
                quantity: item.quantity(),
                line_total: item.line_total(),
            })
            .collect();

        Self {
            lines,
            item_count: cart.cart_item_count(),
            total: cart.cart_total(),
            placed_at,
        }
    }
}
