//! Terminal rendering

use std::{io, ops::Range};

use storefront::{
    cart::Cart,
    checkout::OrderConfirmation,
    money::format_price,
    products::Product,
    reviews::{Rating, ReviewSummary},
};
use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

const MAX_STARS: usize = 5;

fn finish(builder: Builder, money_columns: Range<usize>) -> Table {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(money_columns), Alignment::right());

    table
}

fn stars(rating: Rating) -> String {
    let filled = usize::from(rating.stars()).min(MAX_STARS);

    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
}

/// Write the displayed product list.
pub(crate) fn write_products(out: &mut impl io::Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products found.");
    }

    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Brand", "Origin", "Price"]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.brand.clone(),
            product.country_of_origin.to_string(),
            format_price(product.price),
        ]);
    }

    writeln!(out, "{}", finish(builder, 4..5))
}

/// Write a product's details.
pub(crate) fn write_product(out: &mut impl io::Write, product: &Product) -> io::Result<()> {
    writeln!(out, "{}", product.name)?;
    writeln!(out, "Brand: {}", product.brand)?;
    writeln!(out, "Origin: {}", product.country_of_origin)?;
    writeln!(out, "Price: {}", format_price(product.price))?;

    if !product.description.is_empty() {
        writeln!(out, "\n{}", product.description)?;
    }

    Ok(())
}

pub(crate) fn write_reviews(out: &mut impl io::Write, summary: &ReviewSummary) -> io::Result<()> {
    let Some(average) = summary.average else {
        return writeln!(out, "\nNo reviews yet.");
    };

    writeln!(
        out,
        "\nReviews: {} (average {average} / {MAX_STARS})",
        summary.reviews.len()
    )?;

    let mut builder = Builder::default();

    builder.push_record(["Rating", "Author", "Comment", "Date"]);

    for review in &summary.reviews {
        builder.push_record([
            stars(review.rating),
            review.author.email.clone(),
            review.comment.clone(),
            review.created_at.strftime("%Y-%m-%d").to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());

    writeln!(out, "{table}")
}

/// Write the cart lines and totals.
pub(crate) fn write_cart(out: &mut impl io::Write, cart: &Cart) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Product", "Qty", "Price", "Line Total"]);

    for item in cart.items() {
        builder.push_record([
            item.product().name.clone(),
            item.quantity().to_string(),
            format_price(item.product().price),
            format_price(item.line_total()),
        ]);
    }

    writeln!(out, "{}", finish(builder, 1..4))?;
    writeln!(
        out,
        "Items: {}  Total: {}",
        cart.cart_item_count(),
        format_price(cart.cart_total())
    )
}

/// Write an order confirmation.
pub(crate) fn write_order(
    out: &mut impl io::Write,
    confirmation: &OrderConfirmation,
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Product", "Qty", "Line Total"]);

    for line in &confirmation.lines {
        builder.push_record([
            line.name.clone(),
            line.quantity.to_string(),
            format_price(line.line_total),
        ]);
    }

    writeln!(out, "Order placed at {}", confirmation.placed_at)?;
    writeln!(out, "{}", finish(builder, 1..3))?;
    writeln!(
        out,
        "Items: {}  Total: {}",
        confirmation.item_count,
        format_price(confirmation.total)
    )
}
