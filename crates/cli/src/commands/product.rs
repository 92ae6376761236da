use std::io;

use clap::Args;
use storefront::{products::ProductId, snapshot::ProductLookup};
use storefront_app::storefront::Storefront;

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    pub(crate) id: ProductId,
}

pub(crate) async fn run(
    args: ProductArgs,
    storefront: &Storefront,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let product = match storefront.product(&args.id) {
        ProductLookup::Found(product) => product,
        ProductLookup::NotFound(_) => {
            writeln!(out, "Product not found!")?;

            return Ok(());
        }
    };

    render::write_product(out, product)?;

    let summary = storefront.reviews(&args.id).await?;

    render::write_reviews(out, &summary)?;

    Ok(())
}
