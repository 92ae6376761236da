use std::io;

use clap::Args;
use storefront::{checkout::CheckoutForm, products::ProductId, snapshot::ProductLookup};
use storefront_app::storefront::Storefront;
use tracing::warn;

use crate::{commands::AccountArgs, errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    #[command(flatten)]
    pub(crate) account: AccountArgs,

    /// Product id to add to the cart; repeat to add more
    #[arg(long, required = true)]
    pub(crate) add: Vec<ProductId>,

    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    /// Street address
    #[arg(long, default_value = "")]
    address: String,

    #[arg(long, default_value = "")]
    city: String,

    #[arg(long, default_value = "")]
    postal_code: String,

    /// 16-digit card number; spaces are ignored
    #[arg(long, default_value = "")]
    card_number: String,

    /// Card expiry as MM/YY
    #[arg(long, default_value = "")]
    expiry_date: String,

    #[arg(long, default_value = "")]
    cvv: String,
}

impl CheckoutArgs {
    pub(crate) fn form(&self) -> CheckoutForm {
        CheckoutForm {
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            card_number: self.card_number.clone(),
            expiry_date: self.expiry_date.clone(),
            cvv: self.cvv.clone(),
        }
    }
}

pub(crate) async fn run(
    args: CheckoutArgs,
    storefront: &mut Storefront,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    args.account.sign_in(storefront).await?;

    for id in &args.add {
        let product = match storefront.product(id) {
            ProductLookup::Found(product) => product.clone(),
            ProductLookup::NotFound(id) => {
                warn!(product = %id, "cannot add unknown product");

                return Err(CliError::ProductNotFound(id));
            }
        };

        storefront.cart_mut()?.add_to_cart(&product);
    }

    if let Some(cart) = storefront.cart() {
        render::write_cart(out, cart)?;
    }

    let confirmation = storefront.checkout(&args.form())?;

    render::write_order(out, &confirmation)?;

    Ok(())
}
