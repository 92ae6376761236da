use std::io;

use clap::Args;
use storefront::products::ProductId;
use storefront_app::storefront::Storefront;

use crate::{commands::AccountArgs, errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct ReviewArgs {
    /// Product id
    pub(crate) id: ProductId,

    #[command(flatten)]
    pub(crate) account: AccountArgs,

    /// Star rating from 1 to 5
    #[arg(long)]
    pub(crate) rating: u8,

    #[arg(long)]
    pub(crate) comment: String,
}

pub(crate) async fn run(
    args: ReviewArgs,
    storefront: &mut Storefront,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    args.account.sign_in(storefront).await?;

    storefront
        .submit_review(&args.id, args.rating, &args.comment)
        .await?;

    let summary = storefront.reviews(&args.id).await?;

    render::write_reviews(out, &summary)?;

    Ok(())
}
