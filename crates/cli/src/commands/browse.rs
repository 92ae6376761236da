use std::io;

use clap::Args;
use storefront::projection::{OriginFilter, SortOption};
use storefront_app::storefront::Storefront;

use crate::{errors::CliError, render};

#[derive(Debug, Args)]
pub(crate) struct BrowseArgs {
    /// Case-insensitive search over product name and brand
    #[arg(short, long, default_value = "")]
    pub(crate) search: String,

    /// Country of origin (all, turkey, usa, germany, other)
    #[arg(short, long, default_value = "all")]
    pub(crate) origin: OriginFilter,

    /// Sort order (default, price-asc, price-desc)
    #[arg(long, default_value = "default")]
    pub(crate) sort: SortOption,
}

pub(crate) fn run(
    args: BrowseArgs,
    storefront: &mut Storefront,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    storefront.set_search(args.search);
    storefront.set_origin(args.origin);
    storefront.set_sort(args.sort);

    render::write_products(out, storefront.displayed())?;

    Ok(())
}
