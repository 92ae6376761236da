//! Subcommands

use std::io;

use clap::{Args, Subcommand};
use storefront_app::{
    auth::{AuthError, SignupForm, User},
    context::AppContext,
    storefront::Storefront,
};

use crate::errors::CliError;

mod browse;
mod checkout;
mod product;
mod review;

pub(crate) use browse::BrowseArgs;
pub(crate) use checkout::CheckoutArgs;
pub(crate) use product::ProductArgs;
pub(crate) use review::ReviewArgs;

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// List products, optionally searched, filtered and sorted
    Browse(BrowseArgs),

    /// Show a product with its reviews
    Product(ProductArgs),

    /// Fill a cart and place an order
    Checkout(CheckoutArgs),

    /// Review a product
    Review(ReviewArgs),
}

impl Command {
    pub(crate) async fn run(
        self,
        context: AppContext,
        out: &mut impl io::Write,
    ) -> Result<(), CliError> {
        let mut storefront = Storefront::new(context);

        match self {
            Self::Browse(args) => browse::run(args, &mut storefront, out),
            Self::Product(args) => product::run(args, &storefront, out).await,
            Self::Checkout(args) => checkout::run(args, &mut storefront, out).await,
            Self::Review(args) => review::run(args, &mut storefront, out).await,
        }
    }
}

/// Shopper account used by commands that need a session.
#[derive(Debug, Args)]
pub(crate) struct AccountArgs {
    /// Account email
    #[arg(long, env = "STOREFRONT_EMAIL")]
    pub(crate) email: String,

    /// Account password
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    pub(crate) password: String,
}

impl AccountArgs {
    /// Register the account and sign it in.
    ///
    /// The in-process identity provider starts empty on every run.
    async fn sign_in(&self, storefront: &mut Storefront) -> Result<User, AuthError> {
        storefront
            .signup(&SignupForm {
                email: self.email.clone(),
                password: self.password.clone(),
                confirm_password: self.password.clone(),
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use storefront::catalog::bundled_catalog;
    use testresult::TestResult;

    use clap::Parser;

    use super::*;
    use crate::config::Config;

    async fn run(args: &[&str]) -> TestResult<Result<String, CliError>> {
        let config = Config::try_parse_from(args)?;
        let context = AppContext::in_memory(bundled_catalog()?);

        let mut out = Vec::new();
        let result = config.command.run(context, &mut out).await;

        Ok(result.map(|()| String::from_utf8_lossy(&out).into_owned()))
    }

    fn account() -> [&'static str; 4] {
        ["--email", "shopper@example.com", "--password", "secret1"]
    }

    #[tokio::test]
    async fn browse_lists_turkish_products_by_price() -> TestResult {
        let output = run(&[
            "storefront",
            "browse",
            "--origin",
            "turkey",
            "--sort",
            "price-asc",
        ])
        .await??;

        let vestel = output.find("Vestel").ok_or("vestel listed")?;
        let arcelik = output.find("Arcelik").ok_or("arcelik listed")?;
        let beko = output.find("Beko").ok_or("beko listed")?;

        assert!(vestel < arcelik && arcelik < beko, "{output}");
        assert!(!output.contains("Sony"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn browse_with_no_matches() -> TestResult {
        let output = run(&["storefront", "browse", "--search", "zzz"]).await??;

        assert_eq!(output, "No products found.\n");

        Ok(())
    }

    #[tokio::test]
    async fn product_not_found_is_rendered() -> TestResult {
        let output = run(&["storefront", "product", "404"]).await??;

        assert_eq!(output, "Product not found!\n");

        Ok(())
    }

    #[tokio::test]
    async fn product_details_without_reviews() -> TestResult {
        let output = run(&["storefront", "product", "7"]).await??;

        assert!(output.starts_with("Bosch Dishwasher\n"), "{output}");
        assert!(output.contains("No reviews yet."), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn checkout_places_an_order() -> TestResult {
        let mut args = vec!["storefront", "checkout"];
        args.extend(account());
        args.extend(["--add", "2", "--add", "2", "--add", "4"]);
        args.extend(["--name", "Ayşe", "--address", "Bağdat Caddesi 1"]);
        args.extend(["--city", "Istanbul", "--postal-code", "34000"]);
        args.extend(["--card-number", "1111 2222 3333 4444"]);
        args.extend(["--expiry-date", "09/27", "--cvv", "123"]);

        let output = run(&args).await??;

        assert!(output.contains("Order placed at"), "{output}");
        assert!(output.contains("Items: 3"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn checkout_reports_first_invalid_field() -> TestResult {
        let mut args = vec!["storefront", "checkout"];
        args.extend(account());
        args.extend(["--add", "1", "--name", "Ayşe"]);

        let result = run(&args).await?;

        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("Please enter a valid address.".to_string())
        );

        Ok(())
    }

    #[tokio::test]
    async fn checkout_rejects_unknown_product() -> TestResult {
        let mut args = vec!["storefront", "checkout"];
        args.extend(account());
        args.extend(["--add", "99"]);

        let result = run(&args).await?;

        assert!(
            matches!(result, Err(CliError::ProductNotFound(ref id)) if id.as_str() == "99"),
            "{result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn review_is_listed_after_submission() -> TestResult {
        let mut args = vec!["storefront", "review", "3"];
        args.extend(account());
        args.extend(["--rating", "4", "--comment", "Quiet and efficient"]);

        let output = run(&args).await??;

        assert!(output.contains("Quiet and efficient"), "{output}");
        assert!(output.contains("★★★★☆"), "{output}");
        assert!(output.contains("shopper@example.com"), "{output}");

        Ok(())
    }

    #[tokio::test]
    async fn review_requires_a_comment() -> TestResult {
        let mut args = vec!["storefront", "review", "3"];
        args.extend(account());
        args.extend(["--rating", "4", "--comment", "  "]);

        let result = run(&args).await?;

        assert_eq!(
            result.map_err(|error| error.to_string()),
            Err("Please enter a comment.".to_string())
        );

        Ok(())
    }
}
