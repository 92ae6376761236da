//! Command line configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{catalog::CatalogConfig, logging::LoggingConfig},
};

pub(crate) mod catalog;
pub(crate) mod logging;

/// Storefront command line configuration
#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
pub(crate) struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub(crate) logging: LoggingConfig,

    /// Product catalog settings.
    #[command(flatten)]
    pub(crate) catalog: CatalogConfig,

    /// Command to run.
    #[command(subcommand)]
    pub(crate) command: Command,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

#[cfg(test)]
mod tests {
    use storefront::{
        products::{CountryOfOrigin, ProductId},
        projection::{OriginFilter, SortOption},
    };
    use testresult::TestResult;

    use super::*;
    use crate::config::logging::LogFormat;

    #[test]
    fn browse_defaults() -> TestResult {
        let config = Config::try_parse_from(["storefront", "browse"])?;

        let Command::Browse(args) = config.command else {
            return Err("expected browse".into());
        };

        assert_eq!(args.search, "");
        assert_eq!(args.origin, OriginFilter::All);
        assert_eq!(args.sort, SortOption::Default);
        assert!(config.catalog.catalog.is_none(), "bundled catalog by default");

        Ok(())
    }

    #[test]
    fn browse_parses_view_parameters() -> TestResult {
        let config = Config::try_parse_from([
            "storefront",
            "--log-format",
            "json",
            "browse",
            "--search",
            "be",
            "--origin",
            "turkey",
            "--sort",
            "price-desc",
        ])?;

        let Command::Browse(args) = config.command else {
            return Err("expected browse".into());
        };

        assert_eq!(config.logging.log_format, LogFormat::Json);
        assert_eq!(args.search, "be");
        assert_eq!(args.origin, OriginFilter::Only(CountryOfOrigin::Turkey));
        assert_eq!(args.sort, SortOption::PriceDescending);

        Ok(())
    }

    #[test]
    fn log_filter_accepts_crate_directives_after_subcommand() -> TestResult {
        let config = Config::try_parse_from([
            "storefront",
            "browse",
            "--log-level",
            "storefront=debug,storefront_app=info",
        ])?;

        assert_eq!(config.logging.log_level, "storefront=debug,storefront_app=info");
        assert_eq!(config.logging.log_format, LogFormat::Compact);

        Ok(())
    }

    #[test]
    fn unknown_origin_is_rejected() {
        let result = Config::try_parse_from(["storefront", "browse", "--origin", "mars"]);

        assert!(result.is_err(), "unknown origin should not parse");
    }

    #[test]
    fn checkout_collects_products_and_form() -> TestResult {
        let config = Config::try_parse_from([
            "storefront",
            "checkout",
            "--email",
            "shopper@example.com",
            "--password",
            "secret1",
            "--add",
            "1",
            "--add",
            "1",
            "--name",
            "Ayşe",
            "--address",
            "Bağdat Caddesi 1",
            "--city",
            "Istanbul",
            "--postal-code",
            "34000",
            "--card-number",
            "1111 2222 3333 4444",
            "--expiry-date",
            "09/27",
            "--cvv",
            "123",
        ])?;

        let Command::Checkout(args) = config.command else {
            return Err("expected checkout".into());
        };

        assert_eq!(args.add, vec![ProductId::from("1"), ProductId::from("1")]);
        assert_eq!(args.form().card_number, "1111 2222 3333 4444");
        assert_eq!(args.account.email, "shopper@example.com");

        Ok(())
    }
}
