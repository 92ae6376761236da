//! Logging Config

use clap::Args;

/// How log lines are written to stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event.
    Compact,

    /// One JSON object per event, for log shippers.
    Json,
}

/// Logging settings shared by every subcommand.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log filter, either a level or per-crate directives such as
    /// `storefront=debug,storefront_app=info` to trace cart and session changes
    #[arg(short, long, env = "RUST_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(
        long,
        env = "LOG_FORMAT",
        value_enum,
        default_value_t = LogFormat::Compact,
        global = true
    )]
    pub log_format: LogFormat,
}
