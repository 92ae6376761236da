//! Storefront CLI

use std::{
    io::{self, Write},
    process::ExitCode,
};

use storefront_app::context::AppContext;
use tracing::error;

use crate::{config::Config, errors::CliError};

mod commands;
mod config;
mod errors;
mod logging;
mod render;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = logging::init_subscriber(&config.logging) {
        _ = writeln!(io::stderr(), "{error}");

        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            error!(%error, "command failed");

            _ = writeln!(io::stderr(), "{error}");

            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), CliError> {
    let snapshot = config.catalog.load()?;
    let context = AppContext::in_memory(snapshot);

    let mut out = io::stdout().lock();

    config.command.run(context, &mut out).await
}
