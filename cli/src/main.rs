//! Income tax filing system - binary entry point.
//!
//! Startup is three ordered writes, each completing before the next begins:
//!
//! ```text
//! main() -> banner title (stdout) -> banner subtitle (stdout) -> "System initialized" (log sink)
//! ```
//!
//! The log sink is stderr, so stdout carries only the banner.

mod banner;
mod logging;

use anyhow::{Context, Result};
use std::io::stdout;

use incometax_config::IncomeTaxConfig;
use incometax_types::INIT_MESSAGE;

fn main() -> Result<()> {
    let config = IncomeTaxConfig::embedded().context("built-in configuration is invalid")?;
    logging::init_tracing(&config.logging);

    banner::write_banner(&mut stdout().lock(), &config.banner())
        .context("failed to write banner to stdout")?;

    // Rules engine and decision-table loading attach here once they exist.
    tracing::info!("{INIT_MESSAGE}");

    Ok(())
}
