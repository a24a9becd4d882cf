use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use cmc_scraper::{logging, print_table, ReqwestExecutor, ScrapeConfig, Scraper};

/// Print the top 10 cryptocurrencies from CoinMarketCap.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file overriding the built-in settings.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ScrapeConfig::load(path)?,
        None => ScrapeConfig::default(),
    };

    let executor = ReqwestExecutor::new(config.request_timeout())?;
    let scraper = Scraper::new(executor, config);

    let rows = scraper.scrape().await;
    print_table(&rows);

    Ok(())
}
