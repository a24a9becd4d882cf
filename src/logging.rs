//! Log setup: everything goes to stderr so stdout carries only the table.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,cmc_scraper=debug";

pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
