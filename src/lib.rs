pub mod config;
pub mod error;
pub mod fetch;
pub mod http;
pub mod logging;
pub mod model;
pub mod robots;
pub mod table;

pub use config::ScrapeConfig;
pub use error::{PolicyDenial, ScrapeError};
pub use fetch::{extract_records, Scraper};
pub use http::{HttpExecutor, HttpRequest, HttpResponse, QueryValue, ReqwestExecutor};
pub use model::{Field, Record, TableSchema};
pub use table::{print_table, render_table};
