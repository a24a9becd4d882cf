use scraper::{ElementRef, Html, Selector};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::http::{HttpExecutor, HttpRequest};
use crate::model::{Record, TableSchema};
use crate::robots;

/// Scrapes the CMC home table: robots check, page fetch, row extraction.
pub struct Scraper<E> {
    executor: E,
    config: ScrapeConfig,
}

impl<E: HttpExecutor> Scraper<E> {
    pub fn new(executor: E, config: ScrapeConfig) -> Self {
        Self { executor, config }
    }

    pub fn config(&self) -> &ScrapeConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub async fn is_allowed(&self) -> bool {
        robots::is_allowed(&self.executor, &self.config.robots_url, &self.config.user_agent).await
    }

    /// Top rows of the table, or an empty list if anything went wrong.
    pub async fn scrape(&self) -> Vec<Record> {
        match self.try_scrape().await {
            Ok(rows) => rows,
            Err(err) => {
                tracing::error!("Error scraping CoinMarketCap: {:#}", anyhow::Error::from(err));
                Vec::new()
            }
        }
    }

    /// Same as [`scrape`](Self::scrape) but keeps the failure cause.
    pub async fn try_scrape(&self) -> Result<Vec<Record>, ScrapeError> {
        robots::check_policy(&self.executor, &self.config.robots_url, &self.config.user_agent)
            .await?;

        let url = &self.config.page_url;
        let request = HttpRequest::get(url).header("User-Agent", &self.config.user_agent);
        let response = self
            .executor
            .execute(request)
            .await
            .map_err(|source| ScrapeError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.is_ok() {
            tracing::warn!(
                "Failed to retrieve data from {}. Status code: {}",
                url,
                response.status
            );
            return Err(ScrapeError::FetchFailed {
                url: url.clone(),
                status: response.status,
            });
        }

        let rows = extract_records(&response.body, &self.config.schema())?;
        tracing::info!("scraped {} rows from {}", rows.len(), url);
        Ok(rows)
    }
}

/// Maps table rows onto records.
///
/// Rows are scanned in document order and only the first `max_rows` positions
/// are considered. A row without any `td` is skipped but still uses up its
/// position, so the ranks after it shift by one. A non-empty row that is too
/// short for the schema fails the whole extraction.
pub fn extract_records(html: &str, schema: &TableSchema) -> Result<Vec<Record>, ScrapeError> {
    let row_sel = Selector::parse(&schema.row_selector).map_err(|e| {
        ScrapeError::TransformFailed(format!("bad row selector {:?}: {e}", schema.row_selector))
    })?;
    let cell_sel = Selector::parse("td")
        .map_err(|e| ScrapeError::TransformFailed(format!("bad cell selector: {e}")))?;

    let required = schema.required_cells();
    let doc = Html::parse_document(html);
    let mut out = Vec::with_capacity(schema.max_rows);

    for (idx, row) in doc.select(&row_sel).take(schema.max_rows).enumerate() {
        let cells: Vec<ElementRef> = row.select(&cell_sel).collect();
        if cells.is_empty() {
            tracing::debug!("row {} has no cells, skipping", idx + 1);
            continue;
        }

        if cells.len() < required {
            return Err(ScrapeError::TransformFailed(format!(
                "row {} has {} cells, expected at least {}",
                idx + 1,
                cells.len(),
                required
            )));
        }

        let mut record = Record::new(idx as u32 + 1);
        for &(cell_idx, field) in &schema.columns {
            record.set(field, cell_text(&cells[cell_idx]));
        }
        out.push(record);
    }

    Ok(out)
}

fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
