// Core structs: PriceRecord, ParseResult, ScrapePayload
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Provenance of a commodity, inferred from the category header or the
/// row text itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Origin {
    Local,
    Imported,
}

/// One normalized commodity price entry. Rows without a numeric price are
/// dropped before assembly, so `price` is always present here.
#[derive(Debug, Clone, Serialize)]
pub struct PriceRecord {
    pub category: String,
    pub commodity: String,
    pub origin: Origin,
    pub unit: String,
    pub price: f64,
}

/// Outcome of one parse pass over an extracted document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseResult {
    pub covered_markets: Vec<String>,
    pub records: Vec<PriceRecord>,
}

/// A price index document discovered on the portal page.
#[derive(Debug, Clone)]
pub struct DocumentLink {
    pub url: String,
    pub date: NaiveDate,
}

/// Payload shape expected by the downstream consumer.
#[derive(Debug, Serialize)]
pub struct ScrapePayload {
    pub status: String,
    pub date_processed: String,
    pub original_url: String,
    pub covered_markets: Vec<String>,
    pub price_data: Vec<PriceRecord>,
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("portal responded with status {0}")]
    BadStatus(reqwest::StatusCode),
    #[error("no price index documents linked on the portal page")]
    NoDocuments,
    #[error("no document link carried a parseable date")]
    NoDatedDocuments,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("pdf text extraction failed: {0}")]
    Pdf(#[from] pdf_extract::OutputError),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("consumer request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("consumer rejected payload with status {0}")]
    Rejected(reqwest::StatusCode),
    #[error("consumer endpoint timed out")]
    Timeout,
}
