// Publishing parse results to the downstream consumer.
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::model::{DispatchError, ParseResult, ScrapePayload};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn publish(&self, payload: &ScrapePayload) -> Result<(), DispatchError>;
}

/// Posts the JSON payload to the configured consumer endpoint.
pub struct HttpDispatcher {
    client: Client,
    endpoint: String,
}

impl HttpDispatcher {
    pub fn new(endpoint: String) -> Result<Self, DispatchError> {
        let client = Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn publish(&self, payload: &ScrapePayload) -> Result<(), DispatchError> {
        let send = self.client.post(&self.endpoint).json(payload).send();
        let response = match timeout(SEND_TIMEOUT, send).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => return Err(DispatchError::Http(e)),
            Err(_) => return Err(DispatchError::Timeout),
        };

        let status = response.status();
        if !status.is_success() {
            warn!("Consumer rejected payload [{}]", status);
            return Err(DispatchError::Rejected(status));
        }
        info!("Published {} records to consumer [{}]", payload.price_data.len(), status);
        Ok(())
    }
}

/// Maps a parse outcome onto the consumer's payload shape.
pub fn build_payload(result: ParseResult, original_url: &str, date: NaiveDate) -> ScrapePayload {
    ScrapePayload {
        status: "SUCCESS".to_string(),
        date_processed: date.format("%Y-%m-%d").to_string(),
        original_url: original_url.to_string(),
        covered_markets: result.covered_markets,
        price_data: result.records,
    }
}
