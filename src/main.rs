mod config;
mod dispatch;
mod extract;
mod model;
mod normalizer;
mod parser;
mod scraper;

use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

use crate::config::{AppConfig, load_config};
use crate::dispatch::{Dispatcher, HttpDispatcher};
use crate::parser::{Parser, PriceIndexParser};
use crate::scraper::{PortalScraper, Scraper};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file
    let config: AppConfig = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let portal = match PortalScraper::new(config.base_url.clone(), config.portal_url.clone()) {
        Ok(p) => p,
        Err(e) => {
            error!("Failed to build portal client: {}", e);
            return;
        }
    };
    let parser = PriceIndexParser::new();

    let dispatcher = match &config.consumer_url {
        Some(url) => match HttpDispatcher::new(url.clone()) {
            Ok(d) => Some(d),
            Err(e) => {
                error!("Failed to build consumer client: {}", e);
                return;
            }
        },
        None => {
            warn!("No consumer endpoint configured; results will only be logged");
            None
        }
    };

    // Main processing loop
    loop {
        if let Err(e) = process_latest(&portal, &parser, dispatcher.as_ref()).await {
            warn!("Run failed: {}", e);
        }
        info!("Waiting {}s until next check...", config.check_interval_seconds);
        sleep(Duration::from_secs(config.check_interval_seconds)).await;
    }
}

/// One full pass: locate the newest document on the portal, extract its
/// text, parse it and hand the result to the consumer.
async fn process_latest(
    portal: &PortalScraper,
    parser: &PriceIndexParser,
    dispatcher: Option<&HttpDispatcher>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let link = portal.latest_document().await?;
    info!("Newest price index: {} ({})", link.url, link.date);

    let bytes = portal.download(&link).await?;
    info!("Downloaded {} bytes", bytes.len());

    let text = extract::extract_text(&bytes)?;
    let result = parser.parse(&text);
    info!(
        "Parsed {} records across {} covered markets",
        result.records.len(),
        result.covered_markets.len()
    );

    if result.records.is_empty() {
        warn!("Parser produced no records; nothing dispatched");
        return Ok(());
    }

    if let Some(dispatcher) = dispatcher {
        let payload = dispatch::build_payload(result, &link.url, link.date);
        dispatcher.publish(&payload).await?;
    }

    Ok(())
}
