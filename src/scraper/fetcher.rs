// Portal scraping: find and download the newest Daily Price Index PDF.
use std::sync::LazyLock;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use tracing::info;

use super::traits::Scraper;
use crate::model::{DocumentLink, ScraperError};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

static PDF_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(Daily-Price-Index|DPI).*\.pdf$").unwrap());
static FILENAME_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z]+-\d{1,2}-\d{4})").unwrap());

pub struct PortalScraper {
    client: Client,
    base_url: String,
    portal_url: String,
}

impl PortalScraper {
    pub fn new(base_url: String, portal_url: String) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, base_url, portal_url })
    }

    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                href.trim_start_matches('/')
            )
        }
    }

    /// Picks the newest document by the date embedded in the filename.
    fn newest_document(&self, html: &str) -> Result<DocumentLink, ScraperError> {
        let document = Html::parse_document(html);
        let anchor = Selector::parse("a[href]").unwrap();

        let mut found_any = false;
        let mut newest: Option<DocumentLink> = None;
        for element in document.select(&anchor) {
            let Some(href) = element.value().attr("href") else { continue };
            if !PDF_LINK.is_match(href) {
                continue;
            }
            found_any = true;
            let filename = href.rsplit('/').next().unwrap_or(href);
            let Some(date) = parse_date_from_filename(filename) else { continue };
            if newest.as_ref().map_or(true, |current| date > current.date) {
                newest = Some(DocumentLink { url: self.absolutize(href), date });
            }
        }

        match newest {
            Some(link) => Ok(link),
            None if found_any => Err(ScraperError::NoDatedDocuments),
            None => Err(ScraperError::NoDocuments),
        }
    }
}

#[async_trait]
impl Scraper for PortalScraper {
    async fn latest_document(&self) -> Result<DocumentLink, ScraperError> {
        let response = self.client.get(&self.portal_url).send().await?;
        if !response.status().is_success() {
            return Err(ScraperError::BadStatus(response.status()));
        }
        let html = response.text().await?;
        self.newest_document(&html)
    }

    async fn download(&self, link: &DocumentLink) -> Result<Vec<u8>, ScraperError> {
        info!("Downloading document: {}", link.url);
        let response = self.client.get(&link.url).send().await?;
        if !response.status().is_success() {
            return Err(ScraperError::BadStatus(response.status()));
        }
        Ok(response.bytes().await?.to_vec())
    }
}

/// Filenames look like "December-10-2025-DPI-AFC.pdf"; full and
/// abbreviated month names both occur.
fn parse_date_from_filename(filename: &str) -> Option<NaiveDate> {
    let caps = FILENAME_DATE.captures(filename)?;
    let date_str = caps.get(1)?.as_str();
    for format in ["%B-%d-%Y", "%b-%d-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(date);
        }
    }
    None
}
