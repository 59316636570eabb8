// Covered-markets footnote extraction, one shot over the whole text.
use std::sync::LazyLock;

use regex::Regex;

use super::sanitize::sanitize;

// The block is introduced by a footnote marker and runs as a numbered
// list until the next page marker or end of text.
static MARKET_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)(?:d\)|Covered markets:)\s*(1\..+?)(?:Page|\z)").unwrap()
});
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\d+\.\s*").unwrap());

/// Extracts the covered-markets list. A document without the block yields
/// an empty list; that is not an error.
pub fn extract_markets(raw_text: &str) -> Vec<String> {
    let Some(caps) = MARKET_BLOCK.captures(raw_text) else {
        return Vec::new();
    };

    let mut markets: Vec<String> = Vec::new();
    for fragment in LIST_MARKER.split(&caps[1]) {
        let market = sanitize(&fragment.replace(['\r', '\n'], " "));
        if market.chars().count() > 3 && !markets.contains(&market) {
            markets.push(market);
        }
    }
    markets
}
