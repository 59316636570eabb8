use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
    /// Endpoint the parse result is published to. No endpoint means the
    /// result is only logged.
    pub consumer_url: Option<String>,
    pub check_interval_seconds: u64,
}

fn default_base_url() -> String {
    "https://www.da.gov.ph".to_string()
}

fn default_portal_url() -> String {
    "https://www.da.gov.ph/price-monitoring/".to_string()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_urls() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"check_interval_seconds": 3600}"#).unwrap();
        assert_eq!(cfg.base_url, "https://www.da.gov.ph");
        assert_eq!(cfg.portal_url, "https://www.da.gov.ph/price-monitoring/");
        assert!(cfg.consumer_url.is_none());
        assert_eq!(cfg.check_interval_seconds, 3600);
    }
}
