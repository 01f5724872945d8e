use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::HttpConfig;
use crate::core::ReviewRow;
use crate::core::locations::LocationRow;

/// Reads CSV datasets from `http(s)://` URLs or local paths.
pub struct DataSource {
    client: Client,
}

/// Rows decoded from one CSV, plus how many records could not be decoded.
#[derive(Debug)]
pub struct Decoded<T> {
    pub rows: Vec<T>,
    pub skipped: usize,
}

impl DataSource {
    pub fn new(config: &HttpConfig) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(LoadError::Http)?;
        Ok(Self { client })
    }

    pub async fn fetch_text(&self, location: &str) -> Result<String, LoadError> {
        if is_remote(location) {
            let resp = self
                .client
                .get(location)
                .send()
                .await
                .and_then(|r| r.error_for_status())
                .map_err(LoadError::Http)?;
            resp.text().await.map_err(LoadError::Http)
        } else {
            tokio::fs::read_to_string(location)
                .await
                .map_err(|e| LoadError::Io(location.to_string(), e))
        }
    }

    pub async fn load_reviews(&self, location: &str) -> Result<Decoded<ReviewRow>, LoadError> {
        let text = self.fetch_text(location).await?;
        let decoded = decode_csv(&text)?;
        tracing::info!(
            "Loaded {} review rows from {location} ({} undecodable)",
            decoded.rows.len(),
            decoded.skipped
        );
        Ok(decoded)
    }

    pub async fn load_locations(&self, location: &str) -> Result<Decoded<LocationRow>, LoadError> {
        let text = self.fetch_text(location).await?;
        let decoded = decode_csv(&text)?;
        tracing::info!("Loaded {} location rows from {location}", decoded.rows.len());
        Ok(decoded)
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Decode a CSV with a header row. Records that fail to decode are counted, not fatal.
pub fn decode_csv<T: DeserializeOwned>(text: &str) -> Result<Decoded<T>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    rdr.headers().map_err(LoadError::Csv)?;

    let mut rows = Vec::new();
    let mut skipped = 0;
    for (i, record) in rdr.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => {
                tracing::debug!("Skipping CSV record {}: {e}", i + 1);
                skipped += 1;
            }
        }
    }
    Ok(Decoded { rows, skipped })
}

#[derive(Debug)]
pub enum LoadError {
    Http(reqwest::Error),
    Io(String, std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Http(e) => write!(f, "HTTP error: {e}"),
            LoadError::Io(path, e) => write!(f, "failed to read {path}: {e}"),
            LoadError::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl std::error::Error for LoadError {}
