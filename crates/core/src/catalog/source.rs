//! Catalog data sources: HTTP(S) documents and local JSON files.

use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{CatalogError, Entry};

/// A place a catalog document can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human readable location, used in logs and error messages.
    fn location(&self) -> String;

    /// Fetch and parse the full entry list.
    async fn fetch(&self) -> Result<Vec<Entry>, CatalogError>;
}

/// Build a source from a configured location.
///
/// `http://` and `https://` locations are fetched over HTTP, anything else is
/// read as a file path.
pub fn source_for(location: &str) -> Result<Box<dyn CatalogSource>, CatalogError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Parse a catalog document (a JSON array of entries).
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Entry>, CatalogError> {
    serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Catalog document served over HTTP.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url`. No timeout and no retry: a failed fetch is
    /// reported to the caller, which decides whether to fall back.
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Entry>, CatalogError> {
        debug!("Fetching catalog from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        parse_catalog(&body)
    }
}

/// Catalog document on the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Entry>, CatalogError> {
        debug!("Reading catalog from {:?}", self.path);

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| CatalogError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        parse_catalog(&bytes)
    }
}
