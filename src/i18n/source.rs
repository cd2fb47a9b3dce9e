//! Translation resource sources
//!
//! A source turns a locale identifier into the raw bytes of its resource:
//! - `FsSource`: `<dir>/<locale>.json` read with tokio
//! - `HttpSource`: `<base>/<locale>.json` fetched with reqwest

use crate::config::ResourceLocation;
use crate::error::{I18nError, I18nResult};
use async_trait::async_trait;
use std::path::PathBuf;

/// Fetches the raw payload of a locale resource
#[async_trait]
pub trait TranslationSource: Send + Sync {
    /// Fetch the resource for a locale identifier
    async fn fetch(&self, locale: &str) -> I18nResult<Vec<u8>>;
}

/// Check that a locale identifier is safe to embed in a path or URL
pub fn validate_locale(locale: &str) -> I18nResult<()> {
    let valid = !locale.is_empty()
        && locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(I18nError::InvalidLocale(locale.to_string()))
    }
}

/// Build the source matching a configured resource location
pub fn from_location(location: &ResourceLocation) -> Box<dyn TranslationSource> {
    match location {
        ResourceLocation::Directory(dir) => Box::new(FsSource::new(dir.clone())),
        ResourceLocation::Url(base) => Box::new(HttpSource::new(base.clone())),
    }
}

/// Reads resources from a local directory
#[derive(Debug, Clone)]
pub struct FsSource {
    dir: PathBuf,
}

impl FsSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the resource for a locale
    pub fn path_for(&self, locale: &str) -> PathBuf {
        self.dir.join(format!("{}.json", locale))
    }
}

#[async_trait]
impl TranslationSource for FsSource {
    async fn fetch(&self, locale: &str) -> I18nResult<Vec<u8>> {
        validate_locale(locale)?;
        let path = self.path_for(locale);
        tokio::fs::read(&path)
            .await
            .map_err(|source| I18nError::ReadError { path, source })
    }
}

/// Fetches resources over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured client (proxies, headers)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// URL of the resource for a locale
    pub fn url_for(&self, locale: &str) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), locale)
    }
}

#[async_trait]
impl TranslationSource for HttpSource {
    async fn fetch(&self, locale: &str) -> I18nResult<Vec<u8>> {
        validate_locale(locale)?;
        let unavailable = |reason: String| I18nError::ResourceUnavailable {
            locale: locale.to_string(),
            reason,
        };

        let url = self.url_for(locale);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("HTTP status {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| unavailable(e.to_string()))?;
        Ok(body.to_vec())
    }
}
