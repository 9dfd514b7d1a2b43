// SPDX-License-Identifier: MPL-2.0
//! Asynchronous asset fetching.
//!
//! Asset references are either `http(s)://` URLs, fetched with `reqwest`, or
//! local files (`file://` URLs and plain paths), read with `tokio::fs`.
//! Relative paths resolve against the directory of the gallery manifest.

use crate::app::config::{FETCH_TIMEOUT_SECS, MAX_ASSET_BYTES};
use crate::domain::gallery::AssetRef;
use crate::error::{FetchError, Result};
use crate::media::image::AssetImage;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Where the bytes of an asset come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    Remote(String),
    Local(PathBuf),
}

/// A successfully fetched and validated asset.
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub image: AssetImage,
    pub elapsed: Duration,
}

/// Fetches asset bytes from the network or the filesystem.
///
/// Cloning is cheap: the underlying HTTP client is reference-counted.
#[derive(Debug, Clone)]
pub struct AssetFetcher {
    client: reqwest::Client,
    base_dir: Option<PathBuf>,
    max_bytes: u64,
}

impl AssetFetcher {
    /// Creates a fetcher resolving relative paths against `base_dir`.
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_dir,
            max_bytes: MAX_ASSET_BYTES,
        })
    }

    /// Overrides the response size cap.
    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    /// Classifies an asset reference.
    pub fn resolve(&self, asset: &AssetRef) -> Result<AssetSource> {
        let raw = asset.as_str().trim();
        if raw.is_empty() {
            return Err(FetchError::InvalidReference(raw.to_string()).into());
        }

        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return Ok(AssetSource::Remote(raw.to_string()));
        }

        let path = match raw.strip_prefix("file://") {
            Some(rest) if !rest.is_empty() => PathBuf::from(rest),
            Some(_) => return Err(FetchError::InvalidReference(raw.to_string()).into()),
            None => PathBuf::from(raw),
        };

        if path.is_relative() {
            if let Some(base) = &self.base_dir {
                return Ok(AssetSource::Local(base.join(path)));
            }
        }
        Ok(AssetSource::Local(path))
    }

    /// Fetches the raw bytes of an asset.
    pub async fn fetch_bytes(&self, asset: &AssetRef) -> Result<Vec<u8>> {
        match self.resolve(asset)? {
            AssetSource::Remote(url) => self.download(&url).await,
            AssetSource::Local(path) => self.read_local(&path).await,
        }
    }

    /// Fetches an asset and validates that it is a displayable image.
    pub async fn fetch(&self, asset: &AssetRef) -> Result<FetchedAsset> {
        let started = Instant::now();
        let bytes = self.fetch_bytes(asset).await?;
        let image = AssetImage::from_encoded(bytes)?;
        Ok(FetchedAsset {
            image,
            elapsed: started.elapsed(),
        })
    }

    async fn read_local(&self, path: &Path) -> Result<Vec<u8>> {
        let metadata = tokio::fs::metadata(path).await?;
        if metadata.len() > self.max_bytes {
            return Err(FetchError::TooLarge(self.max_bytes).into());
        }
        Ok(tokio::fs::read(path).await?)
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        use futures_util::StreamExt;

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()).into());
        }

        if response
            .content_length()
            .is_some_and(|len| len > self.max_bytes)
        {
            return Err(FetchError::TooLarge(self.max_bytes).into());
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(FetchError::TooLarge(self.max_bytes).into());
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}

/// Fetches an asset for a background task.
///
/// Returns the asset reference alongside the result so the caller can match
/// completions to requests.
pub async fn fetch_asset(fetcher: AssetFetcher, asset: AssetRef) -> (AssetRef, Result<FetchedAsset>) {
    let result = fetcher.fetch(&asset).await;
    (asset, result)
}
