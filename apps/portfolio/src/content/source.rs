//! Where site resources come from.
//!
//! `FsSource` reads from the site root on disk; `HttpSource` fetches from a
//! remote base URL. Both report a status code the way an HTTP fetch would, so
//! a missing file is a 404 rather than a transport failure.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Raw result of fetching a resource.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub status: u16,
    pub body: Bytes,
}

impl Fetched {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A source of site resources addressed by relative path (e.g. `data/content.json`).
#[async_trait]
pub trait ResourceSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Fetched, FetchError>;

    /// Status of a resource without reading its body.
    async fn status(&self, path: &str) -> Result<u16, FetchError> {
        Ok(self.fetch(path).await?.status)
    }

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Serves resources from a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResourceSource for FsSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, FetchError> {
        let full = self.root.join(path.trim_start_matches("./"));
        debug!("Reading {}", full.display());
        match tokio::fs::read(&full).await {
            Ok(body) => Ok(Fetched {
                status: 200,
                body: Bytes::from(body),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Fetched {
                status: 404,
                body: Bytes::new(),
            }),
            Err(e) => Err(FetchError::Io {
                path: full.display().to_string(),
                source: e,
            }),
        }
    }

    async fn status(&self, path: &str) -> Result<u16, FetchError> {
        let full = self.root.join(path.trim_start_matches("./"));
        match tokio::fs::metadata(&full).await {
            Ok(meta) if meta.is_file() => Ok(200),
            Ok(_) => Ok(404),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(404),
            Err(e) => Err(FetchError::Io {
                path: full.display().to_string(),
                source: e,
            }),
        }
    }

    fn describe(&self) -> String {
        format!("dir:{}", self.root.display())
    }
}

/// Fetches resources relative to a remote base URL.
#[derive(Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches("./")
        )
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Fetched, FetchError> {
        let url = self.url_for(path);
        debug!("GET {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(Fetched { status, body })
    }

    async fn status(&self, path: &str) -> Result<u16, FetchError> {
        let url = self.url_for(path);
        debug!("HEAD {url}");
        let response = self.client.head(&url).send().await?;
        Ok(response.status().as_u16())
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}
