//! JSON over HTTP.
//!
//! [`JsonFetcher`] is the seam the organization client talks through.
//! [`HttpFetcher`] is the reqwest-backed implementation: one GET, a status
//! check, and JSON decoding. Failures are wrapped with the URL for context but
//! never retried or translated.

use std::future::Future;
use std::sync::OnceLock;
use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_USER_AGENT: &str = concat!("orgkit/", env!("CARGO_PKG_VERSION"));

const CONNECT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned {status}")]
    Status {
        url: String,
        status: StatusCode,
        #[source]
        source: reqwest::Error,
    },
    #[error("GET {url} returned a body that is not JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Client(_) => None,
            Self::Request { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                Some(url)
            }
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Anything that can turn a URL into a decoded JSON document.
pub trait JsonFetcher {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    /// Whole-request timeout. `None` leaves only the connect timeout in place.
    pub timeout: Option<Duration>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

fn client_builder(settings: &HttpSettings) -> reqwest::ClientBuilder {
    let mut builder = reqwest::Client::builder()
        .user_agent(settings.user_agent.clone())
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS));
    if let Some(timeout) = settings.timeout {
        builder = builder.timeout(timeout);
    }
    builder
}

/// Process-wide client built from [`HttpSettings::default`].
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        client_builder(&HttpSettings::default())
            .build()
            .unwrap_or_else(|e| {
                tracing::error!("Failed to build HTTP client: {e}. Using reqwest defaults.");
                reqwest::Client::new()
            })
    })
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        let client = client_builder(settings).build().map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// A fetcher sharing the process-wide [`http_client`].
    #[must_use]
    pub fn shared() -> Self {
        Self {
            client: http_client().clone(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::shared()
    }
}

impl JsonFetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let response = response
            .error_for_status()
            .map_err(|source| FetchError::Status {
                url: url.to_string(),
                status,
                source,
            })?;

        response
            .json::<Value>()
            .await
            .map_err(|source| FetchError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

/// GET `url` with the shared client and decode the body as JSON.
pub async fn get_json(url: &str) -> Result<Value, FetchError> {
    HttpFetcher::shared().get_json(url).await
}
