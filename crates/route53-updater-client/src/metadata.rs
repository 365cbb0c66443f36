//! Instance metadata client.

use reqwest::Client as HttpClient;
use route53_updater_core::{Result, UpdaterError};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// The link-local metadata service address
pub const DEFAULT_METADATA_URL: &str = "http://169.254.169.254";

/// Path of the public hostname document
pub const PUBLIC_HOSTNAME_PATH: &str = "/latest/meta-data/public-hostname";

/// Default request timeout; the service is local, so keep it short
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

const USER_AGENT: &str = concat!("route53-updater/", env!("CARGO_PKG_VERSION"));

/// Client for the instance metadata service
#[derive(Clone)]
pub struct MetadataClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: Url,
    timeout: Duration,
}

impl MetadataClient {
    /// Create a client for the standard metadata address
    pub fn new() -> Result<Self> {
        MetadataClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> MetadataClientBuilder {
        MetadataClientBuilder::new()
    }

    /// Full URL of the public hostname document
    pub fn public_hostname_url(&self) -> Result<Url> {
        self.inner
            .base_url
            .join(PUBLIC_HOSTNAME_PATH)
            .map_err(|e| UpdaterError::Config(format!("invalid metadata URL: {e}")))
    }

    /// Fetch this instance's public hostname.
    ///
    /// Issues exactly one GET. The body is trimmed; an empty body or a
    /// non-success status is an error.
    pub async fn public_hostname(&self) -> Result<String> {
        let url = self.public_hostname_url()?;
        let body = self.get_text(url).await?;
        let hostname = body.trim();

        if hostname.is_empty() {
            return Err(UpdaterError::MetadataEmpty);
        }

        debug!(hostname, "resolved public hostname from instance metadata");
        Ok(hostname.to_string())
    }

    /// Perform a GET request and return the body as text
    async fn get_text(&self, url: Url) -> Result<String> {
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "instance metadata request failed");
            return Err(UpdaterError::MetadataStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| self.request_error(&e))
    }

    fn request_error(&self, err: &reqwest::Error) -> UpdaterError {
        if err.is_timeout() {
            UpdaterError::Timeout(self.inner.timeout)
        } else {
            UpdaterError::Metadata(err.to_string())
        }
    }
}

/// Builder for configuring a [`MetadataClient`]
pub struct MetadataClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for MetadataClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataClientBuilder {
    /// Create a new builder pointing at [`DEFAULT_METADATA_URL`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_METADATA_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<MetadataClient> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| UpdaterError::Config(format!("invalid metadata URL {}: {e}", self.base_url)))?;

        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UpdaterError::Metadata(format!("failed to build HTTP client: {e}")))?;

        Ok(MetadataClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}
