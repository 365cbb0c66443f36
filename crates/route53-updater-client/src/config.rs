//! Client configuration types.

use std::time::Duration;

/// Region used when the standard chain yields none; Route 53 is a global service
pub const DEFAULT_REGION: &str = "us-east-1";

/// Default bound on a single Route 53 call
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// Route 53 client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Explicit region; falls back to the standard chain, then [`DEFAULT_REGION`]
    pub region: Option<String>,

    /// Endpoint override (local stacks, tests)
    pub endpoint_url: Option<String>,

    /// Bound on the whole operation, including any SDK-level attempts
    pub timeout: Duration,

    /// Total SDK attempts; 1 means the request is never retried
    pub max_attempts: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderConfig {
    /// Create a configuration with no retries and a 30 second timeout
    #[must_use]
    pub const fn new() -> Self {
        Self {
            region: None,
            endpoint_url: None,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
            max_attempts: 1,
        }
    }

    /// Set the region
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the endpoint override
    #[must_use]
    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Set the operation timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of attempts (clamped to at least 1)
    #[must_use]
    pub const fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = if attempts == 0 { 1 } else { attempts };
        self
    }
}
