//! Merge flags, environment and config file into one immutable value.

use route53_updater_client::{ProviderConfig, DEFAULT_METADATA_URL};
use route53_updater_core::{
    ChangeRequest, Result, UpdaterError, DEFAULT_RECORD_TYPE, DEFAULT_TTL,
};
use std::time::Duration;

use super::args::Cli;
use crate::config::Config;
use crate::output::OutputFormat;

/// Default metadata request timeout in seconds
pub const DEFAULT_METADATA_TIMEOUT_SECS: u64 = 2;

/// Default Route 53 request timeout in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Everything one run needs, fixed at startup.
///
/// Precedence is flag (or its environment variable) over config file over
/// built-in default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Hosted zone ID
    pub zone_id: String,

    /// Record name
    pub hostname: String,

    /// Parent domain
    pub domain: String,

    /// Explicit record value; `None` means ask instance metadata
    pub rr: Option<String>,

    /// Record TTL in seconds
    pub ttl: i64,

    /// Record type
    pub record_type: String,

    /// Instance metadata base URL
    pub metadata_url: String,

    /// Instance metadata request timeout
    pub metadata_timeout: Duration,

    /// Route 53 client settings
    pub provider: ProviderConfig,

    /// Output format
    pub output: OutputFormat,

    /// Build the change but do not submit it
    pub dry_run: bool,
}

impl Settings {
    /// Resolve settings, failing if zone ID, hostname or domain is missing.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let zone_id = required(non_empty(&cli.zone_id).or(non_empty(&config.zone_id)), "-zoneid")?;
        let hostname = required(non_empty(&cli.hostname), "-hostname")?;
        let domain = required(non_empty(&cli.domain).or(non_empty(&config.domain)), "-domain")?;

        let record_type = non_empty(&cli.record_type)
            .or(non_empty(&config.record_type))
            .unwrap_or(DEFAULT_RECORD_TYPE)
            .to_string();

        let metadata_timeout = cli
            .metadata_timeout
            .or(config.metadata_timeout_secs)
            .unwrap_or(DEFAULT_METADATA_TIMEOUT_SECS);

        let provider_timeout = cli
            .provider_timeout
            .or(config.provider_timeout_secs)
            .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS);

        let mut provider = ProviderConfig::new()
            .timeout(Duration::from_secs(provider_timeout))
            .max_attempts(config.max_attempts.unwrap_or(1));

        if let Some(region) = non_empty(&cli.region).or(non_empty(&config.region)) {
            provider = provider.region(region);
        }

        if let Some(url) = non_empty(&cli.endpoint_url).or(non_empty(&config.endpoint_url)) {
            provider = provider.endpoint_url(url);
        }

        Ok(Self {
            zone_id: zone_id.to_string(),
            hostname: hostname.to_string(),
            domain: domain.to_string(),
            rr: non_empty(&cli.rr).map(String::from),
            ttl: cli.ttl.or(config.ttl).unwrap_or(DEFAULT_TTL),
            record_type,
            metadata_url: non_empty(&cli.metadata_url)
                .or(non_empty(&config.metadata_url))
                .unwrap_or(DEFAULT_METADATA_URL)
                .to_string(),
            metadata_timeout: Duration::from_secs(metadata_timeout),
            provider,
            output: cli.output.or(config.output_format).unwrap_or_default(),
            dry_run: cli.dry_run,
        })
    }

    /// Build the change request once the record value is known
    pub fn change_request(&self, target: impl Into<String>) -> Result<ChangeRequest> {
        ChangeRequest::builder()
            .zone_id(&self.zone_id)
            .hostname(&self.hostname)
            .domain(&self.domain)
            .target(target)
            .ttl(self.ttl)
            .record_type(&self.record_type)
            .build()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn required<'a>(value: Option<&'a str>, flag: &'static str) -> Result<&'a str> {
    value.ok_or(UpdaterError::MissingOption(flag))
}
