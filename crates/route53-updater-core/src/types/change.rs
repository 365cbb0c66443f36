use serde::Serialize;

use crate::{Result, UpdaterError};

/// Default record TTL in seconds
pub const DEFAULT_TTL: i64 = 60;

/// Default record type
pub const DEFAULT_RECORD_TYPE: &str = "CNAME";

/// Record types this tool is normally used with.
///
/// Anything else is still submitted; the provider has the final word.
pub const COMMON_RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME"];

/// Returns true if `record_type` is one of [`COMMON_RECORD_TYPES`]
#[must_use]
pub fn is_common_record_type(record_type: &str) -> bool {
    COMMON_RECORD_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(record_type))
}

/// Returns true if `hostname` equals `domain` or is a name below it.
///
/// Trailing dots and ASCII case are ignored.
#[must_use]
pub fn hostname_in_domain(hostname: &str, domain: &str) -> bool {
    let host = hostname.trim_end_matches('.').to_ascii_lowercase();
    let domain = domain.trim_end_matches('.').to_ascii_lowercase();

    if domain.is_empty() {
        return false;
    }

    host == domain || host.ends_with(&format!(".{domain}"))
}

/// A single DNS upsert, fixed for the duration of one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeRequest {
    zone_id: String,
    hostname: String,
    domain: String,
    target: String,
    ttl: i64,
    record_type: String,
}

impl ChangeRequest {
    /// Create a builder
    #[must_use]
    pub fn builder() -> ChangeRequestBuilder {
        ChangeRequestBuilder::default()
    }

    /// Hosted zone the record lives in
    #[must_use]
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Record name to create or replace
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Parent domain
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Value the record will resolve to
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Record TTL in seconds
    #[must_use]
    pub const fn ttl(&self) -> i64 {
        self.ttl
    }

    /// Record type (A, CNAME, ...)
    #[must_use]
    pub fn record_type(&self) -> &str {
        &self.record_type
    }
}

/// Builder for a [`ChangeRequest`]
#[derive(Debug, Clone, Default)]
pub struct ChangeRequestBuilder {
    zone_id: Option<String>,
    hostname: Option<String>,
    domain: Option<String>,
    target: Option<String>,
    ttl: Option<i64>,
    record_type: Option<String>,
}

impl ChangeRequestBuilder {
    /// Set the hosted zone ID
    #[must_use]
    pub fn zone_id(mut self, zone_id: impl Into<String>) -> Self {
        self.zone_id = Some(zone_id.into());
        self
    }

    /// Set the record name
    #[must_use]
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    /// Set the parent domain
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the record value
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the TTL (default: 60)
    #[must_use]
    pub const fn ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the record type (default: CNAME); an empty value means the default
    #[must_use]
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    /// Validate and build the request
    pub fn build(self) -> Result<ChangeRequest> {
        let zone_id = required(self.zone_id, "zone ID")?;
        let hostname = required(self.hostname, "hostname")?;
        let domain = required(self.domain, "domain")?;
        let target = required(self.target, "target value")?;

        let record_type = self
            .record_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_RECORD_TYPE.to_string());

        Ok(ChangeRequest {
            zone_id,
            hostname,
            domain,
            target,
            ttl: self.ttl.unwrap_or(DEFAULT_TTL),
            record_type,
        })
    }
}

fn required(value: Option<String>, name: &'static str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(UpdaterError::MissingOption(name))
}
