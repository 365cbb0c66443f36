use route53_updater_core::Result;
use tracing::{debug, info};

use crate::MetadataClient;

/// Decide the value the record should point at.
///
/// An explicit, non-empty value is returned as-is without touching the
/// network; otherwise the public hostname is read from instance metadata.
pub async fn resolve_target(explicit: Option<&str>, metadata: &MetadataClient) -> Result<String> {
    if let Some(value) = explicit.filter(|v| !v.is_empty()) {
        debug!(value, "using explicit resource record value");
        return Ok(value.to_string());
    }

    info!("no resource record value given, asking instance metadata");
    metadata.public_hostname().await
}
