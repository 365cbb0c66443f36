//! The update workflow: resolve the record value, then upsert it.

use anyhow::Result;
use route53_updater_client::{connect, resolve_target, MetadataClient, Route53Updater};
use route53_updater_core::{hostname_in_domain, is_common_record_type};
use tracing::{info, warn};

use super::settings::Settings;
use crate::output;

/// Run one update and return the rendered provider response.
pub async fn execute(settings: &Settings) -> Result<String> {
    check(settings);

    let metadata = MetadataClient::builder()
        .base_url(&settings.metadata_url)
        .timeout(settings.metadata_timeout)
        .build()?;

    let target = resolve_target(settings.rr.as_deref(), &metadata).await?;
    let change = settings.change_request(target)?;

    if settings.dry_run {
        info!("dry run, not submitting");
        return output::render_plan(&change, settings.output);
    }

    let updater = Route53Updater::new(connect(&settings.provider).await);
    let info = updater.upsert(&change).await?;

    output::render_change_info(&info, settings.output)
}

/// Warn about settings that are allowed but probably wrong.
fn check(settings: &Settings) {
    if !is_common_record_type(&settings.record_type) {
        warn!(
            record_type = %settings.record_type,
            "unusual record type for this tool, submitting anyway"
        );
    }

    if !hostname_in_domain(&settings.hostname, &settings.domain) {
        warn!(
            hostname = %settings.hostname,
            domain = %settings.domain,
            "hostname is not inside domain"
        );
    }
}
