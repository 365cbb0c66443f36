//! Route 53 record upserts.

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_route53::config::retry::RetryConfig;
use aws_sdk_route53::config::timeout::TimeoutConfig;
use aws_sdk_route53::config::Region;
use aws_sdk_route53::error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use aws_sdk_route53::Client;
use chrono::DateTime;
use route53_updater_core::{ChangeInfo, ChangeRequest, ChangeStatus, Result, UpdaterError};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{ProviderConfig, DEFAULT_REGION};

/// The record-management operation the updater needs from a provider
#[async_trait]
pub trait RecordSetApi: Send + Sync {
    /// Submit a change batch against a hosted zone
    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: ChangeBatch,
    ) -> Result<ChangeInfo>;
}

/// Build the batch for `change`: one `UPSERT` of one record set holding one record.
pub fn build_change_batch(change: &ChangeRequest) -> Result<ChangeBatch> {
    let record = ResourceRecord::builder()
        .value(change.target())
        .build()
        .map_err(invalid_change)?;

    let record_set = ResourceRecordSet::builder()
        .name(change.hostname())
        .r#type(RrType::from(change.record_type()))
        .ttl(change.ttl())
        .resource_records(record)
        .build()
        .map_err(invalid_change)?;

    let upsert = Change::builder()
        .action(ChangeAction::Upsert)
        .resource_record_set(record_set)
        .build()
        .map_err(invalid_change)?;

    ChangeBatch::builder()
        .changes(upsert)
        .build()
        .map_err(invalid_change)
}

fn invalid_change(err: BuildError) -> UpdaterError {
    UpdaterError::InvalidChange(err.to_string())
}

/// Submits upserts through a [`RecordSetApi`]
pub struct Route53Updater<A> {
    api: A,
}

impl<A: RecordSetApi> Route53Updater<A> {
    /// Wrap a provider API
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// The underlying provider API
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Create or replace the record described by `change`
    pub async fn upsert(&self, change: &ChangeRequest) -> Result<ChangeInfo> {
        let batch = build_change_batch(change)?;

        info!(
            zone = change.zone_id(),
            name = change.hostname(),
            record_type = change.record_type(),
            ttl = change.ttl(),
            value = change.target(),
            "submitting UPSERT"
        );

        let info = self
            .api
            .change_resource_record_sets(change.zone_id(), batch)
            .await?;

        debug!(id = %info.id, status = %info.status, "change accepted");
        Ok(info)
    }
}

/// [`RecordSetApi`] backed by the AWS SDK
#[derive(Clone, Debug)]
pub struct Route53Api {
    client: Client,
    timeout: Duration,
}

impl Route53Api {
    /// Wrap an already configured SDK client.
    ///
    /// `timeout` is only used to describe timeout errors.
    pub const fn from_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl RecordSetApi for Route53Api {
    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: ChangeBatch,
    ) -> Result<ChangeInfo> {
        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| self.provider_error(e))?;

        let info = output.change_info().ok_or_else(|| UpdaterError::Provider {
            code: None,
            message: "response did not include change info".to_string(),
        })?;

        let submitted = info.submitted_at();
        Ok(ChangeInfo {
            id: info.id().to_string(),
            status: ChangeStatus::from_provider(info.status().as_str()),
            submitted_at: DateTime::from_timestamp(submitted.secs(), submitted.subsec_nanos()),
            comment: info.comment().map(String::from),
        })
    }
}

impl Route53Api {
    fn provider_error<E, R>(&self, err: SdkError<E, R>) -> UpdaterError
    where
        E: ProvideErrorMetadata + std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        if let Some(service) = err.as_service_error() {
            return UpdaterError::Provider {
                code: service.code().map(String::from),
                message: service
                    .message()
                    .map_or_else(|| DisplayErrorContext(service).to_string(), String::from),
            };
        }

        if matches!(err, SdkError::TimeoutError(_)) {
            return UpdaterError::Timeout(self.timeout);
        }

        UpdaterError::Provider {
            code: None,
            message: DisplayErrorContext(&err).to_string(),
        }
    }
}

/// Build a Route 53 client from the standard AWS credential and region chain
pub async fn connect(config: &ProviderConfig) -> Route53Api {
    let region = RegionProviderChain::first_try(config.region.clone().map(Region::new))
        .or_default_provider()
        .or_else(Region::new(DEFAULT_REGION));

    let shared = aws_config::defaults(BehaviorVersion::latest())
        .region(region)
        .load()
        .await;

    let mut builder = aws_sdk_route53::config::Builder::from(&shared)
        .retry_config(RetryConfig::standard().with_max_attempts(config.max_attempts))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(config.timeout)
                .build(),
        );

    if let Some(url) = &config.endpoint_url {
        debug!(endpoint = %url, "using Route 53 endpoint override");
        builder = builder.endpoint_url(url);
    }

    Route53Api::from_client(Client::from_conf(builder.build()), config.timeout)
}
