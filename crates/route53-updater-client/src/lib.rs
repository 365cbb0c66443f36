//! Clients for the two remote collaborators of the updater.
//!
//! - [`MetadataClient`] reads the instance's public hostname from the
//!   link-local metadata service
//! - [`Route53Updater`] turns a [`ChangeRequest`] into a single `UPSERT` and
//!   submits it through a [`RecordSetApi`]

#![doc(html_root_url = "https://docs.rs/route53-updater-client/0.1.0")]

mod config;
mod metadata;
mod resolver;
pub mod route53;

pub use config::*;
pub use metadata::{
    MetadataClient, MetadataClientBuilder, DEFAULT_METADATA_URL, PUBLIC_HOSTNAME_PATH,
};
pub use resolver::resolve_target;
pub use route53::{build_change_batch, connect, RecordSetApi, Route53Api, Route53Updater};
pub use route53_updater_core::{ChangeInfo, ChangeRequest, Result, UpdaterError};
