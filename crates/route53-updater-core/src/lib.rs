//! Core types and errors for the Route 53 record updater.
//!
//! This crate provides the foundational types shared by the client and CLI:
//!
//! - **Types**: the immutable [`ChangeRequest`] describing one upsert and the
//!   [`ChangeInfo`] the provider hands back
//! - **Errors**: every failure path as an [`UpdaterError`]
//!
//! # Example
//!
//! ```rust
//! use route53_updater_core::{ChangeRequest, Result};
//!
//! fn plan() -> Result<ChangeRequest> {
//!     ChangeRequest::builder()
//!         .zone_id("Z1")
//!         .hostname("foo.example.com")
//!         .domain("example.com")
//!         .target("1.2.3.4")
//!         .record_type("A")
//!         .build()
//! }
//!
//! let change = plan().unwrap();
//! assert_eq!(change.ttl(), 60);
//! ```

#![doc(html_root_url = "https://docs.rs/route53-updater-core/0.1.0")]

mod error;
pub mod types;

pub use error::{Result, UpdaterError};
pub use types::*;
