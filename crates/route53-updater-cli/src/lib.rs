//! # route53-updater
//!
//! Point a Route 53 record at the host this runs on.
//!
//! ## Flow
//!
//! 1. Read flags, environment and the optional config file into [`cli::Settings`]
//! 2. Use `-rr` as the record value, or ask instance metadata for the public hostname
//! 3. Submit one `UPSERT` to Route 53 and print the change info
//!
//! Flags are accepted in both `-zoneid Z1` and `--zoneid Z1` form.

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
