//! Command-line argument definitions using clap.

use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Long flags that may also be written with a single dash (`-zoneid Z1`).
pub const SINGLE_DASH_FLAGS: &[&str] = &["zoneid", "hostname", "domain", "ttl", "rr", "recordtype"];

/// Point a Route 53 record at this instance's public address
///
/// Without -rr the record value is the public hostname reported by the
/// instance metadata service. Credentials and region come from the standard
/// AWS chain (environment, shared config, instance profile).
#[derive(Parser, Debug)]
#[command(name = "route53-updater")]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// The Route 53 hosted zone ID to use
    #[arg(long = "zoneid", env = "ROUTE53_ZONE_ID", value_name = "ID")]
    pub zone_id: Option<String>,

    /// The hostname (record name) to update
    #[arg(long, env = "ROUTE53_HOSTNAME", value_name = "NAME")]
    pub hostname: Option<String>,

    /// The domain name the hostname belongs to
    #[arg(long, env = "ROUTE53_DOMAIN", value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// The TTL to use [default: 60]
    #[arg(long, env = "ROUTE53_TTL", value_name = "SECS", allow_negative_numbers = true)]
    pub ttl: Option<i64>,

    /// The resource record value to use instead of the instance's public hostname
    #[arg(long, env = "ROUTE53_RR", value_name = "VALUE")]
    pub rr: Option<String>,

    /// The record type to use, usually CNAME or A [default: CNAME]
    #[arg(long = "recordtype", env = "ROUTE53_RECORD_TYPE", value_name = "TYPE")]
    pub record_type: Option<String>,

    /// Config file (default: platform config dir, e.g. ~/.config/route53-updater/config.toml)
    #[arg(short, long, env = "ROUTE53_UPDATER_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// AWS region used for signing (Route 53 is global)
    #[arg(long, value_name = "REGION")]
    pub region: Option<String>,

    /// Route 53 endpoint override
    #[arg(long, env = "ROUTE53_ENDPOINT_URL", value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Instance metadata service base URL
    #[arg(long, env = "ROUTE53_METADATA_URL", value_name = "URL")]
    pub metadata_url: Option<String>,

    /// Timeout for the metadata request [default: 2]
    #[arg(long, value_name = "SECS")]
    pub metadata_timeout: Option<u64>,

    /// Timeout for the Route 53 request [default: 30]
    #[arg(long, value_name = "SECS")]
    pub provider_timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print the change that would be submitted, without submitting it
    #[arg(long)]
    pub dry_run: bool,
}

/// Rewrite single-dash long flags (`-zoneid=Z1`) to the double-dash form clap expects.
///
/// Only names in [`SINGLE_DASH_FLAGS`] are touched; everything after a bare
/// `--` is passed through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }

            match arg.to_str() {
                Some("--") => {
                    passthrough = true;
                    arg
                }
                Some(s) if is_single_dash_flag(s) => OsString::from(format!("-{s}")),
                _ => arg,
            }
        })
        .collect()
}

fn is_single_dash_flag(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };

    if rest.starts_with('-') {
        return false;
    }

    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    SINGLE_DASH_FLAGS.contains(&name)
}
