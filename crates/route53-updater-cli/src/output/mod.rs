//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use route53_updater_core::{ChangeInfo, ChangeRequest};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// Render the provider's answer to an upsert.
pub fn render_change_info(info: &ChangeInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(info)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(info)?.trim_end().to_string()),
        OutputFormat::Pretty => {
            let mut out = String::new();
            writeln!(out, "{} {}", "Change:".bold(), info.id.cyan())?;
            write!(out, "{} {}", "Status:".bold(), info.status.as_str().yellow())?;
            if let Some(submitted) = info.submitted_at {
                write!(out, "\n{} {}", "Submitted:".bold(), submitted.to_rfc3339())?;
            }
            if let Some(comment) = &info.comment {
                write!(out, "\n{} {}", "Comment:".bold(), comment)?;
            }
            Ok(out)
        }
    }
}

/// Render a change that was built but not submitted.
pub fn render_plan(change: &ChangeRequest, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(change)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(change)?.trim_end().to_string()),
        OutputFormat::Pretty => Ok(format!(
            "{} UPSERT {} {} {} {} in zone {}",
            "Would submit:".bold(),
            change.hostname().green(),
            change.ttl(),
            change.record_type().yellow(),
            change.target().cyan(),
            change.zone_id()
        )),
    }
}
