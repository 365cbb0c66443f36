use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of a submitted change, as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeStatus {
    /// Not yet propagated to all authoritative servers
    Pending,
    /// Propagated everywhere
    Insync,
    /// Anything the provider adds later
    #[serde(untagged)]
    Other(String),
}

impl ChangeStatus {
    /// Parse a provider status string
    #[must_use]
    pub fn from_provider(status: &str) -> Self {
        match status {
            "PENDING" => Self::Pending,
            "INSYNC" => Self::Insync,
            other => Self::Other(other.to_string()),
        }
    }

    /// The provider's spelling of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Insync => "INSYNC",
            Self::Other(s) => s,
        }
    }
}

impl std::fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider response to an upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInfo {
    /// Change identifier, e.g. `/change/C2682N5HXP0BZ4`
    pub id: String,

    /// Propagation status
    pub status: ChangeStatus,

    /// When the provider accepted the change
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,

    /// Comment attached to the change batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl ChangeInfo {
    /// Change ID without the `/change/` prefix
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.trim_start_matches("/change/")
    }

    /// Returns true once the change is live on every name server
    #[must_use]
    pub fn is_insync(&self) -> bool {
        self.status == ChangeStatus::Insync
    }
}
