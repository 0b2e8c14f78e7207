//! Remote version metadata and check outcomes

use serde::Deserialize;

use crate::version::error::CheckError;

/// Version metadata returned by the check endpoint.
///
/// Only `version` is required; unknown fields in the payload are ignored.
/// Lives only for the duration of the check that fetched it.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RemoteVersionInfo {
    /// Latest published version
    pub version: String,
    /// Release notes or changelog excerpt
    #[serde(default)]
    pub notes: Option<String>,
    /// Download reference for the release
    #[serde(default)]
    pub url: Option<String>,
}

/// Outcome of a single update check.
///
/// Each check invocation produces exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The running version is the latest published one
    UpToDate { current: String },
    /// A newer version is published
    UpdateAvailable {
        current: String,
        latest: String,
        notes: Option<String>,
        download_url: Option<String>,
    },
    /// The check could not be completed
    Failed(CheckError),
}

impl CheckResult {
    /// One-line user-facing description of the outcome.
    ///
    /// Failures render as "unable to check for updates" with the reason,
    /// never as a claimed up-to-date or outdated state.
    pub fn summary(&self) -> String {
        match self {
            CheckResult::UpToDate { current } => {
                format!("up to date (running {current})")
            }
            CheckResult::UpdateAvailable {
                current, latest, ..
            } => {
                format!("version {latest} is available (running {current})")
            }
            CheckResult::Failed(reason) => {
                format!("unable to check for updates: {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_info_ignores_unknown_fields() {
        let info: RemoteVersionInfo = serde_json::from_str(
            r#"{"version": "3.1.0", "notes": "fixes", "channel": "stable", "build": 42}"#,
        )
        .unwrap();

        assert_eq!(info.version, "3.1.0");
        assert_eq!(info.notes.as_deref(), Some("fixes"));
        assert_eq!(info.url, None);
    }

    #[test]
    fn remote_info_without_version_fails_to_parse() {
        let result =
            serde_json::from_str::<RemoteVersionInfo>(r#"{"notes": "no version here"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn failed_summary_never_claims_a_version_state() {
        let summary =
            CheckResult::Failed(CheckError::Network("timed out".to_string())).summary();

        assert!(summary.starts_with("unable to check for updates"));
        assert!(!summary.contains("up to date"));
    }
}
