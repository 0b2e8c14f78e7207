//! Dotted-numeric version comparison

use std::cmp::Ordering;

use crate::version::error::CheckError;

/// Relation of the running version to the remote latest version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareResult {
    /// Both sides are equal after zero-padding
    UpToDate,
    /// The remote version is newer
    Outdated,
    /// The running version is ahead of the published one (dev build)
    Newer,
}

/// Parse a version string into its numeric components.
///
/// Accepts any number of dot-separated numeric components and a leading
/// `v`/`V` (release tags commonly carry one). Returns None when any
/// component is empty or non-numeric.
///
/// Examples:
/// - "1.2.3" -> [1, 2, 3]
/// - "v2.0" -> [2, 0]
/// - "1.2.3-beta" -> None
pub fn parse_components(version: &str) -> Option<Vec<u64>> {
    let version = version.strip_prefix(['v', 'V']).unwrap_or(version);
    version
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect()
}

/// Compare the running version against the remote latest.
///
/// Components are compared left to right; the shorter sequence is
/// zero-padded to the length of the longer one, so "2.0" and "2.0.0" are
/// equal. Either side failing to parse is a parse error, never a silent
/// "up to date".
pub fn compare_versions(current: &str, remote: &str) -> Result<CompareResult, CheckError> {
    let mut ours = parse_components(current).ok_or_else(|| {
        CheckError::Parse(format!("unparseable current version: {current:?}"))
    })?;
    let mut theirs = parse_components(remote)
        .ok_or_else(|| CheckError::Parse(format!("unparseable remote version: {remote:?}")))?;

    let len = ours.len().max(theirs.len());
    ours.resize(len, 0);
    theirs.resize(len, 0);

    Ok(match theirs.cmp(&ours) {
        Ordering::Greater => CompareResult::Outdated,
        Ordering::Equal => CompareResult::UpToDate,
        Ordering::Less => CompareResult::Newer,
    })
}
