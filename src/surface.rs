//! Display surface abstraction for presenting check results
//!
//! The manager never talks to a concrete windowing type; it only needs to
//! know whether a surface is still alive and how to hand it a result.

#[cfg(test)]
use mockall::automock;

use tracing::{info, warn};

use crate::version::types::CheckResult;

/// Capability interface for anchoring a check result to a UI container
#[cfg_attr(test, automock)]
pub trait DisplaySurface: Send + Sync {
    /// Whether the surface can still present anything.
    ///
    /// Checked at delivery time, not at dispatch time; a surface that went
    /// away while the fetch was in flight makes the result be dropped
    /// silently.
    fn is_valid(&self) -> bool;

    /// Attach the result presentation (message plus optional action) to the
    /// surface
    fn present(&self, result: &CheckResult);
}

/// Ambient presentation path: reports through the log stream.
///
/// Used when the caller supplies no surface; always valid.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmbientReporter;

impl DisplaySurface for AmbientReporter {
    fn is_valid(&self) -> bool {
        true
    }

    fn present(&self, result: &CheckResult) {
        match result {
            CheckResult::Failed(reason) => warn!("unable to check for updates: {reason}"),
            outcome => info!("{}", outcome.summary()),
        }
    }
}
