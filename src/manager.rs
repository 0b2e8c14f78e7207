//! The version manager: owns the check endpoint, runs checks, reports outcomes

use std::sync::{Arc, OnceLock, RwLock};

use reqwest::Url;
use tokio::sync::oneshot;
use tracing::debug;

use crate::config::DEFAULT_CHECK_URL;
use crate::surface::{AmbientReporter, DisplaySurface};
use crate::version::compare::{CompareResult, compare_versions};
use crate::version::error::CheckError;
use crate::version::feed::{HttpUpdateFeed, UpdateFeed};
use crate::version::types::CheckResult;

/// Owns the check endpoint and the running version, and runs the
/// fetch, compare, and report pipeline.
///
/// One instance per process is the expected shape ([`VersionManager::shared`]),
/// but nothing prevents constructing more for tests or for embedding with a
/// custom [`UpdateFeed`].
pub struct VersionManager {
    current_version: String,
    check_url: RwLock<String>,
    feed: Arc<dyn UpdateFeed>,
}

impl VersionManager {
    /// Process-wide instance, created on first access.
    ///
    /// Construction only wires the HTTP feed and reads the build version;
    /// no network I/O happens until a check is issued.
    pub fn shared() -> &'static VersionManager {
        static SHARED: OnceLock<VersionManager> = OnceLock::new();
        SHARED.get_or_init(VersionManager::new)
    }

    /// Creates a manager with the HTTP feed, the build's own version, and
    /// the built-in check endpoint.
    pub fn new() -> Self {
        Self::with_feed(
            Arc::new(HttpUpdateFeed::default()),
            env!("CARGO_PKG_VERSION"),
        )
    }

    /// Creates a manager with a custom feed and running version
    pub fn with_feed(feed: Arc<dyn UpdateFeed>, current_version: impl Into<String>) -> Self {
        Self {
            current_version: current_version.into(),
            check_url: RwLock::new(DEFAULT_CHECK_URL.to_string()),
            feed,
        }
    }

    /// Version of the running build
    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    /// Points subsequent checks at a different version metadata endpoint.
    ///
    /// The value is stored as-is; well-formedness is validated when a check
    /// runs, where a bad value surfaces as `Failed(Configuration)`. A check
    /// already in flight keeps the endpoint it captured at its own start.
    pub fn set_check_url(&self, url: impl Into<String>) {
        let mut endpoint = self.check_url.write().expect("check_url lock poisoned");
        *endpoint = url.into();
    }

    /// Fire-and-forget check reported through the ambient path.
    ///
    /// Snapshots the endpoint, spawns the fetch, and returns immediately.
    /// The outcome is logged via [`AmbientReporter`] and also delivered on
    /// the returned channel for callers that want to observe it (dropping
    /// the receiver is fine). Concurrent calls each run an independent
    /// check; completion order across calls is unspecified.
    pub fn check_for_updates(&self) -> oneshot::Receiver<CheckResult> {
        self.spawn_check(Arc::new(AmbientReporter))
    }

    /// Same pipeline, with the result anchored to `surface`.
    ///
    /// Surface liveness is checked when the result arrives; a surface that
    /// closed while the fetch was in flight is skipped without error, and
    /// the returned channel still resolves.
    pub fn check_for_updates_in(
        &self,
        surface: Arc<dyn DisplaySurface>,
    ) -> oneshot::Receiver<CheckResult> {
        self.spawn_check(surface)
    }

    fn spawn_check(&self, surface: Arc<dyn DisplaySurface>) -> oneshot::Receiver<CheckResult> {
        // Captured before the task starts; reconfiguration after this point
        // affects only later checks.
        let endpoint = self
            .check_url
            .read()
            .expect("check_url lock poisoned")
            .clone();
        let current = self.current_version.clone();
        let feed = self.feed.clone();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let result = run_check(feed.as_ref(), &endpoint, &current).await;

            if surface.is_valid() {
                surface.present(&result);
            } else {
                debug!("display surface went away mid-check, dropping presentation");
            }

            let _ = tx.send(result);
        });

        rx
    }
}

impl Default for VersionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// One check: validate the endpoint, fetch, compare.
///
/// Always produces exactly one `CheckResult`; every failure mode folds into
/// `Failed` rather than propagating.
async fn run_check(feed: &dyn UpdateFeed, endpoint: &str, current: &str) -> CheckResult {
    let endpoint = match parse_endpoint(endpoint) {
        Ok(url) => url,
        Err(reason) => return CheckResult::Failed(reason),
    };

    let info = match feed.fetch_latest(endpoint).await {
        Ok(info) => info,
        Err(reason) => return CheckResult::Failed(reason),
    };

    match compare_versions(current, &info.version) {
        Ok(CompareResult::Outdated) => CheckResult::UpdateAvailable {
            current: current.to_string(),
            latest: info.version,
            notes: info.notes,
            download_url: info.url,
        },
        Ok(_) => CheckResult::UpToDate {
            current: current.to_string(),
        },
        Err(reason) => CheckResult::Failed(reason),
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url, CheckError> {
    if endpoint.is_empty() {
        return Err(CheckError::Configuration(
            "check endpoint is empty".to_string(),
        ));
    }

    Url::parse(endpoint).map_err(|e| {
        CheckError::Configuration(format!("invalid check endpoint {endpoint:?}: {e}"))
    })
}
