use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use update_check::config::{UpdateConfig, data_dir};
use update_check::{CheckResult, HttpUpdateFeed, VersionManager};

#[derive(Parser)]
#[command(name = "update-check")]
#[command(version, about = "Check whether a newer application version is published")]
struct Cli {
    /// Version metadata endpoint to query
    #[arg(long)]
    url: Option<String>,

    /// Version to report as currently running
    #[arg(long)]
    current: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging()?;

    let config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            serde_json::from_str::<UpdateConfig>(&raw)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        }
        None => UpdateConfig::default(),
    };

    let manager = match cli.current.or(config.current_version) {
        Some(current) => VersionManager::with_feed(Arc::new(HttpUpdateFeed::default()), current),
        None => VersionManager::new(),
    };

    if let Some(url) = cli.url.or(config.check_url) {
        manager.set_check_url(url);
    }

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(manager.check_for_updates())
        .context("check task exited without reporting")?;

    match result {
        CheckResult::Failed(reason) => {
            anyhow::bail!("unable to check for updates: {reason}")
        }
        outcome => {
            println!("{}", outcome.summary());
            Ok(())
        }
    }
}

fn init_logging() -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let dir = data_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create data directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, "update-check.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
