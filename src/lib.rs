// cargo watch -x 'fmt' -x 'run'  // 'run -- --some-arg'

pub mod config;
pub mod diag;
pub mod error;
pub mod input;
pub mod models;
pub mod nsx;
pub mod orchestrator;

pub use config::Config;
pub use error::{Error, Result};
pub use orchestrator::RunSummary;

use diag::DebugLog;
use input::RowReader;
use nsx::ManagerClient;
use orchestrator::Orchestrator;

/// Process the configured CSV file against the configured manager.
///
/// Truncates the debug response file, opens the input, and drives every row
/// in order. Returns the per-run counters; callers turn a non-zero `failed`
/// count into a non-zero exit code.
pub fn run(cfg: &Config) -> Result<RunSummary> {
    let debug_log = DebugLog::create(config::RESPONSE_FILE)?;
    let client = ManagerClient::new(cfg)?;
    let rows = RowReader::open(&cfg.input)?;

    log::info!(
        "#Start run() manager={} scope={} input={}",
        cfg.manager,
        cfg.scope,
        cfg.input.display()
    );
    Orchestrator::new(&client, &debug_log, cfg.debug).run(rows)
}
