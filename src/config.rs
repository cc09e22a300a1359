//! Run configuration.
//!
//! Built once in `main` from CLI flags plus environment and passed by
//! reference everywhere else; nothing reads globals after startup.

use std::path::PathBuf;
use std::time::Duration;

/// Managed object reference all listings and creates are scoped to.
pub const GLOBAL_SCOPE: &str = "globalroot-0";

/// Fixed relative path of the debug response file, truncated at startup.
pub const RESPONSE_FILE: &str = "debug-sgIPSets.xml";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Immutable settings for a single run.
#[derive(Debug, Clone)]
pub struct Config {
    /// NSX Manager hostname, FQDN or IP address.
    pub manager: String,
    /// API username.
    pub user: String,
    /// API password.
    pub password: String,
    /// Scope under which objects are listed and created.
    pub scope: String,
    /// Input CSV file.
    pub input: PathBuf,
    /// Echo resolved identifiers and keep successful create responses.
    pub debug: bool,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Config {
    pub fn new(manager: String, user: String, password: String, input: PathBuf) -> Config {
        Config {
            manager,
            user,
            password,
            scope: GLOBAL_SCOPE.to_string(),
            input,
            debug: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
