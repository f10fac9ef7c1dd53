//! Power tool configuration.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Configuration for the power tool adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoeScriptConfig {
    /// Program to execute (the PoE script, or a wrapper such as `sudo`).
    pub program: PathBuf,
    /// Arguments placed before the command flags (e.g. the script path when
    /// `program` is an interpreter or `sudo`).
    pub args: Vec<String>,
    /// Treat a non-zero exit status as a failure instead of only logging it.
    pub check_exit_status: bool,
    /// Upper bound on a single invocation, in seconds. Unset means no limit.
    pub timeout_secs: Option<u64>,
}

impl PoeScriptConfig {
    /// The invocation time limit, if any.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PoeScriptConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from("./poe.sh"),
            args: Vec::new(),
            check_exit_status: false,
            timeout_secs: None,
        }
    }
}
