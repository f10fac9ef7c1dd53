//! Power tool adapter error types.

use std::num::ParseIntError;
use std::string::FromUtf8Error;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;

use poegate_domain::error::{PoeGateError, ToolError, ToolFailure};

/// Errors specific to the power tool adapter.
#[derive(Debug, thiserror::Error)]
pub enum PoeScriptError {
    /// The program could not be started.
    #[error("failed to spawn {}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the program or reading its pipes failed.
    #[error("failed to collect power tool output")]
    Io(#[source] std::io::Error),

    /// The program ran longer than the configured limit and was killed.
    #[error("power tool did not finish within {}s", .after.as_secs())]
    Timeout { after: Duration },

    /// The program exited unsuccessfully (only when exit status is checked).
    #[error("power tool exited with {status}: {stderr}")]
    ExitStatus { status: ExitStatus, stderr: String },

    /// The program printed something that is not UTF-8.
    #[error("power tool output is not valid UTF-8")]
    Encoding(#[from] FromUtf8Error),

    /// A query answered with a line that is not a device record.
    #[error("unexpected power tool output")]
    Parse(#[from] LineParseError),

    /// A listing contained a line that is not a device record.
    #[error("unexpected power tool listing")]
    Listing(#[from] ListingParseError),
}

/// Details about why a single output line could not be parsed.
#[derive(Debug, thiserror::Error)]
pub enum LineParseError {
    /// The line does not split into `<id> <status> <hostname>`.
    #[error("expected 3 space-separated fields, found {found}")]
    FieldCount { found: usize },

    /// The first field is not a port number.
    #[error("invalid device id {token:?}")]
    InvalidId {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// A listing line that failed to parse, with its 1-based line number.
#[derive(Debug, thiserror::Error)]
#[error("line {line}")]
pub struct ListingParseError {
    pub line: usize,
    #[source]
    pub source: LineParseError,
}

impl PoeScriptError {
    /// Classification used by callers that do not know this adapter.
    #[must_use]
    pub fn failure(&self) -> ToolFailure {
        match self {
            Self::Spawn { .. } | Self::Io(_) => ToolFailure::Unavailable,
            Self::Timeout { .. } => ToolFailure::TimedOut,
            Self::ExitStatus { .. } => ToolFailure::NonZeroExit,
            Self::Encoding(_) | Self::Parse(_) | Self::Listing(_) => ToolFailure::MalformedOutput,
        }
    }
}

impl From<PoeScriptError> for PoeGateError {
    fn from(err: PoeScriptError) -> Self {
        Self::Tool(ToolError::new(err.failure(), err))
    }
}
