//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PoeGateError`] via `From`. Adapter errors are boxed inside
//! [`ToolError`] together with a [`ToolFailure`] classification, so callers
//! can react to the kind of failure without depending on the adapter crate.

use std::fmt;

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum PoeGateError {
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("power tool error")]
    Tool(#[from] ToolError),
}

/// A lookup did not match anything.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// What went wrong while talking to the external power tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFailure {
    /// The tool could not be started or its pipes could not be read.
    Unavailable,
    /// The tool ran but printed something that is not a device record.
    MalformedOutput,
    /// The tool exited with a non-zero status.
    NonZeroExit,
    /// The tool did not finish within the configured time limit.
    TimedOut,
}

impl fmt::Display for ToolFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("unavailable"),
            Self::MalformedOutput => f.write_str("malformed output"),
            Self::NonZeroExit => f.write_str("non-zero exit"),
            Self::TimedOut => f.write_str("timed out"),
        }
    }
}

/// Failure reported by a power controller adapter.
#[derive(Debug, thiserror::Error)]
#[error("power tool {kind}")]
pub struct ToolError {
    pub kind: ToolFailure,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl ToolError {
    /// Wrap an adapter error with its classification.
    pub fn new(
        kind: ToolFailure,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }
}
