//! Error types for the host-facing API.
//!
//! Stage functions are total: structural problems in a declaration make it
//! drop out of generation, and usage problems become diagnostics. Only
//! cancellation and misuse of the host API surface as errors.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors returned by host-facing entry points.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The caller's cancellation token fired; no partial result was produced.
    #[error("analysis cancelled")]
    Cancelled,

    /// A declaration key that was never registered with the host.
    #[error("unknown declaration: {0}")]
    UnknownDeclaration(String),
}

/// Result alias for host-facing entry points.
pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;

/// Bail out with [`AnalysisError::Cancelled`] once `cancel` has fired.
pub(crate) fn check_cancelled(cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(AnalysisError::Cancelled);
    }
    Ok(())
}
