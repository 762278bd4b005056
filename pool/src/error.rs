use thiserror::Error;

/// Caller-side contract violations.
///
/// The pool itself reports absence as `None` — an empty pool or a missing
/// key is a valid answer, not a failure. These variants exist so call sites
/// that *expected* a value present can surface the violation distinctly
/// instead of unwrapping.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    #[error("no work available for dispatch")]
    NoWorkAvailable,

    #[error("no proof recorded for the requested work")]
    ProofNotFound,
}
