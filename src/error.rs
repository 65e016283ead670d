use thiserror::Error;

/// Conditions the host has to tell apart from plain failures.
///
/// Everything else travels as a bare `anyhow::Error`; these variants are
/// downcast at the command boundary so the host can surface a proper
/// message (unknown state, unreachable state) or abort (malformed history,
/// broken layout invariant).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RundoError {
    /// The requested undo state does not exist in the current node set.
    #[error("no undo state with number {0}")]
    NotFound(u64),

    /// No parent chain connects the two requested states.
    #[error("no path from state {from} to state {to}")]
    NoPath { from: u64, to: u64 },

    /// The raw history description is unusable. No partial tree is kept.
    #[error("malformed undo history: {0}")]
    Malformed(String),

    /// The open-column count moved by more than one in a single layout
    /// step. Only multi-parent input can do this; it is a fatal invariant
    /// break, not a recoverable condition.
    #[error("open column count changed by {0} in one step")]
    ColumnBound(isize),
}
