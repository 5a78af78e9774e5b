//! Error types for the interpreter
//!
//! This module defines [`InterpreterError`], the hard failures that prevent a
//! run from starting or a history operation from completing.
//!
//! Running out of output space, hitting the instruction ceiling, or jumping
//! through an unmatched bracket are *not* errors: they end the run normally
//! and are reported through [`StopReason`](crate::interpreter::engine::StopReason).

use std::fmt;

/// Errors raised before or around execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    /// The program has more bracket pairs than the match table can hold
    TooManyBrackets { found: usize, limit: usize },

    /// A configuration value is outside its valid range
    InvalidConfig { message: String },

    /// Snapshot history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History/snapshot operation failed
    HistoryOperationFailed { message: String },
}

impl fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpreterError::TooManyBrackets { found, limit } => {
                write!(
                    f,
                    "Too many brackets: found at least {} pairs, limit is {}",
                    found, limit
                )
            }
            InterpreterError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
            InterpreterError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            InterpreterError::HistoryOperationFailed { message } => {
                write!(f, "History operation failed: {}", message)
            }
        }
    }
}

impl std::error::Error for InterpreterError {}
