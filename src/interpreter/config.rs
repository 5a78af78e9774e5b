//! Run configuration
//!
//! Every capacity the engine relies on is an explicit field here so tests can
//! shrink them. [`Config::default`] matches the limits in
//! [`constants`](super::constants).

use super::constants::{MAX_BRACKET_PAIRS, MAX_INSTRUCTIONS, OUTPUT_CAPACITY, TAPE_SIZE};
use super::errors::InterpreterError;

/// Limits and dialect switches for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of tape cells
    pub tape_size: usize,

    /// Maximum number of bracket pairs accepted by the matcher
    pub bracket_capacity: usize,

    /// Instruction ceiling; reaching it stops the run
    pub instruction_limit: u64,

    /// Output capacity; one slot is kept free so at most `output_capacity - 1`
    /// bytes are produced, except that a capacity of 1 still takes one byte
    pub output_capacity: usize,

    /// Mask emitted bytes to 7 bits
    pub ascii_only: bool,

    /// Treat `0` as "clear current cell"
    pub set_zero_extension: bool,
}

impl Config {
    /// Default configuration with a caller-chosen output capacity
    pub fn with_output_capacity(output_capacity: usize) -> Self {
        Config {
            output_capacity,
            ..Config::default()
        }
    }

    /// Check that every limit is usable
    pub fn validate(&self) -> Result<(), InterpreterError> {
        if self.tape_size == 0 {
            return Err(InterpreterError::InvalidConfig {
                message: "tape size must be at least 1".to_string(),
            });
        }
        if self.output_capacity == 0 {
            return Err(InterpreterError::InvalidConfig {
                message: "output capacity must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tape_size: TAPE_SIZE,
            bracket_capacity: MAX_BRACKET_PAIRS,
            instruction_limit: MAX_INSTRUCTIONS,
            output_capacity: OUTPUT_CAPACITY,
            ascii_only: true,
            set_zero_extension: false,
        }
    }
}
