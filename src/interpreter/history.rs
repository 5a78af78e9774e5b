//! Step-through history over a single run.
//!
//! A [`Timeline`] owns a live [`Interpreter`] that sits at the furthest step
//! reached so far, plus one [`Snapshot`] per step. Moving backward restores an
//! older snapshot. Moving forward replays a recorded snapshot when one exists
//! and otherwise executes the next instruction on the live interpreter and
//! records it.
//!
//! The run is deterministic, so replayed and freshly executed steps always
//! agree.

use crate::interpreter::config::Config;
use crate::interpreter::engine::{Interpreter, StopReason};
use crate::interpreter::errors::InterpreterError;
use crate::snapshot::{Snapshot, SnapshotManager};

/// Byte that marks a breakpoint in the source
pub const BREAKPOINT: u8 = b'!';

pub struct Timeline {
    /// Live interpreter at the newest recorded step
    interpreter: Interpreter,

    snapshot_manager: SnapshotManager,

    /// Index of `current` in the history
    history_position: usize,

    /// State being displayed
    current: Snapshot,
}

impl Timeline {
    /// Start a timeline at the interpreter's current state
    pub fn new(
        interpreter: Interpreter,
        snapshot_memory_limit: usize,
    ) -> Result<Self, InterpreterError> {
        let mut snapshot_manager = SnapshotManager::new(snapshot_memory_limit);
        let current = Snapshot::capture(&interpreter);
        snapshot_manager
            .push(current.clone())
            .map_err(|_| InterpreterError::SnapshotLimitExceeded {
                current: snapshot_manager.memory_usage(),
                limit: snapshot_manager.memory_limit(),
            })?;

        Ok(Timeline {
            interpreter,
            snapshot_manager,
            history_position: 0,
            current,
        })
    }

    /// Restore the snapshot at `index` as the displayed state
    fn restore_snapshot(&mut self, index: usize) -> Result<(), InterpreterError> {
        let snapshot = self.snapshot_manager.get(index).cloned().ok_or_else(|| {
            InterpreterError::HistoryOperationFailed {
                message: "Snapshot not found in history".to_string(),
            }
        })?;
        self.current = snapshot;
        self.history_position = index;
        Ok(())
    }

    /// Execute one more instruction on the live interpreter and record it
    fn take_snapshot(&mut self) -> Result<(), InterpreterError> {
        if self.interpreter.is_finished() {
            return Err(InterpreterError::HistoryOperationFailed {
                message: "No more steps available (execution finished)".to_string(),
            });
        }

        // Check the budget before stepping so the live interpreter never runs
        // ahead of the recorded history
        let size = self.current.estimated_size();
        if !self.snapshot_manager.has_room_for(size) {
            return Err(InterpreterError::SnapshotLimitExceeded {
                current: self.snapshot_manager.memory_usage(),
                limit: self.snapshot_manager.memory_limit(),
            });
        }

        self.interpreter.step();
        let snapshot = Snapshot::capture(&self.interpreter);
        self.snapshot_manager
            .push(snapshot)
            .map_err(|_| InterpreterError::SnapshotLimitExceeded {
                current: self.snapshot_manager.memory_usage(),
                limit: self.snapshot_manager.memory_limit(),
            })
    }

    /// Step forward in execution (replay history, or execute the next instruction)
    pub fn step_forward(&mut self) -> Result<(), InterpreterError> {
        let next = self.history_position + 1;
        if next >= self.snapshot_manager.len() {
            self.take_snapshot()?;
        }
        self.restore_snapshot(next)
    }

    /// Step backward in execution (restore previous snapshot)
    pub fn step_backward(&mut self) -> Result<(), InterpreterError> {
        if self.history_position == 0 {
            return Err(InterpreterError::HistoryOperationFailed {
                message: "Already at the beginning of execution".to_string(),
            });
        }
        self.restore_snapshot(self.history_position - 1)
    }

    /// Rewind to the beginning of execution history
    pub fn rewind_to_start(&mut self) -> Result<(), InterpreterError> {
        self.restore_snapshot(0)
    }

    /// Step forward until the run stops. Returns the number of steps taken.
    pub fn run_to_end(&mut self) -> Result<usize, InterpreterError> {
        let mut stepped = 0;
        while !self.is_at_end() {
            self.step_forward()?;
            stepped += 1;
        }
        Ok(stepped)
    }

    /// Step forward at least once, then keep going until the next instruction
    /// is a breakpoint or the run stops. Returns the number of steps taken.
    pub fn continue_to_breakpoint(&mut self) -> Result<usize, InterpreterError> {
        self.step_forward()?;
        let mut stepped = 1;
        while !self.is_at_end() && !self.at_breakpoint() {
            self.step_forward()?;
            stepped += 1;
        }
        Ok(stepped)
    }

    /// Whether the displayed state is the last state of a stopped run
    pub fn is_at_end(&self) -> bool {
        self.current.stop_reason.is_some()
    }

    /// Whether the next instruction to execute is a breakpoint
    pub fn at_breakpoint(&self) -> bool {
        self.source().get(self.current.ip) == Some(&BREAKPOINT)
    }

    // ========== Getter methods for UI ==========

    pub fn current(&self) -> &Snapshot {
        &self.current
    }

    /// Output produced up to the displayed step
    pub fn output(&self) -> &[u8] {
        let produced = self.interpreter.output();
        &produced[..self.current.output_len.min(produced.len())]
    }

    pub fn source(&self) -> &[u8] {
        self.interpreter.source()
    }

    pub fn input(&self) -> &[u8] {
        self.interpreter.input()
    }

    pub fn config(&self) -> &Config {
        self.interpreter.config()
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.current.stop_reason
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// Whether the live interpreter has finished, i.e. the history is complete
    pub fn is_complete(&self) -> bool {
        self.interpreter.is_finished()
    }

    pub fn memory_usage(&self) -> usize {
        self.snapshot_manager.memory_usage()
    }
}
