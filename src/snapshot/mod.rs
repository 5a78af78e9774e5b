// Snapshot management for reverse execution

use crate::interpreter::engine::{Interpreter, StopReason};
use crate::memory::tape::Tape;
use std::mem;

/// Snapshot of execution state after one step.
///
/// Output is append-only, so only its length is recorded; the bytes live in
/// the interpreter that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tape: Tape,
    pub ip: usize,
    pub input_cursor: usize,
    pub output_len: usize,
    pub instructions: u64,
    pub stop_reason: Option<StopReason>,
}

impl Snapshot {
    /// Copy the observable state of `interpreter`
    pub fn capture(interpreter: &Interpreter) -> Self {
        Snapshot {
            tape: interpreter.tape().clone(),
            ip: interpreter.ip(),
            input_cursor: interpreter.input_cursor(),
            output_len: interpreter.output().len(),
            instructions: interpreter.instructions(),
            stop_reason: interpreter.stop_reason(),
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        mem::size_of::<Snapshot>() + self.tape.len()
    }
}

/// Manages execution history for reverse execution
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Whether a snapshot of `size` bytes still fits in the budget
    pub fn has_room_for(&self, size: usize) -> bool {
        self.current_memory + size <= self.max_memory
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if !self.has_room_for(snapshot_size) {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}
