// Default limits for the interpreter

/// Number of cells on the tape
pub const TAPE_SIZE: usize = 2048;

/// Maximum number of bracket pairs (matched or not) a program may contain
pub const MAX_BRACKET_PAIRS: usize = 512 * 2;

/// Hard ceiling on executed instructions per run
pub const MAX_INSTRUCTIONS: u64 = 2048 * 2048 * 8;

/// Output capacity, including the reserved terminator slot
pub const OUTPUT_CAPACITY: usize = 1 << 16;

/// Default memory budget for the step-through history (256 MB)
pub const SNAPSHOT_MEMORY_LIMIT: usize = 256 * 1024 * 1024;
