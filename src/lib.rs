//! # Introduction
//!
//! bftty runs programs written in the eight-instruction tape language
//! (`> < + - , . [ ]`) under fixed resource limits. It can also record every
//! step so a run can be browsed forward and backward in a terminal UI built
//! with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Bracket map → Engine → Output + stop reason
//!                           ↓
//!                       Snapshots → TUI
//! ```
//!
//! 1. [`interpreter::brackets`]: pairs every `[` with its `]` in one pass.
//! 2. [`interpreter::engine`]: executes one byte per step on a [`memory::tape::Tape`]
//!    and stops on exhausted source, full output, or the instruction ceiling.
//! 3. [`memory`]: the fixed-size tape and the capacity-checked output sink.
//! 4. [`snapshot`] and [`interpreter::history`]: per-step snapshots under a
//!    memory budget.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Quick start
//!
//! ```
//! use bftty::interpreter::engine::{run, StopReason};
//!
//! let result = run(b"+++[-.]", b"", 64).unwrap();
//! assert_eq!(result.output, vec![2, 1, 0]);
//! assert_eq!(result.stop_reason, StopReason::SourceExhausted);
//! ```

pub mod interpreter;
pub mod memory;
pub mod snapshot;
pub mod ui;
