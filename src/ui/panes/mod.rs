//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Program text with opcode highlighting and the instruction pointer
//! - [`tape`]: Hex dump of the tape with the data pointer cell marked
//! - [`terminal`]: Output produced so far
//! - [`status`]: Status bar with keybindings and execution state
//! - `utils`: Shared helpers for byte formatting and source positions
//!
//! Each pane module exports a primary `render_*` function plus, where the pane
//! scrolls, its scroll state type.

mod utils;

pub mod source;
pub mod status;
pub mod tape;
pub mod terminal;

// Re-export render functions for convenience
pub use source::{render_source_pane, SourceScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use tape::{render_tape_pane, TapeScrollState};
pub use terminal::render_terminal_pane;
