//! Memory model for the interpreter
//!
//! - [`tape`]: the fixed-size cell tape and its saturating data pointer
//! - [`output`]: the append-only, capacity-checked output sink
//!
//! # Cell Arithmetic
//!
//! Cells are `u8`. `+` and `-` wrap modulo 256:
//! ```text
//! 255 + 1  →  0
//!   0 - 1  →  255
//! ```

pub mod output;
pub mod tape;
