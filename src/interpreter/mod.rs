//! Tape-language execution engine
//!
//! This module provides the core execution logic:
//! - [`brackets`]: one-pass bracket matcher producing a bidirectional [`BracketMap`]
//! - [`engine`]: the fetch-decode-execute loop and its [`StopReason`]s
//! - [`config`]: explicit limits with defaults from [`constants`]
//! - [`history`]: snapshot timeline for stepping a run forward and backward
//! - [`errors`]: hard failures that prevent a run from starting
//!
//! # Execution Model
//!
//! Each source byte is one step. The eight opcodes `> < + - , . [ ]` act on
//! the tape; every other byte is a comment and only advances the instruction
//! pointer. A run ends when the instruction pointer leaves the source, the
//! output sink fills up, or the instruction ceiling is reached.
//!
//! [`BracketMap`]: brackets::BracketMap
//! [`StopReason`]: engine::StopReason

pub mod brackets;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod history;
