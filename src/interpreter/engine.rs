// Execution engine for the tape language

use crate::interpreter::brackets::BracketMap;
use crate::interpreter::config::Config;
use crate::interpreter::errors::InterpreterError;
use crate::memory::output::{OutputSink, SinkStatus};
use crate::memory::tape::Tape;
use std::fmt;

/// A decoded instruction. Bytes that decode to `None` are comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Right,
    Left,
    Increment,
    Decrement,
    Read,
    Write,
    LoopStart,
    LoopEnd,
    /// `0`, only with the set-zero extension enabled
    SetZero,
}

impl Opcode {
    pub fn decode(byte: u8, config: &Config) -> Option<Self> {
        match byte {
            b'>' => Some(Opcode::Right),
            b'<' => Some(Opcode::Left),
            b'+' => Some(Opcode::Increment),
            b'-' => Some(Opcode::Decrement),
            b',' => Some(Opcode::Read),
            b'.' => Some(Opcode::Write),
            b'[' => Some(Opcode::LoopStart),
            b']' => Some(Opcode::LoopEnd),
            b'0' if config.set_zero_extension => Some(Opcode::SetZero),
            _ => None,
        }
    }
}

/// Why a run ended. All of these are normal terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The instruction pointer ran past the end of the source, either by
    /// falling off the end or by jumping through an unmatched bracket
    SourceExhausted,
    /// The output sink has no room left
    OutputFull,
    /// The instruction ceiling was reached
    InstructionLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::SourceExhausted => write!(f, "source exhausted"),
            StopReason::OutputFull => write!(f, "output full"),
            StopReason::InstructionLimit => write!(f, "instruction limit reached"),
        }
    }
}

/// Everything a finished run hands back to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub output: Vec<u8>,
    pub stop_reason: StopReason,
    pub instructions: u64,
}

/// Run `source` against `input` with default limits and the given output capacity
pub fn run(
    source: &[u8],
    input: &[u8],
    output_capacity: usize,
) -> Result<RunResult, InterpreterError> {
    run_with_config(source, input, &Config::with_output_capacity(output_capacity))
}

/// Run `source` against `input` under an explicit configuration
pub fn run_with_config(
    source: &[u8],
    input: &[u8],
    config: &Config,
) -> Result<RunResult, InterpreterError> {
    let interpreter = Interpreter::new(source, input, config.clone())?;
    Ok(interpreter.into_result())
}

/// The interpreter state for one run
#[derive(Debug, Clone)]
pub struct Interpreter {
    /// Program text; every byte is one step
    source: Vec<u8>,

    /// Loop partners, built once in `new`
    brackets: BracketMap,

    /// Cells and data pointer
    tape: Tape,

    /// Bytes consumed by `,`
    input: Vec<u8>,

    /// Next unread input byte
    input_cursor: usize,

    /// Bytes produced by `.`
    output: OutputSink,

    /// Next instruction; `>= source.len()` means halted
    ip: usize,

    /// Steps executed so far
    instructions: u64,

    /// Set once the run has ended
    stop_reason: Option<StopReason>,

    config: Config,
}

impl Interpreter {
    /// Create an interpreter ready to execute its first instruction.
    ///
    /// Fails if `config` is invalid or the program has more bracket pairs than
    /// `config.bracket_capacity`.
    pub fn new(source: &[u8], input: &[u8], config: Config) -> Result<Self, InterpreterError> {
        config.validate()?;
        let brackets = BracketMap::build(source, config.bracket_capacity)?;

        let mut interpreter = Interpreter {
            source: source.to_vec(),
            brackets,
            tape: Tape::new(config.tape_size),
            input: input.to_vec(),
            input_cursor: 0,
            output: OutputSink::new(config.output_capacity),
            ip: 0,
            instructions: 0,
            stop_reason: None,
            config,
        };
        interpreter.check_stop();
        Ok(interpreter)
    }

    /// Execute until a stop condition is reached
    pub fn run(&mut self) -> StopReason {
        loop {
            if let Some(reason) = self.step() {
                return reason;
            }
        }
    }

    /// Execute a single instruction.
    ///
    /// Returns the stop reason once the run has ended, either before this call
    /// or as a result of it. Stepping a stopped interpreter changes nothing.
    pub fn step(&mut self) -> Option<StopReason> {
        if self.stop_reason.is_some() {
            return self.stop_reason;
        }

        let byte = self.source[self.ip];
        self.instructions += 1;

        match Opcode::decode(byte, &self.config) {
            Some(Opcode::Right) => {
                self.tape.move_right();
                self.ip += 1;
            }
            Some(Opcode::Left) => {
                self.tape.move_left();
                self.ip += 1;
            }
            Some(Opcode::Increment) => {
                self.tape.increment();
                self.ip += 1;
            }
            Some(Opcode::Decrement) => {
                self.tape.decrement();
                self.ip += 1;
            }
            Some(Opcode::Read) => {
                let value = match self.input.get(self.input_cursor) {
                    Some(&value) => {
                        self.input_cursor += 1;
                        value
                    }
                    None => 0,
                };
                self.tape.set(value);
                self.ip += 1;
            }
            Some(Opcode::Write) => {
                let value = if self.config.ascii_only {
                    self.tape.get() % 128
                } else {
                    self.tape.get()
                };
                self.ip += 1;
                if self.output.push(value) == SinkStatus::Full {
                    self.stop_reason = Some(StopReason::OutputFull);
                }
            }
            Some(Opcode::LoopStart) => {
                if self.tape.get() == 0 {
                    self.ip = self.jump_target(self.brackets.close_for(self.ip));
                } else {
                    self.ip += 1;
                }
            }
            Some(Opcode::LoopEnd) => {
                if self.tape.get() != 0 {
                    self.ip = self.jump_target(self.brackets.open_for(self.ip));
                } else {
                    self.ip += 1;
                }
            }
            Some(Opcode::SetZero) => {
                self.tape.set(0);
                self.ip += 1;
            }
            None => self.ip += 1,
        }

        self.check_stop();
        self.stop_reason
    }

    /// Land just past the partner bracket, or halt when there is none
    fn jump_target(&self, partner: Option<usize>) -> usize {
        match partner {
            Some(pos) => pos + 1,
            None => self.source.len(),
        }
    }

    fn check_stop(&mut self) {
        if self.stop_reason.is_some() {
            return;
        }
        if self.instructions >= self.config.instruction_limit {
            self.stop_reason = Some(StopReason::InstructionLimit);
        } else if self.ip >= self.source.len() {
            self.stop_reason = Some(StopReason::SourceExhausted);
        }
    }

    /// Finish the run if it is still going, then hand back its output
    pub fn into_result(mut self) -> RunResult {
        let stop_reason = self.run();
        RunResult {
            stop_reason,
            instructions: self.instructions,
            output: self.output.into_bytes(),
        }
    }

    // ========== Getter methods for UI ==========

    pub fn source(&self) -> &[u8] {
        &self.source
    }

    pub fn brackets(&self) -> &BracketMap {
        &self.brackets
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn output(&self) -> &[u8] {
        self.output.as_bytes()
    }

    pub fn ip(&self) -> usize {
        self.ip
    }

    pub fn input(&self) -> &[u8] {
        &self.input
    }

    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop_reason
    }

    pub fn is_finished(&self) -> bool {
        self.stop_reason.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(limit: u64) -> Config {
        Config {
            instruction_limit: limit,
            ..Config::default()
        }
    }

    #[test]
    fn test_empty_source_is_already_finished() {
        let interpreter = Interpreter::new(b"", b"", Config::default()).unwrap();
        assert_eq!(interpreter.stop_reason(), Some(StopReason::SourceExhausted));
        assert_eq!(interpreter.instructions(), 0);
    }

    #[test]
    fn test_step_after_stop_is_inert() {
        let mut interpreter = Interpreter::new(b"+", b"", Config::default()).unwrap();
        assert_eq!(interpreter.step(), Some(StopReason::SourceExhausted));
        assert_eq!(interpreter.step(), Some(StopReason::SourceExhausted));
        assert_eq!(interpreter.instructions(), 1);
        assert_eq!(interpreter.tape().get(), 1);
    }

    #[test]
    fn test_comments_count_as_steps() {
        let result = run_with_config(b"a+b", b"", &Config::default()).unwrap();
        assert_eq!(result.instructions, 3);
        assert_eq!(result.stop_reason, StopReason::SourceExhausted);
    }

    #[test]
    fn test_limit_wins_over_exhaustion() {
        let result = run_with_config(b"+++", b"", &small(3)).unwrap();
        assert_eq!(result.stop_reason, StopReason::InstructionLimit);
        assert_eq!(result.instructions, 3);
    }

    #[test]
    fn test_zero_limit_executes_nothing() {
        let result = run_with_config(b"+.", b"", &small(0)).unwrap();
        assert_eq!(result.stop_reason, StopReason::InstructionLimit);
        assert!(result.output.is_empty());
        assert_eq!(result.instructions, 0);
    }

    #[test]
    fn test_skip_loop_when_zero() {
        let mut interpreter = Interpreter::new(b"[+]-", b"", Config::default()).unwrap();
        interpreter.step();
        assert_eq!(interpreter.ip(), 3);
        interpreter.step();
        assert_eq!(interpreter.tape().get(), 255);
    }

    #[test]
    fn test_loop_end_jumps_past_open() {
        let mut interpreter = Interpreter::new(b"++[-]", b"", Config::default()).unwrap();
        for _ in 0..5 {
            interpreter.step();
        }
        // `]` with cell 1 goes back to the `-`
        assert_eq!(interpreter.ip(), 3);
    }

    #[test]
    fn test_unmatched_open_halts_when_zero() {
        let mut interpreter = Interpreter::new(b"[+++", b"", Config::default()).unwrap();
        assert_eq!(interpreter.step(), Some(StopReason::SourceExhausted));
        assert_eq!(interpreter.ip(), 4);
        assert_eq!(interpreter.tape().get(), 0);
    }

    #[test]
    fn test_unmatched_close_halts_when_nonzero() {
        let result = run_with_config(b"+]+.", b"", &Config::default()).unwrap();
        assert!(result.output.is_empty());
        assert_eq!(result.stop_reason, StopReason::SourceExhausted);
        assert_eq!(result.instructions, 2);
    }

    #[test]
    fn test_read_past_input_yields_zero() {
        let mut interpreter = Interpreter::new(b",,", b"x", Config::default()).unwrap();
        interpreter.step();
        assert_eq!(interpreter.tape().get(), b'x');
        interpreter.step();
        assert_eq!(interpreter.tape().get(), 0);
        assert_eq!(interpreter.input_cursor(), 1);
    }

    #[test]
    fn test_output_masked_to_seven_bits() {
        let result = run_with_config(b"-.", b"", &Config::default()).unwrap();
        assert_eq!(result.output, vec![127]);
    }

    #[test]
    fn test_extended_output() {
        let config = Config {
            ascii_only: false,
            ..Config::default()
        };
        let result = run_with_config(b"-.", b"", &config).unwrap();
        assert_eq!(result.output, vec![255]);
    }

    #[test]
    fn test_set_zero_extension() {
        let config = Config {
            set_zero_extension: true,
            ..Config::default()
        };
        let result = run_with_config(b"+++0.", b"", &config).unwrap();
        assert_eq!(result.output, vec![0]);

        let result = run_with_config(b"+++0.", b"", &Config::default()).unwrap();
        assert_eq!(result.output, vec![3]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config::with_output_capacity(0);
        let err = Interpreter::new(b"+", b"", config).unwrap_err();
        assert!(matches!(err, InterpreterError::InvalidConfig { .. }));

        let config = Config {
            tape_size: 0,
            ..Config::default()
        };
        let err = Interpreter::new(b"+", b"", config).unwrap_err();
        assert!(matches!(err, InterpreterError::InvalidConfig { .. }));
    }

    #[test]
    fn test_zero_bracket_capacity_without_brackets() {
        let config = Config {
            bracket_capacity: 0,
            ..Config::default()
        };
        let result = run_with_config(b"+++.", b"", &config).unwrap();
        assert_eq!(result.output, vec![3]);

        let err = Interpreter::new(b"+[-]", b"", config).unwrap_err();
        assert_eq!(err, InterpreterError::TooManyBrackets { found: 1, limit: 0 });
    }

    #[test]
    fn test_into_result_finishes_the_run() {
        let interpreter = Interpreter::new(b"++.+.", b"", Config::default()).unwrap();
        let result = interpreter.into_result();
        assert_eq!(result.output, vec![2, 3]);
        assert_eq!(result.stop_reason, StopReason::SourceExhausted);
        assert_eq!(result.instructions, 5);

        let mut interpreter = Interpreter::new(b"+[]", b"", small(50)).unwrap();
        interpreter.step();
        let result = interpreter.into_result();
        assert_eq!(result.stop_reason, StopReason::InstructionLimit);
        assert_eq!(result.instructions, 50);
    }

    #[test]
    fn test_stop_reason_display() {
        assert_eq!(StopReason::OutputFull.to_string(), "output full");
        assert_eq!(
            StopReason::InstructionLimit.to_string(),
            "instruction limit reached"
        );
    }
}
