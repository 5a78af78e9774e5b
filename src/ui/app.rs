//! Main TUI application state and logic

use crate::interpreter::errors::InterpreterError;
use crate::interpreter::history::Timeline;
use crate::ui::panes::{
    render_source_pane, render_status_bar, render_tape_pane, render_terminal_pane,
    SourceScrollState, StatusRenderData, TapeScrollState,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
    backend::Backend,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(100);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tape,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> terminal -> tape)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    /// Run history being browsed
    pub timeline: Timeline,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub source_scroll: SourceScrollState,
    pub tape_scroll: TapeScrollState,
    pub terminal_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    /// Create a new app browsing the given timeline
    pub fn new(timeline: Timeline) -> Self {
        App {
            timeline,
            focused_pane: FocusedPane::Source,
            source_scroll: SourceScrollState::new(),
            tape_scroll: TapeScrollState::new(),
            terminal_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                self.play_tick();
                self.last_play_time = Instant::now();
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// One auto-play step; stops playing at the end or on a breakpoint
    fn play_tick(&mut self) {
        match self.timeline.step_forward() {
            Ok(()) if self.timeline.at_breakpoint() => {
                self.is_playing = false;
                self.status_message = "Paused at breakpoint".to_string();
            }
            Ok(()) => {
                self.status_message = "Playing...".to_string();
            }
            Err(e) => {
                self.is_playing = false;
                self.status_message = format!("Playback stopped: {}", e);
            }
        }
        self.follow_execution();
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Left column: Source (top) | Terminal (bottom); right column: Tape
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let set_zero = self.timeline.config().set_zero_extension;
        let current = self.timeline.current();

        render_source_pane(
            frame,
            left_rows[0],
            self.timeline.source(),
            current.ip,
            set_zero,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        render_terminal_pane(
            frame,
            left_rows[1],
            self.timeline.output(),
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        render_tape_pane(
            frame,
            columns[1],
            &current.tape,
            self.focused_pane == FocusedPane::Tape,
            &mut self.tape_scroll,
        );

        let total_steps = self
            .timeline
            .is_complete()
            .then(|| self.timeline.total_snapshots());

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                current_step: self.timeline.history_position(),
                total_steps,
                instructions: current.instructions,
                stop_reason: current.stop_reason,
                at_breakpoint: self.timeline.at_breakpoint(),
                is_playing: self.is_playing,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                for _ in 0..n {
                    if self.timeline.step_forward().is_err() {
                        break;
                    }
                    stepped += 1;
                }
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.follow_execution();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                let result = self.timeline.step_backward();
                self.report("Stepped backward", "Cannot step backward", result);
            }
            KeyCode::Right => {
                self.is_playing = false;
                let result = self.timeline.step_forward();
                self.report("Stepped forward", "Cannot step forward", result);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.is_playing = false;
                match self.timeline.continue_to_breakpoint() {
                    Ok(n) if self.timeline.at_breakpoint() => {
                        self.status_message = format!("Breakpoint hit after {} step(s)", n);
                    }
                    Ok(n) => {
                        self.status_message = format!("Ran {} step(s) to the end", n);
                    }
                    Err(e) => {
                        self.status_message = format!("Cannot continue: {}", e);
                    }
                }
                self.follow_execution();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Tape => {
                    self.tape_scroll.follow = false;
                    self.tape_scroll.offset = self.tape_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    // Scrolling down makes the current line move up visually
                    if let Some(row) = self.source_scroll.target_line_row {
                        self.source_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Tape => {
                    self.tape_scroll.follow = false;
                    self.tape_scroll.offset = self.tape_scroll.offset.saturating_add(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now()
                        .checked_sub(PLAY_INTERVAL)
                        .unwrap_or_else(Instant::now);
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                // Jump to end of execution
                self.is_playing = false;
                match self.timeline.run_to_end() {
                    Ok(_) => self.status_message = "Jumped to end".to_string(),
                    Err(e) => self.status_message = format!("Stopped early: {}", e),
                }
                self.follow_execution();
            }
            KeyCode::Backspace => {
                // Jump to start of execution
                self.is_playing = false;
                let result = self.timeline.rewind_to_start();
                self.report("Jumped to start", "Cannot rewind", result);
            }
            _ => {}
        }
    }

    fn report(&mut self, success: &str, failure: &str, result: Result<(), InterpreterError>) {
        match result {
            Ok(()) => self.status_message = success.to_string(),
            Err(InterpreterError::HistoryOperationFailed { message }) => {
                self.status_message = format!("{}: {}", failure, message);
            }
            Err(e) => self.status_message = format!("Error: {}", e),
        }
        self.follow_execution();
    }

    /// Re-attach scrolling to the current state after a move
    fn follow_execution(&mut self) {
        self.tape_scroll.follow = true;
        // Auto-scroll terminal to bottom
        self.terminal_scroll = usize::MAX;
    }
}
