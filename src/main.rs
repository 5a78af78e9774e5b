// bftty: bounded tape-language interpreter with a step-through viewer

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use bftty::interpreter::config::Config;
use bftty::interpreter::constants::{
    MAX_BRACKET_PAIRS, MAX_INSTRUCTIONS, OUTPUT_CAPACITY, SNAPSHOT_MEMORY_LIMIT, TAPE_SIZE,
};
use bftty::interpreter::engine::Interpreter;
use bftty::interpreter::history::Timeline;
use bftty::ui::App;

#[derive(Parser)]
#[command(author, version, about = "Bounded tape-language interpreter")]
struct Args {
    /// Program source file
    source: PathBuf,

    /// Input bytes consumed by `,` (empty when omitted)
    input: Option<String>,

    /// Open the step-through viewer instead of printing the output
    #[arg(long)]
    tui: bool,

    /// Number of tape cells
    #[arg(long, default_value_t = TAPE_SIZE)]
    tape_size: usize,

    /// Instruction ceiling
    #[arg(long, default_value_t = MAX_INSTRUCTIONS)]
    max_instructions: u64,

    /// Output capacity in bytes, including one reserved slot
    #[arg(long, default_value_t = OUTPUT_CAPACITY)]
    output_capacity: usize,

    /// Maximum number of bracket pairs
    #[arg(long, default_value_t = MAX_BRACKET_PAIRS)]
    bracket_capacity: usize,

    /// Emit raw 8-bit cell values instead of masking to 7 bits
    #[arg(long)]
    extended_ascii: bool,

    /// Enable the `0` instruction (clear current cell)
    #[arg(long)]
    set_zero: bool,

    /// Memory budget for the viewer's step history, in bytes
    #[arg(long, default_value_t = SNAPSHOT_MEMORY_LIMIT)]
    snapshot_limit: usize,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            tape_size: self.tape_size,
            bracket_capacity: self.bracket_capacity,
            instruction_limit: self.max_instructions,
            output_capacity: self.output_capacity,
            ascii_only: !self.extended_ascii,
            set_zero_extension: self.set_zero,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let source = match fs::read(&args.source) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: cannot read '{}': {}", args.source.display(), e);
            process::exit(1);
        }
    };
    let input = args.input.clone().unwrap_or_default();

    if !args.quiet {
        eprintln!(
            "Loaded {} ({} bytes, {} bytes of input)",
            args.source.display(),
            source.len(),
            input.len()
        );
    }

    let interpreter = match Interpreter::new(&source, input.as_bytes(), args.config()) {
        Ok(interpreter) => interpreter,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if args.tui {
        return run_tui(interpreter, args.snapshot_limit);
    }

    if !args.quiet {
        eprintln!(
            "Executing program ({} bracket pairs)...",
            interpreter.brackets().len()
        );
    }
    let result = interpreter.into_result();

    if !args.quiet {
        eprintln!(
            "Execution stopped: {} after {} instructions.",
            result.stop_reason, result.instructions
        );
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&result.output)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn run_tui(
    interpreter: Interpreter,
    snapshot_limit: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let timeline = match Timeline::new(interpreter, snapshot_limit) {
        Ok(timeline) => timeline,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(timeline);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
