// algoviz: interactive data-structure visualizers in the terminal

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algoviz::config::{EngineConfig, DEFAULT_CONCEPTS};
use algoviz::engine::VisualizerEngine;
use algoviz::error::AppError;
use algoviz::ui::App;

#[derive(Parser, Debug)]
#[command(name = "algoviz", version, about = "Interactive data-structure visualizers")]
struct Cli {
    /// Concept id to mount first (arrays, strings, linked-list, stacks, queues, sorting)
    concept: Option<String>,

    /// Comma-separated concept ids offered by the picker
    #[arg(long, value_delimiter = ',')]
    concepts: Vec<String>,

    /// Delay between bubble sort steps, in milliseconds
    #[arg(long, default_value_t = 200)]
    step_delay_ms: u64,

    /// How long an array access stays highlighted, in milliseconds
    #[arg(long, default_value_t = 1000)]
    highlight_ms: u64,

    /// Seed for generated sort data
    #[arg(long)]
    seed: Option<u64>,

    /// Input poll interval, in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            step_delay: Duration::from_millis(self.step_delay_ms),
            highlight_duration: Duration::from_millis(self.highlight_ms),
            seed: self.seed,
        }
    }

    fn concept_list(&self) -> Vec<String> {
        if self.concepts.is_empty() {
            DEFAULT_CONCEPTS.iter().map(|c| c.to_string()).collect()
        } else {
            self.concepts.clone()
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.clone(),
        source,
    })?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let engine = VisualizerEngine::new(cli.engine_config());
    let mut app = App::new(
        engine,
        cli.concept_list(),
        cli.concept.as_deref(),
        Duration::from_millis(cli.tick_ms),
    );

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        let err = AppError::from(err);
        tracing::error!(%err, "event loop failed");
        eprintln!("Error: {}", err);
    }

    Ok(())
}
