// algoviz: step-by-step algorithm replay in the terminal

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use algoviz::algorithms::{Algorithm, Problem};
use algoviz::config::Config;
use algoviz::input::{build_problem, RawParams};
use algoviz::trace::AlgorithmTrace;
use algoviz::ui::App;

/// Step through classic algorithms one event at a time
#[derive(Parser)]
#[command(name = "algoviz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a config file (default: ./algoviz.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory for log files in TUI mode
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// How to present the trace
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Tui)]
    output: OutputMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// Interactive replay
    Tui,
    /// Pretty-printed JSON trace on stdout
    Json,
    /// One narration line per step
    Plain,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a target in an array (the array is sorted first)
    BinarySearch {
        /// Comma-separated integers
        #[arg(long, allow_hyphen_values = true)]
        array: String,

        #[arg(long, allow_hyphen_values = true)]
        target: String,
    },

    /// Sort an array with a binary max-heap
    HeapSort {
        /// Comma-separated integers
        #[arg(long, allow_hyphen_values = true)]
        array: String,
    },

    /// Sort an array with median-of-three quick sort
    QuickSort {
        /// Comma-separated integers
        #[arg(long, allow_hyphen_values = true)]
        array: String,
    },

    /// Breadth-first traversal of a directed graph
    Bfs(GraphArgs),

    /// Depth-first traversal of a directed graph
    Dfs(GraphArgs),

    /// List the available algorithms
    List,
}

#[derive(Args)]
struct GraphArgs {
    /// Edges as `from,to` pairs separated by newlines or `;`
    #[arg(long, required_unless_present = "edges_file", conflicts_with = "edges_file")]
    edges: Option<String>,

    /// Read the edge list from a file
    #[arg(long)]
    edges_file: Option<PathBuf>,

    /// Node to start from
    #[arg(long)]
    start: String,
}

impl GraphArgs {
    fn edge_text(&self) -> Result<String> {
        match (&self.edges, &self.edges_file) {
            (Some(edges), _) => Ok(edges.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read edge file {}", path.display())),
            (None, None) => anyhow::bail!("either --edges or --edges-file is required"),
        }
    }
}

fn env_filter(verbose: bool, default_level: &str) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
    }
}

/// Initialize logging for json/plain output.
/// Logs to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool, default_level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter(verbose, default_level))
        .init();
}

/// Initialize logging for TUI mode.
/// Logs to rotating files with daily rotation to keep the screen clean.
fn init_file_logging(logs_dir: &Path, verbose: bool, default_level: &str) {
    if let Err(e) = std::fs::create_dir_all(logs_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, logs_dir, "algoviz.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Dropping the guard would stop logging
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(env_filter(verbose, default_level))
        .init();
}

fn print_catalog() {
    for algorithm in Algorithm::ALL {
        println!(
            "{:<14} {:<22} {}",
            algorithm.id(),
            algorithm.name(),
            algorithm.description()
        );
    }
}

fn print_plain(trace: &AlgorithmTrace) {
    let width = trace.len().to_string().len();
    for i in 0..trace.len() {
        if let (Some(action), Some(text)) = (trace.action_name(i), trace.narrate(i)) {
            println!("{:>width$}. [{}] {}", i + 1, action, text, width = width);
        }
    }
}

fn run_tui(app: &mut App) -> Result<()> {
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

    res.context("TUI event loop failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (algorithm, edge_text, params) = match &cli.command {
        Commands::List => {
            print_catalog();
            return Ok(());
        }
        Commands::BinarySearch { array, target } => (
            Algorithm::BinarySearch,
            None,
            RawParams {
                array: Some(array.as_str()),
                target: Some(target.as_str()),
                ..Default::default()
            },
        ),
        Commands::HeapSort { array } => (
            Algorithm::HeapSort,
            None,
            RawParams {
                array: Some(array.as_str()),
                ..Default::default()
            },
        ),
        Commands::QuickSort { array } => (
            Algorithm::QuickSort,
            None,
            RawParams {
                array: Some(array.as_str()),
                ..Default::default()
            },
        ),
        Commands::Bfs(args) => (Algorithm::Bfs, Some(args), RawParams::default()),
        Commands::Dfs(args) => (Algorithm::Dfs, Some(args), RawParams::default()),
    };

    let config = Config::load(cli.config.as_deref())?;
    let level = config.logging.level.as_str();
    match cli.output {
        OutputMode::Tui => {
            if let Some(dir) = cli.log_dir.as_ref().or(config.logging.directory.as_ref()) {
                init_file_logging(dir, cli.verbose, level);
            }
        }
        OutputMode::Json | OutputMode::Plain => init_logging(cli.verbose, level),
    }

    let edges = edge_text.map(GraphArgs::edge_text).transpose()?;
    let params = match (edge_text, edges.as_deref()) {
        (Some(args), Some(edges)) => RawParams {
            edges: Some(edges),
            start: Some(args.start.as_str()),
            ..params
        },
        _ => params,
    };

    let problem: Problem = match build_problem(algorithm, &params) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let trace = problem.trace();
    tracing::info!(
        algorithm = algorithm.id(),
        steps = trace.len(),
        bytes = trace.estimated_size(),
        "trace ready"
    );

    match cli.output {
        OutputMode::Json => {
            let json = serde_json::to_string_pretty(&trace).context("Failed to serialize trace")?;
            println!("{}", json);
        }
        OutputMode::Plain => print_plain(&trace),
        OutputMode::Tui => {
            let mut app = App::new(problem, trace, config.playback.speed);
            if config.playback.autoplay {
                app.autoplay();
            }
            run_tui(&mut app)?;
        }
    }

    Ok(())
}
