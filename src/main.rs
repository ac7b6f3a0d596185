//! CLI entry point for the gradebook analyzer.
//!
//! Runs the interactive menu by default, or analyzes a CSV file in one shot
//! with the `analyze` subcommand.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use gradebook_analyzer::{
    analyzers::partition::DEFAULT_PASS_MARK,
    output::{print_json, save_to_csv},
    parser::load_from_csv,
    report::print_report,
    shell::Shell,
    stats::AnalysisSummary,
};
use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "gradebook_analyzer")]
#[command(about = "Grade statistics for a class of students", long_about = None)]
struct Cli {
    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    Shell {
        /// Minimum score counted as a pass
        #[arg(long, default_value_t = DEFAULT_PASS_MARK)]
        pass_mark: f64,
    },
    /// Analyze a CSV file of `name,score` rows without prompting
    Analyze {
        /// Path to the input CSV
        #[arg(value_name = "CSV")]
        source: PathBuf,

        /// Write `Name,Marks,Grade` rows to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Minimum score counted as a pass
        #[arg(long, default_value_t = DEFAULT_PASS_MARK)]
        pass_mark: f64,

        /// Print the summary as JSON instead of the text report
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let cli = Cli::parse();
    let _file_guard = init_logging(cli.log_file.as_deref());

    match cli.command.unwrap_or(Commands::Shell {
        pass_mark: DEFAULT_PASS_MARK,
    }) {
        Commands::Shell { pass_mark } => {
            let stdin = io::stdin();
            let mut shell = Shell::new(stdin.lock(), io::stdout()).with_pass_mark(pass_mark);
            shell.run()?;
        }
        Commands::Analyze {
            source,
            output,
            pass_mark,
            json,
        } => {
            analyze(&source, output.as_deref(), pass_mark, json)?;
        }
    }

    Ok(())
}

/// Logging setup: colored stderr, plus a JSON rolling log file when requested.
///
/// The stderr layer defaults to `warn` so it stays out of the way of the
/// interactive prompts.
fn init_logging(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(env_filter("RUST_LOG", "warn"));

    let (json_layer, guard) = match log_file {
        Some(path) => {
            let log_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let log_file_name = path
                .file_name()
                .unwrap_or(OsStr::new("gradebook_analyzer.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", "debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    guard
}

fn env_filter(var: &str, default: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Loads, reports, and optionally saves a CSV without any prompts.
#[tracing::instrument(skip(source, output), fields(source = %source.display()))]
fn analyze(source: &Path, output: Option<&Path>, pass_mark: f64, json: bool) -> Result<()> {
    let Some(store) = load_from_csv(source)? else {
        bail!("CSV file not found: {}", source.display());
    };
    if store.is_empty() {
        bail!("No valid data loaded from CSV: {}", source.display());
    }

    let summary = AnalysisSummary::from_store(&store, pass_mark);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        print_json(&mut out, &summary)?;
    } else {
        print_report(&mut out, &store, &summary)?;
    }

    if let Some(path) = output {
        save_to_csv(path, &store, &summary.grades)?;
        if !json {
            writeln!(out, "Saved to {}", path.display())?;
        }
    }

    info!(students = store.len(), "Analysis complete");
    Ok(())
}
