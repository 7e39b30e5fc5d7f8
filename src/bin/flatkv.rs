//! flatkv Binary
//!
//! Runs the store's read loop over stdin/stdout.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use flatkv::{Config, Dispatcher};
use tracing_subscriber::{fmt, EnvFilter};

/// flatkv
#[derive(Parser, Debug)]
#[command(name = "flatkv")]
#[command(about = "Minimal flat-file key-value store with a line-oriented protocol")]
#[command(version)]
struct Args {
    /// Path of the data file to load from and save to
    data_file: PathBuf,

    /// Auto-save every N processed lines (0 disables auto-save)
    #[arg(short = 'a', long, default_value = "5")]
    autosave_interval: u64,

    /// Treat a bare literal KEYS pattern as an exact key match
    #[arg(long)]
    literal_exact: bool,
}

fn main() {
    // Initialize tracing/logging; stdout carries the reply stream, so all
    // logs go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,flatkv=debug"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();

    tracing::info!("flatkv v{}", flatkv::VERSION);
    tracing::info!("Data file: {}", args.data_file.display());

    // Build config from args
    let config = Config::builder()
        .data_path(args.data_file)
        .autosave_interval(args.autosave_interval)
        .literal_exact_match(args.literal_exact)
        .build();

    let mut dispatcher = Dispatcher::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = dispatcher.run(stdin.lock(), stdout.lock()) {
        tracing::error!("Session error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Session ended");
}
