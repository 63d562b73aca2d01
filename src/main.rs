use secret_friend::error::AppError;
use secret_friend::random::RandIndex;
use secret_friend::reporting::TerminalSurface;
use secret_friend::surface::Host;
use secret_friend::widget::RosterWidget;
use secret_friend::{names_file, session};

use std::io;
use std::path;
use std::process;

use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version)]
/// Stores the command line arguments.
struct Args {
    /// CSV file of names to add before the session starts.
    #[clap(long, short)]
    names : Option<path::PathBuf>,

    /// Seed for the draw, to make results reproducible.
    #[clap(long, short)]
    seed : Option<u64>,

    /// Enable debug logging.
    #[clap(long, takes_value = false)]
    debug : bool,
}

/// Logs go to stderr so stdout only carries what the widget shows.
fn init_tracing(debug : bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(debug)
        .compact()
        .try_init();
}

/// Primary entry point to the widget session.
fn play(args : Args) -> Result<(), AppError> {
    let rng = match args.seed {
        Some(seed) => RandIndex::seeded(seed),
        None => RandIndex::from_entropy(),
    };

    let mut widget = RosterWidget::new(rng);
    let skipped = match &args.names {
        Some(path) => names_file::from_path(path, &mut widget)?.skipped,
        None => Vec::new(),
    };

    let mut host = Host::new(TerminalSurface::new(io::stdout()), widget);
    session::open(&mut host, &skipped)?;

    let stdin = io::stdin();
    session::run(stdin.lock(), &mut host)
}

fn main() {
    let args = Args::parse();
    init_tracing(args.debug);

    match play(args) {
        Ok(_) => {
            process::exit(exitcode::OK);
        },
        Err(error @ AppError::Csv(_)) => {
            eprintln!("{} {}", "Names Error:".red().bold(), error);
            process::exit(exitcode::DATAERR);
        },
        Err(error @ AppError::Io(_)) => {
            eprintln!("{} {}", "Terminal Error:".red().bold(), error);
            process::exit(exitcode::IOERR);
        },
    }
}
