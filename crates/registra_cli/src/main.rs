//! registra entry point.
//!
//! # Responsibility
//! - Parse process arguments and wire the composition root: connection →
//!   repository → service → shell.
//! - Run the interactive session over real stdin/stdout.
//!
//! # Invariants
//! - All normal termination paths (`exit`, end-of-input) exit with code 0.
//! - Bootstrap failures print one line to stderr and exit non-zero.

use clap::Parser;
use registra_core::db::{open_db, open_db_in_memory};
use registra_core::{
    default_log_level, init_logging, system_language, Language, RecordService, Shell,
    SqliteRecordRepository,
};
use std::io;
use std::path::PathBuf;

/// Localized interactive console over a single-table record store.
#[derive(Parser)]
#[command(name = "registra", version)]
struct Args {
    /// SQLite database file
    #[arg(long, value_name = "PATH", default_value = "registra.db")]
    db: PathBuf,

    /// Use a throwaway in-memory database instead of a file
    #[arg(long, conflicts_with = "db")]
    in_memory: bool,

    /// Initial interface language (en, ru); defaults to the system locale
    #[arg(long, value_name = "LANGUAGE")]
    lang: Option<String>,

    /// Directory for rolling log files; file logging is off when omitted
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(message) = run(&args) {
        eprintln!("registra: {message}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), String> {
    if let Some(log_dir) = &args.log_dir {
        let log_dir = absolutize(log_dir)?;
        let level = args.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let language = match &args.lang {
        Some(code) => code.parse::<Language>()?,
        None => system_language(),
    };

    let conn = if args.in_memory {
        open_db_in_memory()
    } else {
        open_db(&args.db)
    }
    .map_err(|err| err.to_string())?;

    let repo = SqliteRecordRepository::try_new(&conn).map_err(|err| err.to_string())?;
    let service = RecordService::new(repo);
    let mut shell = Shell::new(service, language);

    let stdin = io::stdin();
    shell
        .run(stdin.lock(), io::stdout())
        .map_err(|err| err.to_string())
}

fn absolutize(path: &PathBuf) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.clone());
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .map_err(|err| format!("cannot resolve current directory: {err}"))
}
