use clap::Parser;
use std::{env, process};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use tasklint::{
    Result, Validator,
    cli::Cli,
    output::{ReportFormat, render},
    task::{load_tasks, show_task_relationships},
};

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    match run_tasklint(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Returns whether the taskfile passed.
fn run_tasklint(args: Cli) -> Result<bool> {
    let config = load_tasks(&args.file)?;

    let cwd = match args.cwd {
        Some(cwd) => cwd,
        None => env::current_dir()?,
    };
    let mut validator = Validator::with_cwd(&cwd)?;
    if !args.reserved.is_empty() {
        validator = validator.with_reserved_ids(args.reserved);
    }

    show_task_relationships(&config.tasks, args.verbose);

    let outcome = validator.validate(&config.tasks);
    let rendered = render(args.format, config.tasks.len(), &outcome)
        .map_err(std::io::Error::other)?;

    match (args.format, outcome.is_ok()) {
        (ReportFormat::Text, false) => eprintln!("{}", rendered),
        _ => println!("{}", rendered),
    }

    Ok(outcome.is_ok())
}
