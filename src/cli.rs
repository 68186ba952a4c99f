use std::path::PathBuf;

use clap::Parser;

use crate::output::ReportFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Taskfile to check
    #[arg(short = 'f', long = "file", default_value = "tasks.toml")]
    pub file: PathBuf,

    /// Working directory watch paths must stay inside (defaults to the current directory)
    #[arg(short = 'C', long = "cwd")]
    pub cwd: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// How to print the report
    #[arg(long = "format", value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Task ID the runner reserves for itself; replaces the defaults when given
    #[arg(long = "reserved", value_name = "ID")]
    pub reserved: Vec<String>,
}
