use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use swift_compile_times::{LogProcessor, ProcessorConfig, ReportError, Result};

/// Rank the slowest functions and expressions in a Swift compiler timing log
#[derive(Parser, Debug)]
#[command(name = "swift-compile-times")]
#[command(version)]
struct Cli {
    /// Raw log produced with -debug-time-function-bodies or -debug-time-expression-type-checking
    #[arg(required_unless_present = "config")]
    path: Option<PathBuf>,

    /// Directory the report is written into
    #[arg(short, long = "output", value_name = "DIR", required_unless_present = "config")]
    output_path: Option<PathBuf>,

    /// Total build duration in seconds, echoed in the report header
    #[arg(short, long, value_name = "SECS", required_unless_present = "config")]
    total_build_time: Option<f64>,

    /// Number of slowest entries to keep
    #[arg(short, long, value_name = "N", required_unless_present = "config")]
    limit: Option<usize>,

    /// Read all of the above from a JSON file instead
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with_all = ["path", "output_path", "total_build_time", "limit"]
    )]
    config: Option<PathBuf>,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<ProcessorConfig> {
        if let Some(config_path) = &self.config {
            return ProcessorConfig::from_json_file(config_path);
        }

        match (self.path, self.output_path, self.total_build_time, self.limit) {
            (Some(path), Some(output_path), Some(total_build_time), Some(limit)) => {
                Ok(ProcessorConfig {
                    path,
                    output_path,
                    total_build_time,
                    limit,
                })
            }
            _ => Err(ReportError::InvalidConfig {
                message: "path, --output, --total-build-time and --limit are required".into(),
            }),
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<PathBuf> {
    let processor = LogProcessor::new(cli.into_config()?)?;
    let summary = processor.process()?;
    Ok(summary.output_file)
}

// Error message followed by its chain of causes
fn describe(err: &ReportError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {}", cause));
        source = cause.source();
    }
    message
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(output_file) => {
            println!("{}", output_file.display().to_string().green());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), describe(&err));
            ExitCode::FAILURE
        }
    }
}
