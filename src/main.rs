use clap::Parser;
use jsonclip::core::config::{self, CliOverrides, ResolvedConfig};
use jsonclip::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "jsonclip",
    about = "Escape or unescape text as a JSON string and copy it to the clipboard"
)]
struct Args {
    /// Write a debug log to this file (default: no log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        CliOverrides {
            log_file: args.log_file,
            log_level: args.log_level,
            no_color: args.no_color,
        }
    }
}

/// Initialize the file logger. The terminal is the UI, so nothing is logged there.
fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match File::create(path) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => eprintln!("Could not open log file {}: {}", path.display(), e),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match config::resolve(&args.into()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);

    log::info!("jsonclip starting up (color: {})", config.color);

    match tui::run(config).await {
        Ok(exit) if exit.is_success() => ExitCode::SUCCESS,
        Ok(exit) => {
            log::warn!("Exiting after: {}", exit);
            if exit.needs_report() {
                eprintln!("Error: {exit}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("Startup failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
