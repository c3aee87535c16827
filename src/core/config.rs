//! # Configuration
//!
//! There is no config file. The few knobs that exist only affect logging and
//! colors, with the override hierarchy: defaults → env vars → CLI flags.
//!
//! | Setting   | Env var              | CLI flag        | Default      |
//! |-----------|----------------------|-----------------|--------------|
//! | log file  | `JSONCLIP_LOG_FILE`  | `--log-file`    | none (off)   |
//! | log level | `JSONCLIP_LOG_LEVEL` | `--log-level`   | `info`       |
//! | colors    | `NO_COLOR`           | `--no-color`    | on           |

use log::LevelFilter;
use std::fmt;
use std::path::PathBuf;

pub const ENV_LOG_FILE: &str = "JSONCLIP_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "JSONCLIP_LOG_LEVEL";
pub const ENV_NO_COLOR: &str = "NO_COLOR";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Values given on the command line (None / false = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_color: bool,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Where to write the log. `None` disables logging entirely.
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    /// ANSI colors in the banner, menu and messages.
    pub color: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLogLevel(level) => write!(
                f,
                "invalid log level '{level}' (expected off, error, warn, info, debug or trace)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve against the real process environment.
pub fn resolve(cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    resolve_with(cli, |key| std::env::var(key).ok())
}

/// Resolve with an explicit environment lookup.
pub fn resolve_with<F>(cli: &CliOverrides, env: F) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Log file: CLI → env → off
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(ENV_LOG_FILE).filter(|s| !s.is_empty()).map(PathBuf::from));

    // Log level: CLI → env → default
    let log_level = match cli.log_level.clone().or_else(|| env(ENV_LOG_LEVEL)) {
        Some(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(level))?,
        None => DEFAULT_LOG_LEVEL,
    };

    // https://no-color.org: any non-empty value disables color
    let no_color = cli.no_color || env(ENV_NO_COLOR).is_some_and(|v| !v.is_empty());

    Ok(ResolvedConfig {
        log_file,
        log_level,
        color: !no_color,
    })
}
