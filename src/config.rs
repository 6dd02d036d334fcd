//! Command line and logging configuration.
//!
//! Every option can also come from the environment (or a `.env` file loaded
//! by `main`).

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// log4rs config file read from the working directory.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";
/// Level used when no log4rs config file is found.
pub const FALLBACK_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Output formats for a plan.
#[derive(ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width table
    #[default]
    Table,
    /// Quoted CSV rows, allocations followed by free blocks
    Csv,
    /// Pretty printed JSON
    Json,
}

/// Plan a VLSM subnet layout inside a base network.
///
/// Missing values are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "vlsm-planner", version, about, long_about = None)]
pub struct Cli {
    /// Base network to carve, e.g. 192.168.1.0/24
    #[arg(short, long, env = "VLSM_BASE_NETWORK")]
    pub base: Option<String>,

    /// Required hosts per network type, e.g. "126 30 6"
    #[arg(short = 'H', long, env = "VLSM_HOSTS")]
    pub hosts: Option<String>,

    /// Number of networks of each type, e.g. "1 3 3" (default one each)
    #[arg(short, long, env = "VLSM_COUNTS", requires = "hosts")]
    pub counts: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, env = "VLSM_FORMAT", default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// log4rs configuration file
    #[arg(long, env = "VLSM_LOG_CONFIG", default_value = DEFAULT_LOG_CONFIG)]
    pub log_config: PathBuf,
}

/// Initialise log4rs from `path`, or log warnings to stderr when it is missing.
pub fn init_logger(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())?;
        log::debug!("Logging configured from {}", path.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {h({l})} {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(FALLBACK_LOG_LEVEL))?;
    log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from([
            "vlsm-planner",
            "--base",
            "10.0.0.0/24",
            "-H",
            "126 30 6",
            "--counts",
            "1 3 3",
            "--format",
            "csv",
        ])
        .unwrap();
        assert_eq!(cli.base.as_deref(), Some("10.0.0.0/24"));
        assert_eq!(cli.hosts.as_deref(), Some("126 30 6"));
        assert_eq!(cli.counts.as_deref(), Some("1 3 3"));
        assert_eq!(cli.format, OutputFormat::Csv);
    }

    #[test]
    fn test_cli_counts_need_hosts() {
        assert!(Cli::try_parse_from(["vlsm-planner", "--counts", "1 2"]).is_err());
    }
}
