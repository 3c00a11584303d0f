//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use crm_metrics::Period;
use std::path::PathBuf;

use crate::config;

/// Version with git hash and build date, e.g. "0.1.0 (abc1234, 2026-02-06)".
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// crm - CRM dashboard metrics from the command line
#[derive(Parser, Debug)]
#[command(name = "crm")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the dataset file
    #[arg(short, long, env = config::DATA_FILE_ENV, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute and print dashboard metrics
    Metrics {
        /// Reporting period as YYYY-MM (default: current month)
        #[arg(short, long, env = config::PERIOD_ENV)]
        period: Option<Period>,

        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the director pipeline roll-up
    Directors {
        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the recent updates feed
    Updates {
        /// Number of updates to show
        #[arg(short, long, default_value_t = crm_metrics::activity::PAGE_SIZE)]
        limit: usize,

        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Write an empty dataset file
    Init {
        /// Overwrite an existing dataset
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the dataset path, using the default if not specified.
    pub fn data_file(&self) -> PathBuf {
        self.data.clone().unwrap_or_else(config::default_data_file)
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_metrics() {
        let cli = Cli::parse_from(["crm", "metrics", "--period", "2026-02"]);
        match cli.command {
            Commands::Metrics { period, format } => {
                assert_eq!(period, Some("2026-02".parse().unwrap()));
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("Expected Metrics command"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_period() {
        let result = Cli::try_parse_from(["crm", "metrics", "--period", "Feb 2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_updates_default_limit() {
        let cli = Cli::parse_from(["crm", "updates"]);
        match cli.command {
            Commands::Updates { limit, .. } => assert_eq!(limit, 10),
            _ => panic!("Expected Updates command"),
        }
    }

    #[test]
    fn test_cli_data_flag_after_subcommand() {
        let cli = Cli::parse_from(["crm", "directors", "--data", "/tmp/ds.json", "-f", "json"]);
        assert_eq!(cli.data_file(), PathBuf::from("/tmp/ds.json"));
        match cli.command {
            Commands::Directors { format } => assert_eq!(format, OutputFormat::Json),
            _ => panic!("Expected Directors command"),
        }
    }

    #[test]
    fn test_cli_verbose() {
        let cli = Cli::parse_from(["crm", "-vvv", "init"]);
        assert_eq!(cli.verbose, 3);
        assert_eq!(cli.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_cli_help() {
        Cli::command().debug_assert();
    }
}
