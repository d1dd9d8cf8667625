//! Command-line interface for the `strops` binary
//!
//! # Features
//! - `--config <path>` - TOML configuration file
//! - `--format <text|json>` - Output format
//! - `--marker <str>` / `--separator <str>` - Text layout overrides
//! - `--verbose` - Debug logging on stderr

use crate::config::DemoConfig;
use crate::report::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "strops")]
#[command(about = "Run the string-operations demo and print every result")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Closing field of each text line (empty to disable)
    #[arg(long)]
    pub marker: Option<String>,

    /// Separator between fields of a text line
    #[arg(long)]
    pub separator: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter to use when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Flags take precedence over file and environment settings
    pub fn apply(&self, config: &mut DemoConfig) {
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(marker) = &self.marker {
            config.report.marker = marker.clone();
        }
        if let Some(separator) = &self.separator {
            config.report.separator = separator.clone();
        }
    }
}
