//! Command-line argument definitions for the course catalog CLI
//!
//! This module defines the CLI interface using the clap derive API. The
//! three read operations of the catalog are exposed as subcommands; with no
//! subcommand the tool drops into the interactive menu.

use crate::app::services::catalog::HeaderPolicy;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the course catalog
///
/// Loads course records from a comma-delimited text file into a sorted
/// in-memory catalog and serves ordered listing and point lookup queries.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "course-catalog",
    version,
    about = "Load course records from a delimited file and query them in sorted order",
    long_about = "Loads course records from a comma-delimited text file into an in-memory \
                  sorted catalog, then lists all courses in ascending identifier order or \
                  looks up a single course with its prerequisites. Run without a subcommand \
                  for the interactive menu."
)]
pub struct Args {
    /// Path to the course file
    ///
    /// Defaults to coursesFile.csv in the current directory (or the path
    /// set in the config file).
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        global = true,
        help = "Path to the course file"
    )]
    pub file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/course-catalog/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// How to treat the first non-blank line of the course file
    #[arg(
        long = "header-policy",
        value_enum,
        value_name = "POLICY",
        global = true,
        help = "Header handling: auto (detect), parse (treat as record), skip (always drop)"
    )]
    pub header_policy: Option<HeaderPolicyArg>,

    /// Match course ids byte-exactly instead of upper-casing the query
    #[arg(
        long = "exact-case",
        global = true,
        help = "Disable upper-casing of queried course ids before lookup"
    )]
    pub exact_case: bool,

    /// Output format for query results and load reports
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Load the course file and list every course in sorted order
    List,
    /// Load the course file and look up one course by identifier
    Find {
        /// Course identifier to look up (e.g. CSCI300)
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// Run the interactive menu (default when no subcommand is given)
    Interactive,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

/// Header policy as a CLI value
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum HeaderPolicyArg {
    /// Skip the first line only when it looks like a header row
    Auto,
    /// Parse the first line as an ordinary record
    Parse,
    /// Always skip the first line
    Skip,
}

impl From<HeaderPolicyArg> for HeaderPolicy {
    fn from(arg: HeaderPolicyArg) -> Self {
        match arg {
            HeaderPolicyArg::Auto => Self::Auto,
            HeaderPolicyArg::Parse => Self::Parse,
            HeaderPolicyArg::Skip => Self::Skip,
        }
    }
}

impl Args {
    /// Validate the arguments for consistency
    ///
    /// The course file itself is deliberately not checked here: open
    /// failures are reported by the load operation, which returns a typed
    /// error and leaves the catalog unchanged.
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(Commands::Find { course_id }) = &self.command {
            if course_id.trim().is_empty() {
                return Err(Error::configuration("course id cannot be empty"));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
