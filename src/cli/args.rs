//! CLI argument structures

use crate::validation::ResultFilter;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check agent licensing for uploaded policy files
#[derive(Parser)]
#[command(name = "agent-licensing")]
#[command(about = "agent-licensing - Validate agent state licensing for policy uploads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a policy CSV against the reference licenses
    Validate {
        /// Policy CSV file
        file: PathBuf,

        /// JSON file of license records (overrides configuration)
        #[arg(short = 'r', long)]
        reference: Option<PathBuf>,

        /// Also write the results export to this path
        #[arg(long, value_name = "CSV")]
        export: Option<PathBuf>,

        /// Only list results in this view (all, licensed, needs-appointment, incomplete)
        #[arg(long, default_value = "all")]
        view: ResultFilter,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a policy CSV and write the results export
    Export {
        /// Policy CSV file
        file: PathBuf,

        /// JSON file of license records (overrides configuration)
        #[arg(short = 'r', long)]
        reference: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Run the HTTP service
    Serve {
        /// Address to listen on (overrides configuration)
        #[arg(long)]
        bind: Option<String>,

        /// JSON file of license records (overrides configuration)
        #[arg(short = 'r', long)]
        reference: Option<PathBuf>,
    },

    /// List licenses expiring soon
    Expiring {
        /// Window in days (overrides configuration)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        days: Option<u32>,

        /// Report date, YYYY-MM-DD (defaults to today)
        #[arg(long)]
        as_of: Option<NaiveDate>,

        /// JSON file of license records (overrides configuration)
        #[arg(short = 'r', long)]
        reference: Option<PathBuf>,
    },
}
