use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// AWS RDS IOPS Calculator - size RDS storage for a target IOPS
#[derive(Parser, Debug)]
#[command(name = "rds-iops-calc")]
#[command(about = "Work out minimum RDS volume size and disk throughput for a desired IOPS")]
#[command(version)]
pub struct Cli {
    /// Accept any provisioned IOPS value and round it up to the next 1000
    /// instead of requiring an exact multiple of 1000.
    #[arg(long, global = true)]
    pub relaxed_iops: bool,

    /// Never clear the terminal between screens
    #[arg(long, global = true)]
    pub no_clear: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Save the validated selection as a plan file (interactive session or `calc`)
    #[arg(long, value_name = "PATH")]
    pub save_plan: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate requirements without prompting
    Calc {
        /// Plan file to read the selection from
        #[arg(short, long, conflicts_with_all = ["engine", "storage", "iops", "page_size"])]
        config: Option<PathBuf>,

        /// Engine menu number (1-6) or id (aurora, mariadb, sqlserver, mysql, oracle, postgresql)
        #[arg(short, long, required_unless_present = "config")]
        engine: Option<String>,

        /// Storage class (1/gp2/general-purpose or 2/io1/provisioned)
        #[arg(short, long, required_unless_present = "config")]
        storage: Option<String>,

        /// Desired IOPS
        #[arg(short, long, required_unless_present = "config")]
        iops: Option<String>,

        /// Page size in KB (default: the engine's page size)
        #[arg(short, long)]
        page_size: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the supported database engines
    Engines {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Default tracing filter for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
