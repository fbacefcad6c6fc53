// src/cli/commands.rs
use clap::{Args, Subcommand};

use crate::models::PolicyMode;

#[derive(Args, Debug, Clone)]
pub struct PasswordOptions {
    /// Password to check (prompted for when omitted)
    pub password: Option<String>,

    /// Policy mode, standard or enhanced
    #[arg(long)]
    pub mode: Option<PolicyMode>,

    /// Judge against the enhanced policy (same as --mode enhanced)
    #[arg(long, conflicts_with = "mode")]
    pub enhanced: bool,

    /// Security level, 1 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub level: Option<u8>,

    /// Print JSON instead of a report
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze a password
    Analyze(PasswordOptions),

    /// Suggest improvements and alternatives for a password
    Suggest(PasswordOptions),

    /// Generate passwords
    Generate {
        /// Security level, 1 to 5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: Option<u8>,

        /// Policy mode, standard or enhanced
        #[arg(long)]
        mode: Option<PolicyMode>,

        /// Generate for the enhanced policy (same as --mode enhanced)
        #[arg(long, conflicts_with = "mode")]
        enhanced: bool,

        /// How many passwords to generate
        #[arg(long, default_value_t = 1)]
        count: usize,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a list of common passwords
    Benchmark {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API
    Serve,
}
