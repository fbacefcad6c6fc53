// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password strength estimation, policy checks and generation", long_about = None)]
pub struct Args {
    /// Command to execute (starts the API server when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// API server port
    #[arg(long)]
    pub api_port: Option<u16>,

    /// API server bind address
    #[arg(long)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PolicyMode;

    #[test]
    fn parses_analyze_flags() {
        let args = Args::try_parse_from(["rust_passguard", "analyze", "hunter2", "--enhanced", "--level", "4", "--json"])
            .unwrap();
        match args.command {
            Some(CliCommand::Analyze(opts)) => {
                assert_eq!(opts.password.as_deref(), Some("hunter2"));
                assert!(opts.enhanced);
                assert_eq!(opts.level, Some(4));
                assert!(opts.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn mode_flag_parses_policy_names() {
        let args = Args::try_parse_from(["rust_passguard", "generate", "--mode", "Enhanced"]).unwrap();
        match args.command {
            Some(CliCommand::Generate { mode, enhanced, .. }) => {
                assert_eq!(mode, Some(PolicyMode::Enhanced));
                assert!(!enhanced);
            }
            other => panic!("unexpected command {:?}", other),
        }

        assert!(Args::try_parse_from(["rust_passguard", "analyze", "x", "--mode", "bogus"]).is_err());
        assert!(
            Args::try_parse_from(["rust_passguard", "analyze", "x", "--mode", "standard", "--enhanced"])
                .is_err()
        );
    }

    #[test]
    fn level_out_of_range_is_rejected() {
        assert!(Args::try_parse_from(["rust_passguard", "generate", "--level", "9"]).is_err());
    }

    #[test]
    fn no_command_means_serve() {
        let args = Args::try_parse_from(["rust_passguard", "--api-port", "8080"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.api_port, Some(8080));
    }
}
