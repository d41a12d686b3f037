//! CLI definitions and command implementations for `chain-type`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod check;
pub mod init;
pub mod list;
pub mod lookup;

/// Inspect chain family codes and validate chain configuration files.
#[derive(Debug, Parser)]
#[command(name = "chain-type")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every chain family with its code and canonical name.
    List {
        /// Emit JSON instead of a plain table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Resolve a canonical name or numeric code.
    Lookup {
        /// Canonical name (e.g. `evm`) or numeric code (e.g. `1`).
        value: String,
    },

    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Load and validate a TOML configuration file.
    Check {
        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CONFIG", default_value = "config.toml")]
        config: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_lookup() {
        let cli = Cli::try_parse_from(["chain-type", "lookup", "evm"]).unwrap();
        assert!(matches!(cli.command, Commands::Lookup { ref value } if value == "evm"));
    }
}
