//! Chain Type CLI
//!
//! Inspects chain family codes and validates chain configuration files.
//!
//! ```sh
//! chain-type list             # Print every code and name
//! chain-type lookup evm       # Resolve a name or code
//! chain-type init             # Generate default config.toml
//! chain-type check            # Validate config.toml
//! ```

mod cmd;
#[cfg(feature = "telemetry")]
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};
use dotenvy::dotenv;

#[cfg(feature = "telemetry")]
use crate::telemetry::Telemetry;

#[allow(clippy::print_stderr)]
fn main() {
    dotenv().ok();

    #[cfg(feature = "telemetry")]
    Telemetry::new().with_log_level("warn").register();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { json } => cmd::list::run(json),
        Commands::Lookup { value } => cmd::lookup::run(&value),
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Check { config } => cmd::check::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
