//! `chain-type check` command — load and validate a configuration file.

use std::path::Path;

use chain_type::Error;
use chain_type::config::load_config;

/// Execute the `check` command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or is invalid.
#[allow(clippy::print_stdout)]
pub fn run(config_path: &Path) -> Result<(), Error> {
    let config = load_config(config_path)?;
    if config.chains.is_empty() {
        #[cfg(feature = "telemetry")]
        tracing::warn!(path = %config_path.display(), "no chains enabled");
    }
    for chain in &config.chains {
        println!("{}\t{chain}", chain.code());
    }
    Ok(())
}
