//! Configuration loading and default template generation.
//!
//! A configuration file lists the chain families a deployment enables:
//!
//! ```toml
//! chains = ["bitcoin", "evm", "solana", "cosmos"]
//! ```
//!
//! Entries may be canonical names or numeric codes. Unknown names, undefined
//! codes, and duplicate entries are rejected.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::ChainType;
use crate::error::Error;

/// Chain families enabled by a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainsConfig {
    /// Enabled chain families, in file order.
    #[serde(default)]
    pub chains: Vec<ChainType>,
}

impl ChainsConfig {
    /// Returns `true` if `chain` is enabled.
    #[must_use]
    pub fn is_enabled(&self, chain: ChainType) -> bool {
        self.chains.contains(&chain)
    }

    /// Parses a TOML document and checks it for duplicate entries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document does not parse or names a
    /// chain more than once.
    pub fn from_toml(content: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        let mut seen = HashSet::with_capacity(self.chains.len());
        for chain in &self.chains {
            if !seen.insert(*chain) {
                return Err(Error::config(format!("chain '{chain}' listed more than once")));
            }
        }
        Ok(())
    }
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<ChainsConfig, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve config path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    let config = ChainsConfig::from_toml(&content).map_err(|e| match e {
        Error::Config(msg) => Error::config_with(
            format!("failed to parse TOML config '{}'", config_path.display()),
            msg,
        ),
        other => other,
    })?;
    #[cfg(feature = "telemetry")]
    tracing::debug!(path = %config_path.display(), chains = config.chains.len(), "config loaded");
    Ok(config)
}

/// Generate a default TOML configuration template enabling every chain family.
#[must_use]
pub fn generate_default_config() -> String {
    let mut config = String::from(
        r"# Enabled chain families.
# Entries are canonical names or numeric codes:
#   0 = bitcoin, 1 = evm, 2 = solana, 3 = cosmos
chains = [",
    );
    let names: Vec<String> = ChainType::ALL
        .iter()
        .map(|chain| format!("\"{chain}\""))
        .collect();
    config.push_str(&names.join(", "));
    config.push_str("]\n");
    config
}
