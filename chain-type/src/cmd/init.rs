//! `chain-type init` command — generate a default TOML configuration file.

use std::fs;
use std::path::Path;

use chain_type::Error;
use chain_type::config::generate_default_config;

/// Execute the `init` command.
///
/// Writes a default TOML configuration template to `output`. Refuses to
/// overwrite an existing file unless `force` is `true`.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// writing fails.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    if output.exists() && !force {
        return Err(Error::config(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )));
    }

    let content = generate_default_config();
    fs::write(output, content)
        .map_err(|e| Error::config_with(format!("failed to write '{}'", output.display()), e))?;

    #[cfg(feature = "telemetry")]
    tracing::info!(path = %output.display(), "default config written");
    eprintln!("Config file written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_type::config::load_config;

    #[test]
    fn refuses_to_overwrite_without_force() {
        let path = std::env::temp_dir().join(format!("chain-type-init-{}.toml", std::process::id()));
        run(&path, true).unwrap();
        assert!(matches!(run(&path, false), Err(Error::Config(_))));
        let loaded = load_config(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap().chains.len(), chain_type::ChainType::COUNT);
    }
}
