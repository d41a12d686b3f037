//! `chain-type lookup` command — resolve a name or numeric code.

use chain_type::{ChainType, Error};

/// Resolve `value` as a numeric code if it parses as one, else as a name.
///
/// # Errors
///
/// Returns [`Error::InvalidChainCode`] for an undefined code and
/// [`Error::InvalidChainType`] for an unknown name.
pub fn resolve(value: &str) -> Result<ChainType, Error> {
    match value.parse::<u8>() {
        Ok(code) => ChainType::try_from(code),
        Err(_) => value.parse(),
    }
}

/// Execute the `lookup` command.
///
/// # Errors
///
/// Returns an error if `value` does not name a defined chain family.
#[allow(clippy::print_stdout)]
pub fn run(value: &str) -> Result<(), Error> {
    let chain = resolve(value)?;
    #[cfg(feature = "telemetry")]
    tracing::debug!(input = value, code = chain.code(), "resolved chain");
    println!("{}\t{chain}", chain.code());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_codes_and_names() {
        assert_eq!(resolve("3").unwrap(), ChainType::COSMOS);
        assert_eq!(resolve("bitcoin").unwrap(), ChainType::BITCOIN);
    }

    #[test]
    fn rejects_unknown_input() {
        assert!(matches!(resolve("9"), Err(Error::InvalidChainCode(9))));
        assert!(matches!(resolve("Bitcoin"), Err(Error::InvalidChainType(_))));
        assert!(matches!(resolve("300"), Err(Error::InvalidChainType(_))));
    }
}
