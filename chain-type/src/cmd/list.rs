//! `chain-type list` command — print every chain family.

use chain_type::{ChainType, Error};
use serde::Serialize;

#[derive(Serialize)]
struct Entry {
    code: u8,
    name: &'static str,
}

/// Render the registry as a plain table or a JSON array.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub fn render(json: bool) -> Result<String, Error> {
    if json {
        let entries: Vec<Entry> = ChainType::ALL
            .iter()
            .map(|chain| Entry {
                code: chain.code(),
                name: chain.as_str(),
            })
            .collect();
        return Ok(serde_json::to_string_pretty(&entries)?);
    }
    Ok(ChainType::ALL
        .iter()
        .map(|chain| format!("{}\t{chain}\n", chain.code()))
        .collect())
}

/// Execute the `list` command.
///
/// # Errors
///
/// Returns an error if rendering fails.
#[allow(clippy::print_stdout)]
pub fn run(json: bool) -> Result<(), Error> {
    let output = render(json)?;
    print!("{output}");
    if json {
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_table() {
        assert_eq!(
            render(false).unwrap(),
            "0\tbitcoin\n1\tevm\n2\tsolana\n3\tcosmos\n"
        );
    }

    #[test]
    fn json_array() {
        let value: serde_json::Value = serde_json::from_str(&render(true).unwrap()).unwrap();
        assert_eq!(value[2]["code"], 2);
        assert_eq!(value[2]["name"], "solana");
        assert_eq!(value.as_array().map(Vec::len), Some(ChainType::COUNT));
    }
}
