//! Public API behaviour of the chain type registry.

use chain_type::chain::{BITCOIN_STR, COSMOS_STR, EVM_STR, SOLANA_STR};
use chain_type::{CHAIN_INFO_BYTES_SIZE, ChainType, Error, SEPARATOR};

#[test]
fn published_constants() {
    assert_eq!(CHAIN_INFO_BYTES_SIZE, 8);
    assert_eq!(SEPARATOR, "|");
    assert_eq!(ChainType::BITCOIN.code(), 0);
    assert_eq!(ChainType::EVM.code(), 1);
    assert_eq!(ChainType::SOLANA.code(), 2);
    assert_eq!(ChainType::COSMOS.code(), 3);
    assert_eq!(ChainType::MAX_CODE, 3);
}

#[test]
fn code_round_trip() {
    for code in 0..=ChainType::MAX_CODE {
        let chain = ChainType::from_code_unchecked(code);
        let parsed: ChainType = chain.to_string().parse().unwrap();
        assert_eq!(parsed.code(), code);
    }
}

#[test]
fn name_round_trip() {
    for name in [BITCOIN_STR, EVM_STR, SOLANA_STR, COSMOS_STR] {
        let chain: ChainType = name.parse().unwrap();
        assert_eq!(chain.to_string(), name);
    }
}

#[test]
fn distinct_codes_have_distinct_names() {
    for a in ChainType::ALL {
        for b in ChainType::ALL {
            assert_eq!(a == b, a.as_str() == b.as_str());
        }
    }
}

#[test]
fn rejects_non_canonical_names() {
    for bad in ["Bitcoin", "EVM", "", "btc"] {
        assert!(
            matches!(bad.parse::<ChainType>(), Err(Error::InvalidChainType(_))),
            "{bad:?} should be rejected"
        );
    }
    assert_eq!(ChainType::try_from("bitcoin").unwrap().code(), 0);
}

#[test]
fn out_of_range_code_degrades_to_empty_name() {
    let chain = ChainType::from_code_unchecked(4);
    assert!(!chain.is_valid());
    assert_eq!(chain.to_string(), "");
    assert!(!ChainType::is_valid_code(255));
}

#[test]
fn solana_scenario() {
    let chain: ChainType = "solana".parse().unwrap();
    assert_eq!(chain.code(), 2);
    assert_eq!(ChainType::from_code_unchecked(2).to_string(), "solana");
}

#[test]
fn cosmos_scenario() {
    let mut chain = ChainType::default();
    chain.parse_into("cosmos").unwrap();
    assert!(ChainType::is_valid_code(chain.code()));
}

#[test]
fn invalid_code_scenario() {
    assert!(!ChainType::is_valid_code(9));
    assert_eq!(ChainType::from_code_unchecked(9).to_string(), "");
}

#[test]
fn error_messages() {
    let err = "Evm".parse::<ChainType>().unwrap_err();
    assert_eq!(err.to_string(), r#"invalid chain type: "Evm""#);
    let err = ChainType::try_from(7u8).unwrap_err();
    assert_eq!(err.to_string(), "invalid chain code: 7");
}

#[test]
fn usable_across_threads() {
    let handles: Vec<_> = ChainType::ALL
        .into_iter()
        .map(|chain| std::thread::spawn(move || chain.as_str().parse::<ChainType>().ok()))
        .collect();
    for (handle, chain) in handles.into_iter().zip(ChainType::ALL) {
        assert_eq!(handle.join().unwrap(), Some(chain));
    }
}
