//! Chain family identifiers for multi-chain systems.
//!
//! [`ChainType`] is a compact, stable tag naming the family of ledger a
//! value belongs to (Bitcoin-like, EVM-compatible, Solana, Cosmos-based),
//! with lookups between its numeric code and canonical lowercase name.
//!
//! ```
//! use chain_type::ChainType;
//!
//! let chain: ChainType = "solana".parse().unwrap();
//! assert_eq!(chain.code(), 2);
//! assert_eq!(chain.to_string(), "solana");
//! assert!(!ChainType::is_valid_code(9));
//! ```
//!
//! - [`chain`] — the [`ChainType`] registry and published constants.
//! - [`config`] — TOML configuration listing enabled chain families.
//! - [`error`] — the crate [`Error`] type.

pub mod chain;
pub mod config;
pub mod error;

pub use self::chain::{CHAIN_INFO_BYTES_SIZE, ChainType, SEPARATOR};
pub use self::error::Error;
