//! Chain family identifiers and their canonical names.
//!
//! [`ChainType`] tags a value with the family of ledger it belongs to. Each
//! family has a compact numeric code and a canonical lowercase name:
//!
//! | Code | Name        | Constant              |
//! |------|-------------|-----------------------|
//! | 0    | `"bitcoin"` | [`ChainType::BITCOIN`] |
//! | 1    | `"evm"`     | [`ChainType::EVM`]     |
//! | 2    | `"solana"`  | [`ChainType::SOLANA`]  |
//! | 3    | `"cosmos"`  | [`ChainType::COSMOS`]  |
//!
//! Both lookup tables are `static` data; every operation here is a pure
//! table lookup and may be called from any thread.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Byte width reserved for a chain-info field in serialized layouts.
///
/// Published for serializers that embed a chain identifier; nothing in this
/// crate enforces it.
pub const CHAIN_INFO_BYTES_SIZE: usize = 8;

/// Separator token for composite keys that embed a chain name.
pub const SEPARATOR: &str = "|";

/// Canonical name of [`ChainType::BITCOIN`].
pub const BITCOIN_STR: &str = "bitcoin";
/// Canonical name of [`ChainType::EVM`].
pub const EVM_STR: &str = "evm";
/// Canonical name of [`ChainType::SOLANA`].
pub const SOLANA_STR: &str = "solana";
/// Canonical name of [`ChainType::COSMOS`].
pub const COSMOS_STR: &str = "cosmos";

/// Code to name, indexed by code.
static CHAIN_NAMES: [&str; ChainType::COUNT] = [BITCOIN_STR, EVM_STR, SOLANA_STR, COSMOS_STR];

/// Name to code.
static CHAINS_BY_NAME: [(&str, ChainType); ChainType::COUNT] = [
    (BITCOIN_STR, ChainType::BITCOIN),
    (EVM_STR, ChainType::EVM),
    (SOLANA_STR, ChainType::SOLANA),
    (COSMOS_STR, ChainType::COSMOS),
];

/// Family of distributed ledger a value refers to.
///
/// This is a thin wrapper over the `u8` code rather than a Rust `enum`:
/// consumers decoding raw bytes may hold a code outside the defined range
/// (see [`ChainType::from_code_unchecked`]), so validity is checked
/// explicitly with [`ChainType::is_valid`].
///
/// The default value is [`ChainType::BITCOIN`] (code 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChainType(u8);

impl ChainType {
    /// Bitcoin-like chains (code 0).
    pub const BITCOIN: Self = Self(0);
    /// EVM-compatible chains (code 1).
    pub const EVM: Self = Self(1);
    /// Solana (code 2).
    pub const SOLANA: Self = Self(2);
    /// Cosmos-based chains (code 3).
    pub const COSMOS: Self = Self(3);

    /// Number of defined chain families.
    pub const COUNT: usize = 4;

    /// Highest defined code.
    pub const MAX_CODE: u8 = Self::COSMOS.0;

    /// Every defined chain family, in code order.
    pub const ALL: [Self; Self::COUNT] = [Self::BITCOIN, Self::EVM, Self::SOLANA, Self::COSMOS];

    /// Wraps a raw code without checking it.
    ///
    /// The result may be outside the defined set; use [`ChainType::try_from`]
    /// for checked construction.
    #[must_use]
    pub const fn from_code_unchecked(code: u8) -> Self {
        Self(code)
    }

    /// Returns the numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Returns `true` iff `code` is in `0..=MAX_CODE`.
    #[must_use]
    pub const fn is_valid_code(code: u8) -> bool {
        code <= Self::MAX_CODE
    }

    /// Returns `true` iff this value is one of the defined chain families.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        Self::is_valid_code(self.0)
    }

    /// Returns the canonical name, or `""` for an undefined code.
    ///
    /// Note the asymmetry with [`FromStr`]: an unknown code degrades to the
    /// empty string instead of failing, while an unknown name is an error.
    /// Callers that need strict validation must call [`ChainType::is_valid`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        CHAIN_NAMES
            .get(usize::from(self.0))
            .copied()
            .unwrap_or_default()
    }

    /// Parses `s` into `self`, leaving `self` untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChainType`] if `s` is not a canonical name.
    pub fn parse_into(&mut self, s: &str) -> Result<(), Error> {
        *self = s.parse()?;
        Ok(())
    }
}

/// Writes the canonical name; an undefined code writes nothing.
impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = Error;

    /// Exact, case-sensitive match against the canonical names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CHAINS_BY_NAME
            .iter()
            .find_map(|&(name, chain)| (name == s).then_some(chain))
            .ok_or_else(|| Error::InvalidChainType(s.to_owned()))
    }
}

impl TryFrom<&str> for ChainType {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u8> for ChainType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if Self::is_valid_code(value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidChainCode(value))
        }
    }
}

impl From<ChainType> for u8 {
    fn from(value: ChainType) -> Self {
        value.0
    }
}

/// Serialised as the canonical name. Undefined codes are rejected rather
/// than written as an empty string.
impl Serialize for ChainType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.is_valid() {
            return Err(serde::ser::Error::custom(Error::InvalidChainCode(self.0)));
        }
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts either a canonical name or a numeric code.
impl<'de> Deserialize<'de> for ChainType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ChainTypeVisitor;

        impl Visitor<'_> for ChainTypeVisitor {
            type Value = ChainType;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a chain name (bitcoin, evm, solana, cosmos) or code 0-3")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u8::try_from(v)
                    .ok()
                    .and_then(|code| ChainType::try_from(code).ok())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u8::try_from(v)
                    .ok()
                    .and_then(|code| ChainType::try_from(code).ok())
                    .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        deserializer.deserialize_any(ChainTypeVisitor)
    }
}
