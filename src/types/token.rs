// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token identifiers

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{hex, Address, U256};

use crate::codec::{from_dec, from_hex, to_hex};
use crate::errors::ShapeError;

/// Identifies a token on the plasma chain.
///
/// Numeric ids go on the wire as lowercase hex and addresses as `0x`-prefixed
/// lowercase hex. Symbols are the one exception to the hex rule: they are
/// forwarded verbatim for the operator to resolve.
///
/// # Examples
///
/// ```
/// use plasma_client::Token;
///
/// let id: Token = "10".parse().unwrap();
/// assert_eq!(id.to_wire(), "a");
///
/// let addr: Token = "0xAb5801a7D398351b8bE11C439e05C5B3259aeC9B".parse().unwrap();
/// assert!(addr.is_address());
/// assert_eq!(addr.to_wire(), "0xab5801a7d398351b8be11c439e05c5b3259aec9b");
///
/// let symbol: Token = "ETH".parse().unwrap();
/// assert_eq!(symbol.to_wire(), "ETH");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Numeric token id
    Id(U256),
    /// Token contract address
    Address(Address),
    /// Symbol resolved by the operator, e.g. `ETH`
    Symbol(String),
}

impl Token {
    /// Returns true if this token is address-shaped.
    pub fn is_address(&self) -> bool {
        matches!(self, Self::Address(_))
    }

    /// The numeric id, if this token has one.
    pub fn id(&self) -> Option<U256> {
        match self {
            Self::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// Form sent to the operator.
    ///
    /// Hex for ids and addresses; a [`Symbol`](Self::Symbol) is returned
    /// unchanged, so the result is not always hex.
    pub fn to_wire(&self) -> String {
        match self {
            Self::Id(id) => to_hex(*id),
            Self::Address(address) => format!("0x{}", hex::encode(address)),
            Self::Symbol(symbol) => symbol.clone(),
        }
    }
}

/// Returns true for `0x` followed by exactly 40 hex digits.
pub fn is_address_shaped(input: &str) -> bool {
    let Some(digits) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) else {
        return false;
    };
    digits.len() == 40 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

impl FromStr for Token {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ShapeError::InvalidToken(s.to_string()));
        }

        if is_address_shaped(trimmed) {
            return trimmed
                .parse::<Address>()
                .map(Self::Address)
                .map_err(|_| ShapeError::InvalidToken(s.to_string()));
        }

        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return from_dec(trimmed)
                .map(Self::Id)
                .map_err(|_| ShapeError::InvalidToken(s.to_string()));
        }

        if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
            return from_hex(trimmed)
                .map(Self::Id)
                .map_err(|_| ShapeError::InvalidToken(s.to_string()));
        }

        Ok(Self::Symbol(trimmed.to_string()))
    }
}

impl From<U256> for Token {
    fn from(id: U256) -> Self {
        Self::Id(id)
    }
}

impl From<u64> for Token {
    fn from(id: u64) -> Self {
        Self::Id(U256::from(id))
    }
}

impl From<Address> for Token {
    fn from(address: Address) -> Self {
        Self::Address(address)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Address(address) => write!(f, "0x{}", hex::encode(address)),
            Self::Symbol(symbol) => f.write_str(symbol),
        }
    }
}

/// Conversion into a [`Token`] that may fail on shape.
pub trait IntoToken {
    /// Performs the conversion.
    fn into_token(self) -> Result<Token, ShapeError>;
}

impl IntoToken for Token {
    fn into_token(self) -> Result<Token, ShapeError> {
        Ok(self)
    }
}

impl IntoToken for &Token {
    fn into_token(self) -> Result<Token, ShapeError> {
        Ok(self.clone())
    }
}

impl IntoToken for &str {
    fn into_token(self) -> Result<Token, ShapeError> {
        self.parse()
    }
}

impl IntoToken for String {
    fn into_token(self) -> Result<Token, ShapeError> {
        self.parse()
    }
}

impl IntoToken for &String {
    fn into_token(self) -> Result<Token, ShapeError> {
        self.parse()
    }
}

impl IntoToken for Address {
    fn into_token(self) -> Result<Token, ShapeError> {
        Ok(Token::Address(self))
    }
}

impl IntoToken for U256 {
    fn into_token(self) -> Result<Token, ShapeError> {
        Ok(Token::Id(self))
    }
}

impl IntoToken for u32 {
    fn into_token(self) -> Result<Token, ShapeError> {
        Ok(Token::Id(U256::from(self)))
    }
}

impl IntoToken for u64 {
    fn into_token(self) -> Result<Token, ShapeError> {
        Ok(Token::Id(U256::from(self)))
    }
}
