// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token amounts

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::codec::{from_dec, from_hex, to_hex};
use crate::errors::ShapeError;

/// An amount of a token in its smallest unit.
///
/// Backed by a 256-bit unsigned integer so values never pass through a float
/// or a machine-width integer. On the wire it is a lowercase hex string.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use plasma_client::Amount;
///
/// let amount: Amount = "100".parse().unwrap();
/// assert_eq!(amount.as_u256(), U256::from(100));
/// assert_eq!(amount.to_wire(), "64");
///
/// assert!("-1".parse::<Amount>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(#[serde(with = "super::quantity")] U256);

impl Amount {
    /// Zero amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new amount
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Hex form sent to the operator
    pub fn to_wire(&self) -> String {
        to_hex(self.0)
    }
}

impl FromStr for Amount {
    type Err = ShapeError;

    /// Parses a decimal string, or hex when prefixed with `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(ShapeError::InvalidAmount {
                input: s.to_string(),
                reason: "amount must be non-negative".to_string(),
            });
        }
        let value = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
            from_hex(trimmed).map_err(|e| ShapeError::InvalidAmount {
                input: s.to_string(),
                reason: e.to_string(),
            })?
        } else {
            from_dec(trimmed)?
        };
        Ok(Self(value))
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl From<Amount> for U256 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Conversion into an [`Amount`] that may fail on shape.
///
/// Façade methods accept `impl IntoAmount`, so callers can pass integers,
/// strings or `U256` values directly. Invalid input fails before any RPC is
/// issued.
pub trait IntoAmount {
    /// Performs the conversion.
    fn into_amount(self) -> Result<Amount, ShapeError>;
}

impl IntoAmount for Amount {
    fn into_amount(self) -> Result<Amount, ShapeError> {
        Ok(self)
    }
}

impl IntoAmount for U256 {
    fn into_amount(self) -> Result<Amount, ShapeError> {
        Ok(Amount(self))
    }
}

macro_rules! impl_into_amount_unsigned {
    ($($t:ty),*) => {$(
        impl IntoAmount for $t {
            fn into_amount(self) -> Result<Amount, ShapeError> {
                Ok(Amount(U256::from(self)))
            }
        }
    )*};
}

macro_rules! impl_into_amount_signed {
    ($($t:ty),*) => {$(
        impl IntoAmount for $t {
            fn into_amount(self) -> Result<Amount, ShapeError> {
                if self < 0 {
                    return Err(ShapeError::NegativeAmount(i128::from(self)));
                }
                Ok(Amount(U256::from(self.unsigned_abs())))
            }
        }
    )*};
}

impl_into_amount_unsigned!(u8, u16, u32, u64, u128, usize);
impl_into_amount_signed!(i8, i16, i32, i64);

impl IntoAmount for &str {
    fn into_amount(self) -> Result<Amount, ShapeError> {
        self.parse()
    }
}

impl IntoAmount for String {
    fn into_amount(self) -> Result<Amount, ShapeError> {
        self.parse()
    }
}

impl IntoAmount for &String {
    fn into_amount(self) -> Result<Amount, ShapeError> {
        self.parse()
    }
}
