// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Outbound numeric-to-hex normalization.

use alloy_primitives::U256;

use crate::errors::ShapeError;

/// Renders a value as lowercase hex with no `0x` prefix (`0` for zero).
#[must_use]
pub fn to_hex(value: U256) -> String {
    format!("{value:x}")
}

/// Parses a hex string, with or without a `0x` prefix.
pub fn from_hex(input: &str) -> Result<U256, ShapeError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ShapeError::InvalidHex {
            input: input.to_string(),
            reason: "expected hexadecimal digits".to_string(),
        });
    }

    U256::from_str_radix(digits, 16).map_err(|e| ShapeError::InvalidHex {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a decimal string of ASCII digits.
pub fn from_dec(input: &str) -> Result<U256, ShapeError> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ShapeError::InvalidAmount {
            input: input.to_string(),
            reason: "expected decimal digits".to_string(),
        });
    }

    U256::from_str_radix(input, 10).map_err(|e| ShapeError::InvalidAmount {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
