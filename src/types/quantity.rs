// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Serde helpers for numeric quantities on the wire.
//!
//! The operator writes big numbers as hex strings (with or without `0x`) and
//! small ones, like block numbers, as plain JSON integers. These helpers accept
//! both and always write lowercase hex.

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

use crate::codec::{from_dec, from_hex, to_hex};
use crate::errors::ShapeError;

pub(crate) fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_hex(*value))
}

pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    let value = Value::deserialize(deserializer)?;
    parse_quantity(&value).map_err(serde::de::Error::custom)
}

/// Reads a hex string or a non-negative JSON integer.
pub(crate) fn parse_quantity(value: &Value) -> Result<U256, ShapeError> {
    match value {
        Value::String(s) => from_hex(s),
        Value::Number(n) => from_dec(&n.to_string()),
        other => Err(ShapeError::InvalidHex {
            input: other.to_string(),
            reason: "expected a hex string or an integer".to_string(),
        }),
    }
}

/// Reads a block number given as a JSON integer or a hex string.
pub(crate) fn parse_block_number(value: &Value) -> Result<u64, ShapeError> {
    if let Some(number) = value.as_u64() {
        return Ok(number);
    }
    let quantity = parse_quantity(value)?;
    u64::try_from(quantity).map_err(|_| ShapeError::InvalidHex {
        input: value.to_string(),
        reason: "block number does not fit in 64 bits".to_string(),
    })
}

pub(crate) mod option {
    use super::*;

    pub(crate) fn serialize<S: Serializer>(
        value: &Option<U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => parse_quantity(&value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
