// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Inbound binary-to-hex normalization.

use alloy_primitives::{hex, Bytes};
use serde_json::{Map, Number, Value};

/// Value of the `type` field that marks a serialized byte buffer.
pub const BUFFER_TAG: &str = "Buffer";

/// A JSON-RPC result value with raw byte buffers recognised as their own variant.
///
/// Converting from [`serde_json::Value`] classifies every node once, so the
/// normalization pass is an exhaustive match instead of a probe for a marker
/// field at each step. Only a well-formed marker (`type == "Buffer"` and a
/// `data` array of bytes) becomes [`RpcValue::Binary`]; anything else stays a
/// mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcValue {
    /// JSON `null`
    Null,
    /// JSON boolean
    Bool(bool),
    /// JSON number
    Number(Number),
    /// JSON string
    String(String),
    /// JSON array
    Sequence(Vec<RpcValue>),
    /// JSON object, fields in `serde_json` map order (sorted by key)
    Mapping(Vec<(String, RpcValue)>),
    /// A raw byte buffer
    Binary(Bytes),
}

impl RpcValue {
    /// Returns true if this node or any descendant is a byte buffer.
    pub fn contains_binary(&self) -> bool {
        match self {
            Self::Binary(_) => true,
            Self::Sequence(items) => items.iter().any(Self::contains_binary),
            Self::Mapping(fields) => fields.iter().any(|(_, v)| v.contains_binary()),
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::String(_) => false,
        }
    }

    /// Converts back to JSON, encoding every byte buffer as lowercase hex.
    pub fn into_hex_json(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Number(n) => Value::Number(n),
            Self::String(s) => Value::String(s),
            Self::Binary(bytes) => Value::String(hex::encode(&bytes)),
            Self::Sequence(items) => {
                Value::Array(items.into_iter().map(Self::into_hex_json).collect())
            }
            Self::Mapping(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, value.into_hex_json()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for RpcValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => match buffer_bytes(&map) {
                Some(bytes) => Self::Binary(bytes),
                None => Self::Mapping(
                    map.into_iter()
                        .map(|(key, value)| (key, Self::from(value)))
                        .collect(),
                ),
            },
        }
    }
}

/// Replaces every serialized byte buffer in `value` with its hex encoding.
///
/// Recurses into arrays element-wise and objects field-wise; all other nodes
/// are returned unchanged. Applying it to its own output is a no-op.
pub fn normalize_binary(value: Value) -> Value {
    RpcValue::from(value).into_hex_json()
}

/// Serializes bytes the way the operator does, as a `Buffer` marker object.
pub fn buffer_marker(bytes: &[u8]) -> Value {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::String(BUFFER_TAG.to_string()));
    map.insert(
        "data".to_string(),
        Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    );
    Value::Object(map)
}

fn buffer_bytes(map: &Map<String, Value>) -> Option<Bytes> {
    if map.get("type").and_then(Value::as_str) != Some(BUFFER_TAG) {
        return None;
    }
    map.get("data")?
        .as_array()?
        .iter()
        .map(|b| b.as_u64().and_then(|b| u8::try_from(b).ok()))
        .collect::<Option<Vec<u8>>>()
        .map(Bytes::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_top_level_buffer() {
        let value = buffer_marker(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(normalize_binary(value), json!("deadbeef"));
    }

    #[test]
    fn test_nested_buffers() {
        let value = json!({
            "block": 3,
            "txs": [
                { "hash": buffer_marker(&[1, 2]), "raw": { "bytes": buffer_marker(&[255]) } },
                "already-hex"
            ],
            "root": buffer_marker(&[]),
        });
        let expected = json!({
            "block": 3,
            "txs": [
                { "hash": "0102", "raw": { "bytes": "ff" } },
                "already-hex"
            ],
            "root": "",
        });
        assert_eq!(normalize_binary(value), expected);
    }

    #[test]
    fn test_malformed_marker_is_left_alone() {
        let value = json!({ "type": "Buffer", "data": [1, 256] });
        assert_eq!(normalize_binary(value.clone()), value);

        let value = json!({ "type": "Buffer", "data": "0102" });
        assert_eq!(normalize_binary(value.clone()), value);

        let value = json!({ "type": "Other", "data": [1] });
        assert_eq!(normalize_binary(value.clone()), value);
    }

    #[test]
    fn test_idempotent() {
        let value = json!([buffer_marker(&[9, 10]), { "x": buffer_marker(&[11]) }, null, true]);
        let once = normalize_binary(value);
        let twice = normalize_binary(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_contains_binary() {
        assert!(RpcValue::from(json!([{ "a": buffer_marker(&[1]) }])).contains_binary());
        assert!(!RpcValue::from(json!([{ "a": "01" }])).contains_binary());
    }

    #[test]
    fn test_mapping_follows_map_key_order() {
        let value: Value = serde_json::from_str(r#"{ "zeta": 1, "alpha": 2, "mid": 3 }"#).unwrap();
        let map_order: Vec<String> = value.as_object().unwrap().keys().cloned().collect();

        let RpcValue::Mapping(fields) = RpcValue::from(value) else {
            panic!("expected mapping");
        };
        let keys: Vec<String> = fields.into_iter().map(|(key, _)| key).collect();
        assert_eq!(keys, map_order);
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_scalars_unchanged() {
        for value in [json!(null), json!(false), json!(1.5), json!("x"), json!({})] {
            assert_eq!(normalize_binary(value.clone()), value);
        }
    }
}
