// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC 2.0 request and response envelopes.

use alloy_json_rpc::Id;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::method::RpcMethod;
use crate::codec::normalize_binary;
use crate::config::constants::JSONRPC_VERSION;
use crate::errors::{PlasmaError, RpcError, TransportError};

/// An outgoing JSON-RPC call.
///
/// Each request gets a random 128-bit id, so ids never collide across
/// concurrent calls or transport instances.
#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest {
    jsonrpc: &'static str,
    method: RpcMethod,
    params: Vec<Value>,
    id: Id,
}

impl RpcRequest {
    /// Builds a request with a fresh id.
    pub fn new(method: RpcMethod, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params,
            id: Id::String(Uuid::new_v4().to_string()),
        }
    }

    /// Method being called
    pub fn method(&self) -> RpcMethod {
        self.method
    }

    /// Positional parameters
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Request id
    pub fn id(&self) -> &Id {
        &self.id
    }
}

/// A decoded JSON-RPC response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcResponse {
    method: RpcMethod,
    envelope: Value,
}

impl RpcResponse {
    /// Parses a response body.
    ///
    /// Some operators send the envelope as a JSON-encoded string; that extra
    /// layer is unwrapped here.
    pub fn from_body(method: RpcMethod, body: &str) -> Result<Self, TransportError> {
        let parsed: Value = serde_json::from_str(body)
            .map_err(|e| TransportError::malformed(method.as_str(), e))?;
        Self::from_value(method, parsed)
    }

    /// Wraps an already-decoded envelope, unwrapping a JSON-encoded string.
    pub fn from_value(method: RpcMethod, value: Value) -> Result<Self, TransportError> {
        let envelope = match value {
            Value::String(encoded) => serde_json::from_str(&encoded)
                .map_err(|e| TransportError::malformed(method.as_str(), e))?,
            other => other,
        };

        if !envelope.is_object() {
            return Err(TransportError::malformed(
                method.as_str(),
                "response is not a JSON object",
            ));
        }
        Ok(Self { method, envelope })
    }

    /// Method this response answers
    pub fn method(&self) -> RpcMethod {
        self.method
    }

    /// Returns true if the envelope carries an error indicator.
    pub fn is_error(&self) -> bool {
        RpcError::from_envelope(&self.envelope).is_some()
    }

    /// The raw envelope
    pub fn envelope(&self) -> &Value {
        &self.envelope
    }

    /// Extracts the result, failing on an error indicator.
    ///
    /// With `convert_binary` set, byte buffers in the result are replaced by
    /// their hex encoding.
    pub fn into_result(self, convert_binary: bool) -> Result<Value, PlasmaError> {
        if let Some(error) = RpcError::from_envelope(&self.envelope) {
            return Err(error.into());
        }

        let Value::Object(mut fields) = self.envelope else {
            return Err(TransportError::malformed(
                self.method.as_str(),
                "response is not a JSON object",
            )
            .into());
        };
        let result = fields.remove("result").ok_or_else(|| {
            TransportError::malformed(self.method.as_str(), "missing result member")
        })?;

        Ok(if convert_binary {
            normalize_binary(result)
        } else {
            result
        })
    }
}
