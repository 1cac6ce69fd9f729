// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by the operator through the JSON-RPC error indicator.

use serde_json::Value;

/// An explicit error returned by the operator.
///
/// The message is kept exactly as the server supplied it and is the whole of
/// the `Display` output, so callers can match on it or show it unchanged.
///
/// # Examples
///
/// ```rust
/// use plasma_client::RpcError;
///
/// let error = RpcError::new("insufficient ranges").with_code(-32000);
/// assert_eq!(error.to_string(), "insufficient ranges");
/// assert_eq!(error.code(), Some(-32000));
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct RpcError {
    code: Option<i64>,
    message: String,
    data: Option<Value>,
}

impl RpcError {
    /// Creates an error carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            data: None,
        }
    }

    /// Attaches the JSON-RPC error code.
    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Attaches the optional `data` member of the error object.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Error for a method the responder does not know.
    pub fn method_not_found(method: &str) -> Self {
        Self::new(format!("Method not found: {method}")).with_code(-32601)
    }

    /// The server-supplied message, verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The JSON-RPC error code, if the server sent one.
    pub fn code(&self) -> Option<i64> {
        self.code
    }

    /// The `data` member of the error object, if any.
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Extracts an error from a JSON-RPC response envelope.
    ///
    /// Returns `None` when the envelope carries no error indicator. The
    /// indicator is a non-null, non-`false` `error` member; its message is taken
    /// from `error.message`, from `error` itself when it is a string, or from
    /// a top-level `message` member.
    pub(crate) fn from_envelope(envelope: &Value) -> Option<Self> {
        let indicator = envelope.get("error")?;
        if indicator.is_null() || indicator == &Value::Bool(false) {
            return None;
        }

        let message = indicator
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| indicator.as_str())
            .or_else(|| envelope.get("message").and_then(Value::as_str))
            .unwrap_or("unknown JSON-RPC error");

        let mut error = Self::new(message);
        if let Some(code) = indicator.get("code").and_then(Value::as_i64) {
            error = error.with_code(code);
        }
        if let Some(data) = indicator.get("data").filter(|d| !d.is_null()) {
            error = error.with_data(data.clone());
        }
        Some(error)
    }
}
