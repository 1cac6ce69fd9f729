// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC over HTTP POST.

use std::{
    future::poll_fn,
    task::{Context, Poll},
    time::Duration,
};

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;
use tower::{Layer, Service};
use url::Url;

use super::envelope::{RpcRequest, RpcResponse};
use super::logging::{LoggingLayer, LoggingService};
use super::method::RpcMethod;
use super::Transport;
use crate::config::{constants::DEFAULT_TIMEOUT_SECS, TransportConfig};
use crate::errors::{PlasmaError, TransportError};

/// A Tower service that POSTs one JSON-RPC envelope per call.
///
/// Stateless apart from the pooled HTTP client, so clones can run calls
/// concurrently. Every call is bounded: one that exceeds `timeout` fails with
/// [`TransportError::Timeout`].
#[derive(Clone, Debug)]
pub struct HttpService {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpService {
    /// Creates a service posting to `endpoint`.
    pub fn new(endpoint: Url, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout,
        }
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upper bound on a single call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Service<RpcRequest> for HttpService {
    type Response = RpcResponse;
    type Error = TransportError;
    type Future = BoxFuture<'static, Result<RpcResponse, TransportError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: RpcRequest) -> Self::Future {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let timeout = self.timeout;

        Box::pin(async move {
            let method = request.method();
            tokio::time::timeout(timeout, post(client, endpoint, request))
                .await
                .map_err(|_| TransportError::Timeout {
                    method: method.as_str().to_string(),
                })?
        })
    }
}

async fn post(
    client: reqwest::Client,
    endpoint: Url,
    request: RpcRequest,
) -> Result<RpcResponse, TransportError> {
    let method = request.method();

    let response = client
        .post(endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| classify(method, e))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| classify(method, e))?;

    match RpcResponse::from_body(method, &body) {
        Ok(decoded) => Ok(decoded),
        // A JSON-RPC error body takes precedence over the status line
        Err(_) if !status.is_success() => Err(TransportError::HttpStatus {
            method: method.as_str().to_string(),
            status: status.as_u16(),
        }),
        Err(e) => Err(e),
    }
}

fn classify(method: RpcMethod, error: reqwest::Error) -> TransportError {
    if error.is_timeout() {
        TransportError::Timeout {
            method: method.as_str().to_string(),
        }
    } else {
        TransportError::connection(method.as_str(), error)
    }
}

/// [`Transport`] for operators exposing JSON-RPC over HTTP.
///
/// # Example
///
/// ```rust,ignore
/// use plasma_client::{HttpTransport, TransportConfig};
///
/// let transport = HttpTransport::new(&TransportConfig::new("http://localhost:9898"))?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpTransport {
    service: LoggingService<HttpService>,
    endpoint: Url,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::InvalidEndpoint`] if the endpoint is not a URL.
    ///
    /// Without a configured timeout, calls are bounded by
    /// [`DEFAULT_TIMEOUT_SECS`].
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        let endpoint: Url = config
            .endpoint
            .parse()
            .map_err(|e| TransportError::InvalidEndpoint(format!("{}: {e}", config.endpoint)))?;

        let mut layer = LoggingLayer::new();
        if config.log_requests {
            layer = layer.with_request_logging();
        }
        if config.log_responses {
            layer = layer.with_response_logging();
        }

        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        let service = layer.layer(HttpService::new(endpoint.clone(), timeout));
        Ok(Self {
            service,
            endpoint,
            timeout,
        })
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Upper bound on a single call
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn invoke(
        &self,
        method: RpcMethod,
        params: Vec<Value>,
        convert_binary: bool,
    ) -> Result<Value, PlasmaError> {
        let mut service = self.service.clone();
        poll_fn(|cx| service.poll_ready(cx)).await?;

        let response = service.call(RpcRequest::new(method, params)).await?;
        response.into_result(convert_binary)
    }
}
