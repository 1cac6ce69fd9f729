// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tower-based logging layer for JSON-RPC transports.
//!
//! This module implements a logging layer that uses `tracing` to record
//! RPC request/response information for debugging and observability.

use std::{
    task::{Context, Poll},
    time::Instant,
};

use futures::future::BoxFuture;
use tower::Layer;
use tracing::{debug, trace, warn, Instrument};

use super::envelope::{RpcRequest, RpcResponse};
use crate::errors::TransportError;

/// A Tower layer that adds logging/tracing to RPC requests.
///
/// This layer wraps each RPC request in a tracing span and logs
/// timing information, request details, and any errors that occur.
///
/// # Example
///
/// ```rust,ignore
/// use plasma_client::transport::{HttpService, LoggingLayer};
/// use tower::Layer;
///
/// let service = LoggingLayer::new()
///     .verbose()
///     .layer(HttpService::new(endpoint, Duration::from_secs(30)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LoggingLayer {
    /// Whether to log request payloads (can be verbose)
    log_requests: bool,
    /// Whether to log response payloads (can be verbose)
    log_responses: bool,
}

impl LoggingLayer {
    /// Creates a new logging layer with default settings.
    ///
    /// By default, only timing and errors are logged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables logging of request payloads.
    ///
    /// Warning: This can be verbose for large requests.
    pub fn with_request_logging(mut self) -> Self {
        self.log_requests = true;
        self
    }

    /// Enables logging of response payloads.
    ///
    /// Warning: This can be verbose for large responses.
    pub fn with_response_logging(mut self) -> Self {
        self.log_responses = true;
        self
    }

    /// Enables logging of both request and response payloads.
    pub fn verbose(mut self) -> Self {
        self.log_requests = true;
        self.log_responses = true;
        self
    }
}

impl<S> Layer<S> for LoggingLayer {
    type Service = LoggingService<S>;

    fn layer(&self, service: S) -> Self::Service {
        LoggingService {
            service,
            log_requests: self.log_requests,
            log_responses: self.log_responses,
        }
    }
}

/// A Tower service that logs RPC requests and responses.
#[derive(Clone, Debug)]
pub struct LoggingService<S> {
    service: S,
    log_requests: bool,
    log_responses: bool,
}

impl<S> tower::Service<RpcRequest> for LoggingService<S>
where
    S: tower::Service<RpcRequest, Response = RpcResponse, Error = TransportError>
        + Clone
        + Send
        + 'static,
    S::Future: Send,
{
    type Response = RpcResponse;
    type Error = TransportError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&mut self, request: RpcRequest) -> Self::Future {
        let log_requests = self.log_requests;
        let log_responses = self.log_responses;
        let method = request.method();

        let span = tracing::info_span!(
            "rpc_call",
            method = %method,
            duration_ms = tracing::field::Empty,
        );

        if log_requests {
            span.in_scope(|| trace!(request = ?request, "RPC request"));
        } else {
            span.in_scope(|| debug!("RPC request: {method}"));
        }

        let future = self.service.call(request);
        let record_span = span.clone();

        Box::pin(
            async move {
                let start = Instant::now();
                let result = future.await;
                let duration = start.elapsed();

                record_span.record("duration_ms", duration.as_millis() as u64);

                match &result {
                    Ok(response) if response.is_error() => {
                        warn!(
                            duration_ms = %duration.as_millis(),
                            "RPC error response: {method}"
                        );
                    }
                    Ok(response) => {
                        if log_responses {
                            trace!(
                                response = ?response.envelope(),
                                duration_ms = %duration.as_millis(),
                                "RPC response"
                            );
                        } else {
                            debug!(
                                duration_ms = %duration.as_millis(),
                                "RPC response: {method}"
                            );
                        }
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            duration_ms = %duration.as_millis(),
                            "RPC transport error: {method}"
                        );
                    }
                }

                result
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::RpcMethod;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };
    use tower::Service;

    #[derive(Clone)]
    struct Echo {
        calls: Arc<AtomicUsize>,
    }

    impl tower::Service<RpcRequest> for Echo {
        type Response = RpcResponse;
        type Error = TransportError;
        type Future = BoxFuture<'static, Result<RpcResponse, TransportError>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, request: RpcRequest) -> Self::Future {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let method = request.method();
            Box::pin(async move {
                RpcResponse::from_value(method, serde_json::json!({ "id": "1", "result": 1 }))
            })
        }
    }

    #[test]
    fn test_logging_layer_default() {
        let layer = LoggingLayer::new();
        assert!(!layer.log_requests);
        assert!(!layer.log_responses);
    }

    #[test]
    fn test_logging_layer_with_request_logging() {
        let layer = LoggingLayer::new().with_request_logging();
        assert!(layer.log_requests);
        assert!(!layer.log_responses);
    }

    #[test]
    fn test_logging_layer_verbose() {
        let layer = LoggingLayer::new().verbose();
        assert!(layer.log_requests);
        assert!(layer.log_responses);
    }

    #[tokio::test]
    async fn test_logging_service_passes_through() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut service = LoggingLayer::new().verbose().layer(Echo {
            calls: calls.clone(),
        });

        let response = service
            .call(RpcRequest::new(RpcMethod::GetHeight, vec![]))
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(response.into_result(false).unwrap(), serde_json::json!(1));
    }
}
