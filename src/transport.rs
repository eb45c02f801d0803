// ABOUTME: HTTP transport abstraction with a reqwest-backed default implementation
// ABOUTME: Maps transport failures to timeout/aborted/connection and supports cancellation
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # HTTP Transport
//!
//! The pipeline talks to the network through the [`Transport`] trait so tests
//! can substitute a scripted fake. The default [`HttpTransport`] wraps a
//! pooled `reqwest` client configured with the fixed request timeout.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;
use tokio::sync::watch;
use url::Url;

use crate::config::ClientConfig;
use crate::errors::NetworkReason;

/// HTTP method of an outbound call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl Method {
    /// Canonical uppercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One file in a multipart upload
#[derive(Debug, Clone)]
pub struct MultipartFile {
    /// Form field name, e.g. `file`
    pub field: String,
    /// File name reported to the server
    pub file_name: String,
    /// MIME type of the content
    pub mime: String,
    /// Raw file content
    pub content: Vec<u8>,
}

/// Body of an outbound call
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body
    Empty,
    /// JSON-encoded body
    Json(serde_json::Value),
    /// URL-encoded form body
    Form(Vec<(String, String)>),
    /// Multipart form upload; the transport sets the boundary-bearing
    /// content type, never the pipeline
    Multipart(MultipartFile),
}

/// A fully decorated request, ready for the wire
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute request URL
    pub url: Url,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// Header name/value pairs, decoration included
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

/// Raw transport-level response: HTTP status plus unparsed body
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Unparsed response body
    pub body: Bytes,
}

/// Failure before any response was received
#[derive(Debug, Error)]
pub enum TransportError {
    /// The configured timeout elapsed
    #[error("request timed out")]
    Timeout,
    /// The caller aborted the call
    #[error("request aborted")]
    Aborted,
    /// DNS, connect, or mid-stream failure
    #[error("connection failed: {message}")]
    Connection {
        /// Underlying failure description
        message: String,
    },
}

impl TransportError {
    /// Map to the classification reason exposed to callers
    #[must_use]
    pub const fn reason(&self) -> NetworkReason {
        match self {
            Self::Timeout => NetworkReason::Timeout,
            Self::Aborted => NetworkReason::Aborted,
            Self::Connection { .. } => NetworkReason::Connection,
        }
    }
}

/// Pluggable HTTP transport underneath the pipeline
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one decorated request and return the raw response
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError>;
}

/// Handle for aborting a specific in-flight call.
///
/// Aborted calls classify as `Network { reason: Aborted }` and never touch
/// the session or the notifier.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    /// Create a handle in the not-cancelled state
    #[must_use]
    pub fn new() -> Self {
        Self {
            tx: watch::Sender::new(false),
        }
    }

    /// Abort the call this handle was passed to
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    /// Whether [`cancel`](Self::cancel) has been invoked
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolve once the handle is cancelled
    pub(crate) async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // wait_for checks the current value first, so a cancel that raced
        // ahead of the subscription is still observed
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

impl Default for CancelHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// reqwest-backed transport with connection pooling and the configured timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be constructed.
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client })
    }

    fn classify_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::Connection {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(pairs) => builder.form(&pairs),
            RequestBody::Multipart(file) => {
                let part = reqwest::multipart::Part::bytes(file.content)
                    .file_name(file.file_name)
                    .mime_str(&file.mime)
                    .map_err(|e| TransportError::Connection {
                        message: format!("invalid mime type: {e}"),
                    })?;
                builder.multipart(reqwest::multipart::Form::new().part(file.field, part))
            }
        };

        // Decorated headers win over anything the body encoding set
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send().await.map_err(|e| Self::classify_error(&e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::classify_error(&e))?;

        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Delete.as_str(), "DELETE");
    }

    #[test]
    fn test_transport_error_reasons() {
        assert_eq!(TransportError::Timeout.reason(), NetworkReason::Timeout);
        assert_eq!(TransportError::Aborted.reason(), NetworkReason::Aborted);
        assert_eq!(
            TransportError::Connection {
                message: "refused".into()
            }
            .reason(),
            NetworkReason::Connection
        );
    }

    #[tokio::test]
    async fn test_cancel_handle_resolves_after_cancel() {
        let handle = CancelHandle::new();
        assert!(!handle.is_cancelled());
        handle.cancel();
        assert!(handle.is_cancelled());
        // Must not hang when cancelled before awaiting
        handle.cancelled().await;
    }

    #[tokio::test]
    async fn test_cancel_handle_wakes_waiter() {
        let handle = CancelHandle::new();
        let waiter = handle.clone();
        let task = tokio::spawn(async move { waiter.cancelled().await });
        handle.cancel();
        task.await.unwrap();
    }
}
