// ABOUTME: The request pipeline: outbound decoration, transport delegation, inbound classification
// ABOUTME: Single chokepoint for bearer auth, envelope unwrapping, notification, and session teardown
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Request Pipeline
//!
//! Every outbound call passes through three ordered stages:
//!
//! 1. **Decoration**: attach `Authorization: Bearer <token>` when the session
//!    holds one; default `Content-Type: application/json` unless the caller
//!    set any content type themselves.
//! 2. **Transport**: delegate to the injected [`Transport`] with the fixed
//!    configured timeout.
//! 3. **Classification**: map the raw outcome to a success payload or exactly
//!    one [`ClientError`] kind, notifying the user once per failure and
//!    tearing down the session on envelope-level 401.
//!
//! The pipeline performs no retries; retry policy belongs to callers.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::envelope::{validation_message, Envelope, GENERIC_FAILURE_MESSAGE};
use crate::errors::{ClientError, ClientResult, NetworkReason};
use crate::hooks::{LogNotifier, Navigator, NoopNavigator, Notifier};
use crate::session::{MemorySession, SessionStore};
use crate::transport::{
    CancelHandle, HttpTransport, Method, MultipartFile, PreparedRequest, RawResponse, RequestBody,
    Transport, TransportError,
};

/// HTTP status the backend uses for request validation failures
const VALIDATION_STATUS: u16 = 422;

/// Envelope code signalling an expired or missing authentication
const AUTH_FAILURE_CODE: i64 = 401;

/// Message shown when a response does not match the envelope contract
const PROTOCOL_MESSAGE: &str = "unexpected response from server";

/// Caller-side description of one API call
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Request path, joined against the configured base URL
    pub url: String,
    /// HTTP method
    pub method: Method,
    /// Query string pairs
    pub query: Vec<(String, String)>,
    /// Caller-supplied headers
    pub headers: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
}

impl RequestConfig {
    /// Start a request with the given method and path
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method,
            query: Vec::new(),
            headers: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    /// POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    /// PUT request
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::Put, url)
    }

    /// DELETE request
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::Delete, url)
    }

    /// Attach query parameters from any serializable struct.
    ///
    /// `None` fields are skipped; scalar values are stringified.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestSetup`] when the value does not
    /// serialize to a flat object.
    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> ClientResult<Self> {
        let value = serde_json::to_value(query)
            .map_err(|e| ClientError::request_setup(format!("invalid query: {e}")))?;
        self.query = flatten_query(&value)?;
        Ok(self)
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestSetup`] when the body does not serialize.
    pub fn with_json<B: Serialize>(mut self, body: &B) -> ClientResult<Self> {
        let value = serde_json::to_value(body)
            .map_err(|e| ClientError::request_setup(format!("invalid body: {e}")))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Attach a URL-encoded form body
    #[must_use]
    pub fn with_form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(pairs);
        self
    }

    /// Attach a multipart file upload body
    #[must_use]
    pub fn with_multipart(mut self, file: MultipartFile) -> Self {
        self.body = RequestBody::Multipart(file);
        self
    }

    /// Attach a header, overriding pipeline defaults of the same name
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers
            .iter()
            .any(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
    }

    fn has_content_type(&self) -> bool {
        self.has_header("content-type")
    }
}

/// Flatten a serialized query struct into string pairs
fn flatten_query(value: &serde_json::Value) -> ClientResult<Vec<(String, String)>> {
    let serde_json::Value::Object(map) = value else {
        return Err(ClientError::request_setup(
            "query parameters must serialize to an object",
        ));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, entry) in map {
        let rendered = match entry {
            serde_json::Value::Null => continue,
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                return Err(ClientError::request_setup(format!(
                    "query parameter {key} is not a scalar"
                )));
            }
        };
        pairs.push((key.clone(), rendered));
    }
    Ok(pairs)
}

/// The request pipeline. Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    session: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

/// Builder injecting the pipeline's collaborators
pub struct ApiClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
    session: Option<Arc<dyn SessionStore>>,
    navigator: Option<Arc<dyn Navigator>>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ApiClientBuilder {
    /// Substitute the HTTP transport
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Substitute the session store
    #[must_use]
    pub fn with_session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Substitute the router hook
    #[must_use]
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Substitute the notifier
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Finish construction, filling unset collaborators with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the default HTTP transport cannot be built.
    pub fn build(self) -> anyhow::Result<ApiClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::new(&self.config)?),
        };
        Ok(ApiClient {
            config: self.config,
            transport,
            session: self
                .session
                .unwrap_or_else(|| Arc::new(MemorySession::new())),
            navigator: self.navigator.unwrap_or_else(|| Arc::new(NoopNavigator)),
            notifier: self.notifier.unwrap_or_else(|| Arc::new(LogNotifier)),
        })
    }
}

impl ApiClient {
    /// Start building a client around the given configuration
    #[must_use]
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            transport: None,
            session: None,
            navigator: None,
            notifier: None,
        }
    }

    /// Build a client with the default reqwest transport and collaborators.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be built.
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        Self::builder(config).build()
    }

    /// The injected session store
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Execute one call through the pipeline and decode the envelope payload.
    ///
    /// # Errors
    ///
    /// Rejects with one [`ClientError`] kind per the classification rules.
    pub async fn call<T: DeserializeOwned>(&self, request: RequestConfig) -> ClientResult<T> {
        let data = self.dispatch(request, None).await?;
        self.decode(data)
    }

    /// Execute one call that the given handle can abort.
    ///
    /// Aborted calls reject with `Network { reason: Aborted }` without
    /// notifying or touching the session.
    ///
    /// # Errors
    ///
    /// Rejects with one [`ClientError`] kind per the classification rules.
    pub async fn call_with_cancel<T: DeserializeOwned>(
        &self,
        request: RequestConfig,
        cancel: &CancelHandle,
    ) -> ClientResult<T> {
        let data = self.dispatch(request, Some(cancel)).await?;
        self.decode(data)
    }

    async fn dispatch(
        &self,
        request: RequestConfig,
        cancel: Option<&CancelHandle>,
    ) -> ClientResult<serde_json::Value> {
        // Stage 1: decoration. Failures here never reach the network and are
        // the one error kind that does not notify.
        let prepared = self.decorate(request)?;
        debug!(method = prepared.method.as_str(), url = %prepared.url, "dispatching api call");

        // Stage 2: transport, optionally raced against cancellation
        let outcome = match cancel {
            Some(handle) => {
                tokio::select! {
                    outcome = self.transport.execute(prepared) => outcome,
                    () = handle.cancelled() => Err(TransportError::Aborted),
                }
            }
            None => self.transport.execute(prepared).await,
        };

        // Stage 3: classification
        self.classify(outcome)
    }

    fn decorate(&self, request: RequestConfig) -> ClientResult<PreparedRequest> {
        let url = self.config.endpoint(&request.url)?;

        for (name, _) in &request.headers {
            if name.is_empty() || !name.bytes().all(|b| b.is_ascii_graphic()) {
                return Err(ClientError::request_setup(format!(
                    "invalid header name: {name:?}"
                )));
            }
        }

        let mut headers = request.headers.clone();
        // A caller-supplied Authorization header wins over the session token,
        // same as the content-type rule below.
        if !request.has_header("authorization") {
            if let Some(token) = self.session.token() {
                headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
            }
        }
        // Any caller-supplied content type suppresses the default entirely.
        // Multipart bodies get a boundary-bearing type from the transport.
        if !request.has_content_type() && !matches!(request.body, RequestBody::Multipart(_)) {
            headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        }

        Ok(PreparedRequest {
            method: request.method,
            url,
            query: request.query,
            headers,
            body: request.body,
        })
    }

    fn classify(
        &self,
        outcome: Result<RawResponse, TransportError>,
    ) -> ClientResult<serde_json::Value> {
        let response = match outcome {
            Err(TransportError::Aborted) => {
                // Aborted by the caller: silent, session untouched
                return Err(ClientError::network(NetworkReason::Aborted));
            }
            Err(transport_error) => {
                let error = ClientError::network(transport_error.reason());
                warn!(%transport_error, "transport failure");
                self.notifier.notify_error(&error.user_message());
                return Err(error);
            }
            Ok(response) => response,
        };

        if response.status == VALIDATION_STATUS {
            let message = validation_message(&response.body);
            self.notifier.notify_error(&message);
            return Err(ClientError::Validation { message });
        }

        let Some(envelope) = Envelope::parse(&response.body) else {
            warn!(status = response.status, "response body is not a valid envelope");
            self.notifier.notify_error(PROTOCOL_MESSAGE);
            return Err(ClientError::protocol(PROTOCOL_MESSAGE));
        };

        if envelope.is_success() {
            return Ok(envelope.data);
        }

        let message = envelope.failure_message();
        self.notifier.notify_error(&message);

        if envelope.code == AUTH_FAILURE_CODE {
            // Session teardown is idempotent; concurrent 401s may each
            // navigate, and the login view tolerates that.
            self.session.clear();
            self.navigator.navigate_to_login(None);
            return Err(ClientError::Auth { message });
        }

        Err(ClientError::Api {
            code: envelope.code,
            message,
        })
    }

    fn decode<T: DeserializeOwned>(&self, data: serde_json::Value) -> ClientResult<T> {
        serde_json::from_value(data).map_err(|e| {
            let error = ClientError::protocol(format!("{GENERIC_FAILURE_MESSAGE}: {e}"));
            warn!(%e, "envelope payload did not match the expected shape");
            self.notifier.notify_error(PROTOCOL_MESSAGE);
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct SampleQuery {
        page: Option<u32>,
        title: Option<String>,
        featured: bool,
    }

    #[test]
    fn test_flatten_query_skips_none() {
        let value = serde_json::to_value(SampleQuery {
            page: Some(2),
            title: None,
            featured: true,
        })
        .unwrap();
        let pairs = flatten_query(&value).unwrap();
        assert!(pairs.contains(&("page".to_owned(), "2".to_owned())));
        assert!(pairs.contains(&("featured".to_owned(), "true".to_owned())));
        assert!(!pairs.iter().any(|(k, _)| k == "title"));
    }

    #[test]
    fn test_flatten_query_rejects_nested() {
        let value = serde_json::json!({"filter": {"nested": true}});
        assert!(flatten_query(&value).is_err());
    }

    #[test]
    fn test_request_config_builders() {
        let request = RequestConfig::post("/api/articles")
            .with_header("X-Request-Id", "abc")
            .with_form(vec![("username".into(), "admin".into())]);
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "/api/articles");
        assert!(matches!(request.body, RequestBody::Form(_)));
        assert!(!request.has_content_type());

        let request = RequestConfig::get("/x").with_header("content-type", "text/plain");
        assert!(request.has_content_type());
    }
}
