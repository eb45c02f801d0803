// ABOUTME: End-to-end tests for the request pipeline over a scripted transport
// ABOUTME: Covers decoration, envelope unwrapping, classification, teardown, and cancellation
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Deserialize;
use url::Url;

use blog_api_client::{
    ApiClient, CancelHandle, ClientError, ClientConfig, MemorySession, Navigator, NetworkReason,
    Notifier, PreparedRequest, RawResponse, RequestConfig, SessionStore, Transport, TransportError,
};

struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<PreparedRequest>>,
}

impl ScriptedTransport {
    fn new(responses: Vec<Result<RawResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<PreparedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, request: PreparedRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Connection {
                message: "script exhausted".into(),
            }))
    }
}

/// Transport whose calls never complete on their own; used for abort tests
struct HangingTransport;

#[async_trait]
impl Transport for HangingTransport {
    async fn execute(&self, _request: PreparedRequest) -> Result<RawResponse, TransportError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(TransportError::Connection {
            message: "unreachable".into(),
        })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_owned());
    }
}

#[derive(Default)]
struct RecordingNavigator {
    calls: Mutex<Vec<Option<String>>>,
}

impl RecordingNavigator {
    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to_login(&self, return_path: Option<&str>) {
        self.calls
            .lock()
            .unwrap()
            .push(return_path.map(str::to_owned));
    }
}

struct Harness {
    client: ApiClient,
    transport: Arc<ScriptedTransport>,
    session: Arc<MemorySession>,
    notifier: Arc<RecordingNotifier>,
    navigator: Arc<RecordingNavigator>,
}

fn config() -> ClientConfig {
    ClientConfig::new(
        Url::parse("http://api.test").unwrap(),
        Duration::from_secs(5),
    )
}

fn harness(responses: Vec<Result<RawResponse, TransportError>>) -> Harness {
    let transport = Arc::new(ScriptedTransport::new(responses));
    let session = Arc::new(MemorySession::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::builder(config())
        .with_transport(transport.clone())
        .with_session(session.clone())
        .with_notifier(notifier.clone())
        .with_navigator(navigator.clone())
        .build()
        .unwrap();
    Harness {
        client,
        transport,
        session,
        notifier,
        navigator,
    }
}

fn response(status: u16, body: &str) -> RawResponse {
    RawResponse {
        status,
        body: Bytes::from(body.to_owned()),
    }
}

fn ok_envelope(data: &str) -> RawResponse {
    response(
        200,
        &format!(r#"{{"code": 200, "message": "ok", "data": {data}}}"#),
    )
}

#[derive(Debug, Deserialize, PartialEq)]
struct Payload {
    id: i64,
}

#[tokio::test]
async fn test_bearer_header_matches_session_token() {
    let h = harness(vec![Ok(ok_envelope("{\"id\": 1}"))]);
    h.session.set_token("abc123".into());

    let _: Payload = h.client.call(RequestConfig::get("/api/articles/1")).await.unwrap();

    let requests = h.transport.recorded();
    assert_eq!(requests.len(), 1);
    assert!(requests[0]
        .headers
        .contains(&("Authorization".to_owned(), "Bearer abc123".to_owned())));
}

#[tokio::test]
async fn test_caller_authorization_header_suppresses_session_token() {
    let h = harness(vec![Ok(ok_envelope("{\"id\": 1}"))]);
    h.session.set_token("abc123".into());

    let request =
        RequestConfig::get("/api/articles/1").with_header("Authorization", "Basic dXNlcg==");
    let _: Payload = h.client.call(request).await.unwrap();

    let requests = h.transport.recorded();
    let authorizations: Vec<&str> = requests[0]
        .headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(authorizations, vec!["Basic dXNlcg=="]);
}

#[tokio::test]
async fn test_no_bearer_header_when_anonymous() {
    let h = harness(vec![Ok(ok_envelope("{\"id\": 1}"))]);

    let _: Payload = h.client.call(RequestConfig::get("/api/articles/1")).await.unwrap();

    let requests = h.transport.recorded();
    assert!(!requests[0]
        .headers
        .iter()
        .any(|(name, _)| name == "Authorization"));
}

#[tokio::test]
async fn test_default_content_type_is_json() {
    let h = harness(vec![Ok(ok_envelope("{\"id\": 1}"))]);

    let _: Payload = h.client.call(RequestConfig::get("/api/articles/1")).await.unwrap();

    let requests = h.transport.recorded();
    assert!(requests[0]
        .headers
        .contains(&("Content-Type".to_owned(), "application/json".to_owned())));
}

#[tokio::test]
async fn test_caller_content_type_is_never_overridden() {
    let h = harness(vec![Ok(ok_envelope("null"))]);

    let request = RequestConfig::post("/api/auth/login")
        .with_form(vec![("username".into(), "admin".into())])
        .with_header("Content-Type", "application/x-www-form-urlencoded");
    let _: () = h.client.call(request).await.unwrap();

    let requests = h.transport.recorded();
    let content_types: Vec<&str> = requests[0]
        .headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("content-type"))
        .map(|(_, value)| value.as_str())
        .collect();
    assert_eq!(content_types, vec!["application/x-www-form-urlencoded"]);
}

#[tokio::test]
async fn test_success_resolves_with_unwrapped_data() {
    let h = harness(vec![Ok(response(
        200,
        r#"{"code": 200, "message": "ok", "data": {"id": 1}}"#,
    ))]);

    let payload: Payload = h.client.call(RequestConfig::get("/api/articles/1")).await.unwrap();
    assert_eq!(payload, Payload { id: 1 });
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_envelope_code_overrides_http_status() {
    // HTTP says 200 but the business code says failure; the code wins
    let h = harness(vec![Ok(response(
        200,
        r#"{"code": 500, "message": "storage unavailable"}"#,
    ))]);

    let err = h
        .client
        .call::<Payload>(RequestConfig::get("/api/articles/1"))
        .await
        .unwrap_err();
    match err {
        ClientError::Api { code, message } => {
            assert_eq!(code, 500);
            assert_eq!(message, "storage unavailable");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert_eq!(h.notifier.messages(), vec!["storage unavailable"]);
}

#[tokio::test]
async fn test_auth_failure_tears_down_session_once() {
    let h = harness(vec![Ok(response(200, r#"{"code": 401, "message": "expired"}"#))]);
    h.session.set_token("stale".into());

    let err = h
        .client
        .call::<Payload>(RequestConfig::get("/api/articles/1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Auth { ref message } if message == "expired"));
    assert!(h.session.token().is_none());
    assert_eq!(h.navigator.call_count(), 1);
    assert_eq!(h.notifier.messages(), vec!["expired"]);
}

#[tokio::test]
async fn test_concurrent_auth_failures_are_idempotent() {
    let h = harness(vec![
        Ok(response(200, r#"{"code": 401, "message": "expired"}"#)),
        Ok(response(200, r#"{"code": 401, "message": "expired"}"#)),
    ]);
    h.session.set_token("stale".into());

    let (first, second) = tokio::join!(
        h.client.call::<Payload>(RequestConfig::get("/api/articles/1")),
        h.client.call::<Payload>(RequestConfig::get("/api/articles/2")),
    );

    assert!(first.unwrap_err().is_auth());
    assert!(second.unwrap_err().is_auth());
    // Both teardowns land on an already-clear session without issue;
    // redundant navigation is acceptable
    assert!(h.session.token().is_none());
    assert!(h.navigator.call_count() >= 1);
}

#[tokio::test]
async fn test_timeout_classifies_as_network_and_preserves_session() {
    let h = harness(vec![Err(TransportError::Timeout)]);
    h.session.set_token("abc123".into());

    let err = h
        .client
        .call::<Payload>(RequestConfig::get("/api/articles/1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Network {
            reason: NetworkReason::Timeout
        }
    ));
    assert_eq!(h.session.token().as_deref(), Some("abc123"));
    assert_eq!(h.navigator.call_count(), 0);
    assert_eq!(h.notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_connection_failure_classifies_as_network() {
    let h = harness(vec![Err(TransportError::Connection {
        message: "dns failure".into(),
    })]);

    let err = h
        .client
        .call::<Payload>(RequestConfig::get("/api/articles/1"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Network {
            reason: NetworkReason::Connection
        }
    ));
    assert_eq!(h.notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_validation_error_extracts_first_detail() {
    let h = harness(vec![Ok(response(
        422,
        r#"{"detail": [{"msg": "field required", "loc": ["body", "title"]}]}"#,
    ))]);

    let err = h
        .client
        .call::<Payload>(RequestConfig::post("/api/articles"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Validation { ref message } if message == "field required"));
    assert_eq!(h.notifier.messages(), vec!["field required"]);
}

#[tokio::test]
async fn test_validation_error_generic_fallback() {
    let h = harness(vec![Ok(response(422, "{}"))]);

    let err = h
        .client
        .call::<Payload>(RequestConfig::post("/api/articles"))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ClientError::Validation { ref message } if message == "invalid request parameters")
    );
}

#[tokio::test]
async fn test_non_envelope_body_is_protocol_error() {
    let h = harness(vec![Ok(response(200, "<html>gateway error</html>"))]);

    let err = h
        .client
        .call::<Payload>(RequestConfig::get("/api/articles/1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Protocol { .. }));
    assert_eq!(h.notifier.messages().len(), 1);
    assert_eq!(h.navigator.call_count(), 0);
}

#[tokio::test]
async fn test_payload_shape_mismatch_is_protocol_error() {
    // Valid envelope, but data does not match the caller's type
    let h = harness(vec![Ok(response(
        200,
        r#"{"code": 200, "message": "ok", "data": {"id": "not-a-number"}}"#,
    ))]);

    let err = h
        .client
        .call::<Payload>(RequestConfig::get("/api/articles/1"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Protocol { .. }));
    assert_eq!(h.notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_aborted_call_is_silent() {
    let session = Arc::new(MemorySession::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let navigator = Arc::new(RecordingNavigator::default());
    let client = ApiClient::builder(config())
        .with_transport(Arc::new(HangingTransport))
        .with_session(session.clone())
        .with_notifier(notifier.clone())
        .with_navigator(navigator.clone())
        .build()
        .unwrap();
    session.set_token("abc123".into());

    let cancel = CancelHandle::new();
    cancel.cancel();
    let err = client
        .call_with_cancel::<Payload>(RequestConfig::get("/api/articles/1"), &cancel)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ClientError::Network {
            reason: NetworkReason::Aborted
        }
    ));
    assert!(notifier.messages().is_empty());
    assert_eq!(navigator.call_count(), 0);
    assert_eq!(session.token().as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_cancel_mid_flight() {
    let client = ApiClient::builder(config())
        .with_transport(Arc::new(HangingTransport))
        .build()
        .unwrap();

    let cancel = CancelHandle::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        canceller.cancel();
    });

    let err = client
        .call_with_cancel::<Payload>(RequestConfig::get("/api/articles/1"), &cancel)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Network {
            reason: NetworkReason::Aborted
        }
    ));
}

#[tokio::test]
async fn test_setup_failure_never_reaches_transport() {
    let h = harness(vec![Ok(ok_envelope("null"))]);

    let err = h
        .client
        .call::<Payload>(RequestConfig::get("/api/x").with_header("bad header", "v"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::RequestSetup { .. }));
    assert!(h.transport.recorded().is_empty());
    // Setup failures are local; nothing is notified
    assert!(h.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_request_url_joins_base() {
    let h = harness(vec![Ok(ok_envelope("{\"id\": 1}"))]);

    let _: Payload = h.client.call(RequestConfig::get("/api/articles/1")).await.unwrap();

    let requests = h.transport.recorded();
    assert_eq!(requests[0].url.as_str(), "http://api.test/api/articles/1");
}
