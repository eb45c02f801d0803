// ABOUTME: Wire envelope and pagination wrapper for every backend response
// ABOUTME: Explicit discriminated parse replaces loose property access on response bodies
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Response Envelope
//!
//! Every backend response is wrapped in `{code, message, data}`. The business
//! `code` is the authoritative success signal; the HTTP status is secondary.
//! Success is `code` in `[200, 300)`: the admin backend emits exactly `200`,
//! the website backend emits the full 2xx range, and the range check is
//! compatible with both.

use serde::{Deserialize, Serialize};

/// Fallback shown when an HTTP 422 body carries no usable detail message
pub const GENERIC_VALIDATION_MESSAGE: &str = "invalid request parameters";

/// Fallback shown when the envelope carries an empty failure message
pub const GENERIC_FAILURE_MESSAGE: &str = "request failed";

/// Uniform wire wrapper around every API response
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Business status code; authoritative success/failure signal
    pub code: i64,
    /// Human-readable status message
    #[serde(default)]
    pub message: String,
    /// Payload; `null` when the operation returns nothing
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Envelope {
    /// Parse a response body as an envelope.
    ///
    /// Returns `None` when the body is not valid JSON or lacks the `code`
    /// field, which the pipeline classifies as a protocol error.
    #[must_use]
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// Whether the business code indicates success
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// The failure message, falling back to a generic one when empty
    #[must_use]
    pub fn failure_message(&self) -> String {
        if self.message.is_empty() {
            GENERIC_FAILURE_MESSAGE.to_owned()
        } else {
            self.message.clone()
        }
    }
}

/// One page of a paginated listing.
///
/// Field names follow the admin backend; the website backend's `size` is
/// accepted as an alias for `page_size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Total matching items across all pages
    pub total: u64,
    /// 1-based page number
    pub page: u32,
    /// Page size the server applied
    #[serde(alias = "size")]
    pub page_size: u32,
    /// Total number of pages
    pub total_pages: u32,
}

/// Extract the user-facing message from an HTTP 422 body.
///
/// The backend reports validation failures FastAPI-style as
/// `{detail: [{msg, ...}, ...]}`; the first entry's `msg` wins. Object-shaped
/// details and a top-level `message` are accepted as fallbacks before the
/// generic message.
#[must_use]
pub fn validation_message(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return GENERIC_VALIDATION_MESSAGE.to_owned();
    };

    if let Some(detail) = value.get("detail") {
        if let Some(first) = detail.as_array().and_then(|entries| entries.first()) {
            if let Some(msg) = first.get("msg").and_then(serde_json::Value::as_str) {
                return msg.to_owned();
            }
        }
        if let Some(msg) = detail.get("message").and_then(serde_json::Value::as_str) {
            return msg.to_owned();
        }
    }
    if let Some(msg) = value.get("message").and_then(serde_json::Value::as_str) {
        return msg.to_owned();
    }

    GENERIC_VALIDATION_MESSAGE.to_owned()
}
