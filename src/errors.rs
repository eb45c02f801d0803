// ABOUTME: Unified error taxonomy for every API call made through the pipeline
// ABOUTME: Classification kinds, network failure reasons, and convenience constructors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Taxonomy
//!
//! Every call through the request pipeline rejects with exactly one
//! [`ClientError`] variant. Classification is performed centrally by the
//! pipeline; call sites only decide whether to apply call-specific recovery.
//! User notification is a pipeline side effect and is never duplicated when
//! a caller logs the same error.

use std::fmt;

use thiserror::Error;

/// Why a transport-level failure occurred (the request never completed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkReason {
    /// The configured request timeout elapsed
    Timeout,
    /// The caller aborted the in-flight call
    Aborted,
    /// DNS resolution or connection establishment failed
    Connection,
}

impl fmt::Display for NetworkReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Aborted => write!(f, "aborted"),
            Self::Connection => write!(f, "connection"),
        }
    }
}

/// Unified error type for all API calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be constructed; nothing was sent
    #[error("failed to prepare request: {message}")]
    RequestSetup {
        /// What went wrong while building the request
        message: String,
    },

    /// The transport never produced a response
    #[error("network failure ({reason})")]
    Network {
        /// Transport-level failure reason
        reason: NetworkReason,
    },

    /// The server rejected the shape or content of the request (HTTP 422)
    #[error("validation failed: {message}")]
    Validation {
        /// First detail message from the server, or a generic fallback
        message: String,
    },

    /// Envelope-level authentication failure; the session has been torn down
    #[error("authentication failed: {message}")]
    Auth {
        /// Server-provided failure message
        message: String,
    },

    /// Any other business-level failure reported through the envelope
    #[error("api error {code}: {message}")]
    Api {
        /// Business status code from the envelope
        code: i64,
        /// Server-provided failure message
        message: String,
    },

    /// The response did not match the expected envelope contract
    #[error("protocol error: {message}")]
    Protocol {
        /// Description of the contract mismatch
        message: String,
    },
}

/// Result type alias for pipeline calls
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Pre-send construction failure
    pub fn request_setup(message: impl Into<String>) -> Self {
        Self::RequestSetup {
            message: message.into(),
        }
    }

    /// Transport-level failure with the given reason
    #[must_use]
    pub const fn network(reason: NetworkReason) -> Self {
        Self::Network { reason }
    }

    /// Envelope contract mismatch
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// True for errors that tear down the session
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// The human-readable message the notifier was given for this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::RequestSetup { message }
            | Self::Validation { message }
            | Self::Auth { message }
            | Self::Api { message, .. }
            | Self::Protocol { message } => message.clone(),
            Self::Network { reason } => format!("network failure ({reason})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_reason_display() {
        assert_eq!(NetworkReason::Timeout.to_string(), "timeout");
        assert_eq!(NetworkReason::Aborted.to_string(), "aborted");
        assert_eq!(NetworkReason::Connection.to_string(), "connection");
    }

    #[test]
    fn test_error_display() {
        let err = ClientError::Api {
            code: 403,
            message: "forbidden".into(),
        };
        assert_eq!(err.to_string(), "api error 403: forbidden");

        let err = ClientError::network(NetworkReason::Timeout);
        assert_eq!(err.to_string(), "network failure (timeout)");
    }

    #[test]
    fn test_is_auth() {
        assert!(ClientError::Auth {
            message: "expired".into()
        }
        .is_auth());
        assert!(!ClientError::protocol("bad body").is_auth());
    }
}
