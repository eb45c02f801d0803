// ABOUTME: Typed REST client for the blog CMS backend
// ABOUTME: Request pipeline with bearer auth, envelope normalization, and error classification
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![deny(unsafe_code)]

//! # Blog API Client
//!
//! Typed client for the blog CMS REST backend. Every call goes through a
//! single request pipeline ([`ApiClient`]) that decorates outbound requests
//! with bearer authentication, normalizes the backend's `{code, message, data}`
//! response envelope, and classifies failures into a small error taxonomy
//! ([`ClientError`]). Session teardown and user notification happen in exactly
//! one place, not at every call site.
//!
//! ## Modules
//!
//! - **client**: the request pipeline (decorate, send, classify)
//! - **errors**: error taxonomy shared by every API call
//! - **envelope**: wire envelope and pagination wrapper
//! - **transport**: pluggable HTTP transport (reqwest-backed by default)
//! - **session**: injected session store (token + cached profile)
//! - **hooks**: navigation and notification collaborator interfaces
//! - **api**: thin typed wrappers, one per backend resource
//! - **models**: request/response types for each resource

/// Typed resource wrappers (articles, categories, tags, comments, users, auth, uploads)
pub mod api;

/// The request pipeline: decoration, transport delegation, and classification
pub mod client;

/// Environment-derived client configuration
pub mod config;

/// Response envelope and pagination wrapper types
pub mod envelope;

/// Unified error taxonomy for every API call
pub mod errors;

/// Navigation and notification collaborator interfaces
pub mod hooks;

/// Domain models shared by the resource wrappers
pub mod models;

/// Session store interface and in-memory implementation
pub mod session;

/// HTTP transport abstraction and reqwest-backed implementation
pub mod transport;

pub use api::articles::{
    ArticleStream, StreamConfig, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE,
};
pub use client::{ApiClient, ApiClientBuilder, RequestConfig};
pub use config::ClientConfig;
pub use envelope::{Envelope, Page};
pub use errors::{ClientError, ClientResult, NetworkReason};
pub use hooks::{LogNotifier, Navigator, NoopNavigator, Notifier};
pub use session::{MemorySession, SessionStore};
pub use transport::{
    CancelHandle, HttpTransport, Method, MultipartFile, PreparedRequest, RawResponse, RequestBody,
    Transport, TransportError,
};
