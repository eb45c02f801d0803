// ABOUTME: Authentication wire types: login request, issued token, user profile
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::{Deserialize, Serialize};

/// Credentials submitted to the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account name
    pub username: String,
    /// Plaintext password; sent form-encoded, never logged
    pub password: String,
}

/// Token issued on successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Bearer token attached to subsequent requests
    pub access_token: String,
    /// Token scheme, always `bearer`
    pub token_type: String,
}

/// Profile of the authenticated user, cached in the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account id
    pub id: i64,
    /// Account name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Display name
    pub full_name: String,
    /// Role name, e.g. `admin` or `editor`
    pub role: String,
}
