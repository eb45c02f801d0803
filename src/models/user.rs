// ABOUTME: User administration types: account entity, create/update payloads, query
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an account may sign in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// May sign in
    Active,
    /// Sign-in disabled
    Inactive,
}

/// A user account as returned by the admin API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Account id
    pub id: i64,
    /// Account name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Avatar URL
    pub avatar: Option<String>,
    /// Role name, e.g. `admin`, `editor`, `user`
    pub role: String,
    /// Organizational department
    pub department: Option<String>,
    /// Contact phone number
    pub phone: Option<String>,
    /// Free-form biography
    pub bio: Option<String>,
    /// Display name
    pub full_name: String,
    /// Account status
    pub status: UserStatus,
    /// Last successful sign-in
    pub last_login: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
    /// Authored article count, when the listing joins it in
    pub articles_count: Option<u64>,
    /// Comment count, when joined in
    pub comments_count: Option<u64>,
}

/// Payload for creating a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    /// Account name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Initial password
    pub password: String,
    /// Display name
    pub full_name: String,
    /// Organizational department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Contact phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Free-form biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Whether the account may sign in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Grant superuser rights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

/// Partial update payload for a user account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New account name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// New contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// New department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// New role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// New avatar URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// New phone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// New biography
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Enable or disable sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Grant or revoke superuser rights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
}

/// Listing filter for user accounts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Filter by account name substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Filter by email substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Filter by role name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Filter by department
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Password change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePassword {
    /// Current password, verified server-side
    pub old_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Payload for deleting several user accounts in one call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBatchDelete {
    /// Ids of the accounts to delete
    pub ids: Vec<i64>,
}
