// ABOUTME: Comment resource types: entity with moderation flags, query, update payload
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation state filter for comment listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    /// No moderation filter
    All,
    /// Awaiting review
    Pending,
    /// Approved for display
    Approved,
    /// Marked as spam
    Spam,
}

/// A reader comment on an article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment id
    pub id: i64,
    /// Comment body
    pub content: String,
    /// Article the comment belongs to
    pub article_id: i64,
    /// Title of that article, when the listing joins it in
    pub article_title: Option<String>,
    /// Commenting user's id
    pub user_id: i64,
    /// Commenting user's display name, when joined in
    pub user_name: Option<String>,
    /// Parent comment id for threaded replies
    pub parent_id: Option<i64>,
    /// Approved for public display
    pub is_approved: bool,
    /// Flagged as spam
    pub is_spam: bool,
    /// Submitter's IP address, admin listings only
    pub ip_address: Option<String>,
    /// Submitter's user agent, admin listings only
    pub user_agent: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: Option<DateTime<Utc>>,
    /// Like counter
    pub like_count: u64,
}

/// Listing filter for comments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Full-text filter on comment content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Moderation state filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
    /// Restrict to one article
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_id: Option<i64>,
    /// Restrict to one user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Creation date lower bound (inclusive), `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Creation date upper bound (inclusive), `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// Partial update payload for a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentUpdate {
    /// Edited body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Approve or unapprove
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    /// Flag or unflag as spam
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spam: Option<bool>,
}
