// ABOUTME: Article resource types: entity with embedded taxonomy, payloads, listing query
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::tag::Tag;

/// Publication state of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    /// Not yet published
    Draft,
    /// Publicly visible
    Published,
    /// Removed from the public site but retained
    Archived,
}

/// Sort direction for listing queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Author identity embedded in an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    /// Author account id
    pub id: i64,
    /// Author account name
    pub username: String,
    /// Author contact email
    pub email: String,
}

/// A full article as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Article id
    pub id: i64,
    /// Title
    pub title: String,
    /// URL slug
    pub slug: String,
    /// Body content
    pub content: String,
    /// Short summary shown in listings
    pub summary: String,
    /// SEO title override
    pub meta_title: Option<String>,
    /// SEO description override
    pub meta_description: Option<String>,
    /// SEO keywords
    pub keywords: Option<String>,
    /// Publication state
    pub status: ArticleStatus,
    /// Whether the article is pinned in featured listings
    pub is_featured: bool,
    /// Whether readers may comment
    pub allow_comments: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
    /// Publication timestamp, absent for drafts
    pub published_at: Option<DateTime<Utc>>,
    /// View counter
    pub view_count: u64,
    /// Comment counter
    pub comment_count: u64,
    /// Like counter
    pub like_count: u64,
    /// Author identity
    pub author: AuthorSummary,
    /// Categories the article belongs to
    pub categories: Vec<Category>,
    /// Tags attached to the article
    pub tags: Vec<Tag>,
}

/// Payload for creating an article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleCreate {
    /// Title
    pub title: String,
    /// URL slug
    pub slug: String,
    /// Body content
    pub content: String,
    /// Short summary
    pub summary: String,
    /// SEO title override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// SEO description override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// SEO keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// Initial publication state
    pub status: ArticleStatus,
    /// Pin in featured listings
    pub is_featured: bool,
    /// Allow reader comments
    pub allow_comments: bool,
    /// Category ids to attach
    pub category_ids: Vec<i64>,
    /// Tag ids to attach
    pub tag_ids: Vec<i64>,
}

/// Partial update payload for an article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleUpdate {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New URL slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New body content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// New summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// New SEO title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    /// New SEO description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    /// New SEO keywords
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    /// New publication state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    /// New featured flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// New comment policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_comments: Option<bool>,
    /// Replacement category ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<i64>>,
    /// Replacement tag ids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<i64>>,
}

/// Listing filter for articles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Filter by title substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Filter by publication state
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ArticleStatus>,
    /// Filter to featured articles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    /// Filter by author account id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    /// Sort field name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// Sort direction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ArticleStatus::Published).unwrap(),
            "\"published\""
        );
        let status: ArticleStatus = serde_json::from_str("\"draft\"").unwrap();
        assert_eq!(status, ArticleStatus::Draft);
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = ArticleUpdate {
            title: Some("New title".into()),
            ..ArticleUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["title"], "New title");
    }
}
