// ABOUTME: Tag resource types: entity, create/update payloads, listing query
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::{Deserialize, Serialize};

/// A content tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag id
    pub id: i64,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Optional description
    pub description: Option<String>,
}

/// Payload for creating a tag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreate {
    /// Display name
    pub name: String,
    /// URL slug override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update payload for a tag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New URL slug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Listing filter for tags
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagQuery {
    /// 1-based page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Filter by name substring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
