// ABOUTME: Category resource types: entity, create/update payloads, listing query
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use serde::{Deserialize, Serialize};

/// A content category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category id
    pub id: i64,
    /// Display name
    pub name: String,
    /// URL slug
    pub slug: String,
    /// Optional description
    pub description: Option<String>,
}

/// Payload for creating a category; the server derives a slug when omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCreate {
    /// Display name
    pub name: String,
    /// URL slug override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update payload for a category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryUpdate {
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

/// Listing filter for categories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryQuery {
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
