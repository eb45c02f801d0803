// ABOUTME: Tag endpoints: CRUD plus the unpaginated listing used by pickers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::{ApiClient, RequestConfig};
use crate::envelope::Page;
use crate::errors::ClientResult;
use crate::models::tag::{Tag, TagCreate, TagQuery, TagUpdate};

/// Handle for the tag endpoints
#[derive(Clone, Copy)]
pub struct TagsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl TagsApi<'_> {
    /// Create a tag.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn create(&self, tag: &TagCreate) -> ClientResult<Tag> {
        self.client
            .call(RequestConfig::post("/api/tags").with_json(tag)?)
            .await
    }

    /// List tags matching the query, one page.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list(&self, query: &TagQuery) -> ClientResult<Page<Tag>> {
        self.client
            .call(RequestConfig::get("/api/tags").with_query(query)?)
            .await
    }

    /// List every tag without pagination; used by selection widgets.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list_all(&self) -> ClientResult<Vec<Tag>> {
        self.client.call(RequestConfig::get("/api/tags/all")).await
    }

    /// Fetch one tag by id.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn get(&self, id: i64) -> ClientResult<Tag> {
        self.client
            .call(RequestConfig::get(format!("/api/tags/{id}")))
            .await
    }

    /// Update a tag.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn update(&self, id: i64, update: &TagUpdate) -> ClientResult<Tag> {
        self.client
            .call(RequestConfig::put(format!("/api/tags/{id}")).with_json(update)?)
            .await
    }

    /// Delete a tag.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .call(RequestConfig::delete(format!("/api/tags/{id}")))
            .await
    }
}
