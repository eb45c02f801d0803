// ABOUTME: Category endpoints: CRUD plus the unpaginated listing used by pickers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::{ApiClient, RequestConfig};
use crate::envelope::Page;
use crate::errors::ClientResult;
use crate::models::category::{Category, CategoryCreate, CategoryQuery, CategoryUpdate};

/// Handle for the category endpoints
#[derive(Clone, Copy)]
pub struct CategoriesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl CategoriesApi<'_> {
    /// Create a category.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn create(&self, category: &CategoryCreate) -> ClientResult<Category> {
        self.client
            .call(RequestConfig::post("/api/categories").with_json(category)?)
            .await
    }

    /// List categories matching the query, one page.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list(&self, query: &CategoryQuery) -> ClientResult<Page<Category>> {
        self.client
            .call(RequestConfig::get("/api/categories").with_query(query)?)
            .await
    }

    /// List every category without pagination; used by selection widgets.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list_all(&self) -> ClientResult<Vec<Category>> {
        self.client
            .call(RequestConfig::get("/api/categories/all"))
            .await
    }

    /// Fetch one category by id.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn get(&self, id: i64) -> ClientResult<Category> {
        self.client
            .call(RequestConfig::get(format!("/api/categories/{id}")))
            .await
    }

    /// Update a category.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn update(&self, id: i64, update: &CategoryUpdate) -> ClientResult<Category> {
        self.client
            .call(RequestConfig::put(format!("/api/categories/{id}")).with_json(update)?)
            .await
    }

    /// Delete a category.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .call(RequestConfig::delete(format!("/api/categories/{id}")))
            .await
    }
}
