// ABOUTME: User administration endpoints: CRUD, batch delete, password change, avatar upload
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::{ApiClient, RequestConfig};
use crate::envelope::Page;
use crate::errors::ClientResult;
use crate::models::user::{
    ChangePassword, User, UserBatchDelete, UserCreate, UserQuery, UserUpdate,
};
use crate::transport::MultipartFile;

/// Handle for the user administration endpoints
#[derive(Clone, Copy)]
pub struct UsersApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl UsersApi<'_> {
    /// List user accounts matching the query, one page.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list(&self, query: &UserQuery) -> ClientResult<Page<User>> {
        self.client
            .call(RequestConfig::get("/api/users").with_query(query)?)
            .await
    }

    /// Fetch one user account by id.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn get(&self, id: i64) -> ClientResult<User> {
        self.client
            .call(RequestConfig::get(format!("/api/users/{id}")))
            .await
    }

    /// Create a user account.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn create(&self, user: &UserCreate) -> ClientResult<User> {
        self.client
            .call(RequestConfig::post("/api/users").with_json(user)?)
            .await
    }

    /// Update a user account.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn update(&self, id: i64, update: &UserUpdate) -> ClientResult<User> {
        self.client
            .call(RequestConfig::put(format!("/api/users/{id}")).with_json(update)?)
            .await
    }

    /// Delete a user account.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .call(RequestConfig::delete(format!("/api/users/{id}")))
            .await
    }

    /// Delete several user accounts in one call.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn batch_delete(&self, ids: Vec<i64>) -> ClientResult<()> {
        self.client
            .call(RequestConfig::delete("/api/users").with_json(&UserBatchDelete { ids })?)
            .await
    }

    /// Change a user's password after verifying the current one.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn change_password(&self, id: i64, change: &ChangePassword) -> ClientResult<()> {
        self.client
            .call(RequestConfig::put(format!("/api/users/{id}/password")).with_json(change)?)
            .await
    }

    /// Replace a user's avatar image and return the updated account.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn update_avatar(
        &self,
        id: i64,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        content: Vec<u8>,
    ) -> ClientResult<User> {
        let file = MultipartFile {
            field: "file".to_owned(),
            file_name: file_name.into(),
            mime: mime.into(),
            content,
        };
        self.client
            .call(RequestConfig::put(format!("/api/users/{id}/avatar")).with_multipart(file))
            .await
    }
}
