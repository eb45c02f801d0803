// ABOUTME: Comment endpoints: listing, moderation (approve / mark spam), edit, delete
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::{ApiClient, RequestConfig};
use crate::envelope::Page;
use crate::errors::ClientResult;
use crate::models::comment::{Comment, CommentQuery, CommentUpdate};

/// Handle for the comment endpoints
#[derive(Clone, Copy)]
pub struct CommentsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl CommentsApi<'_> {
    /// List comments matching the query, one page.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list(&self, query: &CommentQuery) -> ClientResult<Page<Comment>> {
        self.client
            .call(RequestConfig::get("/api/comments").with_query(query)?)
            .await
    }

    /// List comments on one article.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list_for_article(
        &self,
        article_id: i64,
        query: &CommentQuery,
    ) -> ClientResult<Page<Comment>> {
        self.client
            .call(
                RequestConfig::get(format!("/api/articles/{article_id}/comments"))
                    .with_query(query)?,
            )
            .await
    }

    /// List comments written by one user.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn list_for_user(
        &self,
        user_id: i64,
        query: &CommentQuery,
    ) -> ClientResult<Page<Comment>> {
        let mut query = query.clone();
        query.user_id = Some(user_id);
        self.client
            .call(RequestConfig::get("/api/comments").with_query(&query)?)
            .await
    }

    /// Fetch one comment by id.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn get(&self, id: i64) -> ClientResult<Comment> {
        self.client
            .call(RequestConfig::get(format!("/api/comments/{id}")))
            .await
    }

    /// Update a comment's content or moderation flags.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn update(&self, id: i64, update: &CommentUpdate) -> ClientResult<Comment> {
        self.client
            .call(RequestConfig::put(format!("/api/comments/{id}")).with_json(update)?)
            .await
    }

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        self.client
            .call(RequestConfig::delete(format!("/api/comments/{id}")))
            .await
    }

    /// Approve a comment for public display.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn approve(&self, id: i64) -> ClientResult<Comment> {
        self.client
            .call(RequestConfig::put(format!("/api/comments/{id}/approve")))
            .await
    }

    /// Flag a comment as spam.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn mark_spam(&self, id: i64) -> ClientResult<Comment> {
        self.client
            .call(RequestConfig::put(format!("/api/comments/{id}/mark-spam")))
            .await
    }
}
