// ABOUTME: Typed resource wrappers, one module per backend resource
// ABOUTME: Thin pass-through handles; every call goes through the shared pipeline
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::ApiClient;

/// Article CRUD and streaming listing
pub mod articles;

/// Login, logout, and current-user lookup
pub mod auth;

/// Category CRUD
pub mod categories;

/// Comment listing, moderation, and removal
pub mod comments;

/// Tag CRUD
pub mod tags;

/// Image uploads
pub mod uploads;

/// User account administration
pub mod users;

impl ApiClient {
    /// Article endpoints
    #[must_use]
    pub const fn articles(&self) -> articles::ArticlesApi<'_> {
        articles::ArticlesApi { client: self }
    }

    /// Authentication endpoints
    #[must_use]
    pub const fn auth(&self) -> auth::AuthApi<'_> {
        auth::AuthApi { client: self }
    }

    /// Category endpoints
    #[must_use]
    pub const fn categories(&self) -> categories::CategoriesApi<'_> {
        categories::CategoriesApi { client: self }
    }

    /// Comment endpoints
    #[must_use]
    pub const fn comments(&self) -> comments::CommentsApi<'_> {
        comments::CommentsApi { client: self }
    }

    /// Tag endpoints
    #[must_use]
    pub const fn tags(&self) -> tags::TagsApi<'_> {
        tags::TagsApi { client: self }
    }

    /// Upload endpoints
    #[must_use]
    pub const fn uploads(&self) -> uploads::UploadsApi<'_> {
        uploads::UploadsApi { client: self }
    }

    /// User administration endpoints
    #[must_use]
    pub const fn users(&self) -> users::UsersApi<'_> {
        users::UsersApi { client: self }
    }
}
