// ABOUTME: Domain models shared by the resource wrappers
// ABOUTME: One module per backend resource, mirroring the REST API schemas
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Articles and their create/update/query types
pub mod article;

/// Login, token, and user profile types
pub mod auth;

/// Categories and their create/update/query types
pub mod category;

/// Comments, moderation state, and query types
pub mod comment;

/// Tags and their create/update/query types
pub mod tag;

/// Uploaded asset types
pub mod upload;

/// User accounts and administration types
pub mod user;

pub use article::{
    Article, ArticleCreate, ArticleQuery, ArticleStatus, ArticleUpdate, AuthorSummary, SortOrder,
};
pub use auth::{LoginRequest, TokenPair, UserProfile};
pub use category::{Category, CategoryCreate, CategoryQuery, CategoryUpdate};
pub use comment::{Comment, CommentQuery, CommentStatus, CommentUpdate};
pub use tag::{Tag, TagCreate, TagQuery, TagUpdate};
pub use upload::UploadedImage;
pub use user::{
    ChangePassword, User, UserBatchDelete, UserCreate, UserQuery, UserStatus, UserUpdate,
};
