// ABOUTME: Authentication endpoints: login, logout, current-user lookup
// ABOUTME: Login stores the token, then fetches and caches the profile
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::client::{ApiClient, RequestConfig};
use crate::errors::ClientResult;
use crate::models::auth::{LoginRequest, TokenPair, UserProfile};

/// Handle for the authentication endpoints
#[derive(Clone, Copy)]
pub struct AuthApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AuthApi<'_> {
    /// Sign in: exchange credentials for a token, then fetch and cache the
    /// user's profile.
    ///
    /// The login endpoint takes a form-encoded body, so the explicit content
    /// type suppresses the pipeline's JSON default.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules; the session stays empty on failure.
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<TokenPair> {
        let request = RequestConfig::post("/api/auth/login")
            .with_form(vec![
                ("username".to_owned(), credentials.username.clone()),
                ("password".to_owned(), credentials.password.clone()),
            ])
            .with_header("Content-Type", "application/x-www-form-urlencoded");

        let token: TokenPair = self.client.call(request).await?;
        self.client.session().set_token(token.access_token.clone());

        let profile = self.current_user().await?;
        self.client.session().set_profile(profile);

        Ok(token)
    }

    /// Sign out. The local session is cleared regardless of whether the
    /// server-side revocation succeeds.
    ///
    /// # Errors
    ///
    /// Returns the revocation call's error, after the local session has
    /// already been cleared.
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self
            .client
            .call::<()>(RequestConfig::post("/api/auth/logout"))
            .await;
        self.client.session().clear();
        result
    }

    /// Fetch the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Rejects with a [`ClientError`](crate::errors::ClientError) per the
    /// pipeline classification rules.
    pub async fn current_user(&self) -> ClientResult<UserProfile> {
        self.client.call(RequestConfig::get("/api/auth/me")).await
    }
}
