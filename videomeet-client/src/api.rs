/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Typed REST client for the videomeet token backend.
//!
//! Covers the session endpoints (`/session`, `/profile`) and token issuance
//! (`/api/v1/token`). The session credential is the auth provider's JWT.

use reqwest::Client;
use videomeet_types::responses::{ProfileResponse, TokenResponse};

use crate::error::ClientError;
use crate::identity::{AuthState, AuthUser};

/// How the client authenticates with the backend.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// No session: the user is signed out.
    Anonymous,
    /// Attach `Authorization: Bearer <session jwt>` to every request.
    Session(String),
}

/// A typed REST client for the token backend.
#[derive(Debug, Clone)]
pub struct MeetingApiClient {
    base_url: String,
    auth: AuthMode,
    http: Client,
}

impl MeetingApiClient {
    /// Create a new client pointing at the given backend base URL.
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://localhost:8081"`
    /// * `auth` - how to authenticate requests
    pub fn new(base_url: &str, auth: AuthMode) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            http: Client::new(),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self.auth, AuthMode::Session(_))
    }

    /// Get the authenticated user's profile.
    ///
    /// Calls `GET /profile`.
    pub async fn get_profile(&self) -> Result<ProfileResponse, ClientError> {
        let response = self.get("/profile").send().await?;
        parse_api_response(response).await
    }

    /// Resolve the current-user state the way the auth provider reports it.
    ///
    /// A rejected or absent session is a loaded, signed-out state rather
    /// than an error.
    pub async fn auth_state(&self) -> Result<AuthState, ClientError> {
        if !self.is_signed_in() {
            return Ok(AuthState::signed_out());
        }
        match self.get_profile().await {
            Ok(profile) => Ok(AuthState::signed_in(AuthUser {
                id: profile.user_id,
                username: profile.username,
                image_url: profile.image_url,
            })),
            Err(ClientError::NotAuthenticated) => {
                log::warn!("Session rejected by backend, continuing signed out");
                Ok(AuthState::signed_out())
            }
            Err(e) => Err(e),
        }
    }

    /// Request a platform access token for the signed-in user.
    ///
    /// Calls `POST /api/v1/token`.
    pub async fn issue_token(&self) -> Result<TokenResponse, ClientError> {
        let response = self.post("/api/v1/token").send().await?;
        parse_api_response(response).await
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.get(self.url(path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_auth(self.http.post(self.url(path)))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.auth {
            AuthMode::Anonymous => builder,
            AuthMode::Session(token) => {
                builder.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"))
            }
        }
    }
}

/// Parse a standard `APIResponse<T>` body, returning `T` on success or
/// mapping the error to [`ClientError`].
pub(crate) async fn parse_api_response<T: serde::de::DeserializeOwned + serde::Serialize>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => {
            let wrapper: videomeet_types::APIResponse<T> = response.json().await?;
            Ok(wrapper.result)
        }
        401 => Err(ClientError::NotAuthenticated),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError { status, body })
        }
    }
}
