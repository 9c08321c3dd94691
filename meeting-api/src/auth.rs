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

//! Session verification and the Axum extractors built on it.
//!
//! The authentication provider hands the browser (or CLI) a signed session
//! JWT, carried either in the `__session` cookie or an
//! `Authorization: Bearer <jwt>` header. The backend verifies it with the
//! shared `SESSION_SECRET`.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use videomeet_types::{APIError, SessionClaims};

use crate::error::AppError;
use crate::state::AppState;
use crate::token::{CurrentUser, SessionUser};

/// Name of the cookie carrying the session JWT.
pub const SESSION_COOKIE: &str = "__session";

/// Verify a session JWT and return its claims.
pub fn verify_session_token(
    secret: &str,
    token: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )?;
    Ok(data.claims)
}

/// Pull the raw session credential out of the request headers.
///
/// A bearer token wins over the cookie when both are present.
pub fn session_credential(headers: &HeaderMap) -> Option<String> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    let cookie_header = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let prefix = format!("{SESSION_COOKIE}=");
    cookie_header
        .split(';')
        .map(str::trim)
        .filter_map(|pair| pair.strip_prefix(prefix.as_str()))
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

/// Unverified session credential. Never rejects; verification is deferred
/// to [`Session::current_user`].
#[derive(Debug, Clone, Default)]
pub struct SessionCredential(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for SessionCredential {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(SessionCredential(session_credential(&parts.headers)))
    }
}

/// A session credential paired with the secret that verifies it.
pub struct Session<'a> {
    secret: &'a str,
    credential: Option<&'a str>,
}

impl<'a> Session<'a> {
    pub fn new(secret: &'a str, credential: &'a SessionCredential) -> Self {
        Self {
            secret,
            credential: credential.0.as_deref(),
        }
    }
}

impl CurrentUser for Session<'_> {
    async fn current_user(&self) -> Option<SessionUser> {
        let token = self.credential?;
        match verify_session_token(self.secret, token) {
            Ok(claims) => Some(claims.into_session_user()),
            Err(e) => {
                tracing::warn!("Rejected session token: {e}");
                None
            }
        }
    }
}

trait IntoSessionUser {
    fn into_session_user(self) -> SessionUser;
}

impl IntoSessionUser for SessionClaims {
    fn into_session_user(self) -> SessionUser {
        SessionUser {
            id: self.sub,
            username: self.username.filter(|u| !u.is_empty()),
            image_url: self.image_url,
        }
    }
}

/// Extractor that requires a verified session.
///
/// Usage in a handler:
/// ```ignore
/// async fn my_handler(AuthUser(user): AuthUser) { ... }
/// ```
#[derive(Debug)]
pub struct AuthUser(pub SessionUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_credential(&parts.headers).ok_or_else(AppError::unauthorized)?;
        let claims = verify_session_token(&state.session_secret, &token).map_err(|e| {
            AppError::new(
                axum::http::StatusCode::UNAUTHORIZED,
                APIError::unauthorized_with_detail(&e.to_string()),
            )
        })?;
        Ok(AuthUser(claims.into_session_user()))
    }
}
