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

//! Video platform access token issuance.
//!
//! The backend signs tokens with the platform's API secret; the platform
//! validates the signature and trusts the `user_id` claim. Issuance never
//! panics across its boundary: every failure is a [`TokenError`] value.

use std::future::Future;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use thiserror::Error;
use videomeet_types::PlatformTokenClaims;

use crate::config::PlatformConfig;

/// The authenticated principal behind the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub username: Option<String>,
    pub image_url: Option<String>,
}

/// Source of the current authenticated user.
///
/// In production this verifies the auth provider's session credential;
/// resolving it may cost a round trip, so [`TokenIssuer`] only asks once
/// its own configuration is known to be usable.
pub trait CurrentUser {
    fn current_user(&self) -> impl Future<Output = Option<SessionUser>> + Send;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Missing video platform API key or secret")]
    MissingConfig,

    #[error("User not authenticated")]
    Unauthenticated,

    #[error("Failed to generate token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub user_id: String,
    pub issued_at: i64,
    pub expires_at: i64,
}

/// Signs platform access tokens for authenticated users.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    config: PlatformConfig,
}

impl TokenIssuer {
    pub fn new(config: PlatformConfig) -> Self {
        Self { config }
    }

    /// Issue a token for whoever `session` resolves to, using the wall clock.
    pub async fn issue<U: CurrentUser>(&self, session: &U) -> Result<IssuedToken, TokenError> {
        self.issue_at(session, Utc::now().timestamp()).await
    }

    /// Issue a token as if the current Unix time were `now`.
    pub async fn issue_at<U: CurrentUser>(
        &self,
        session: &U,
        now: i64,
    ) -> Result<IssuedToken, TokenError> {
        let secret = self.secret().inspect_err(|e| tracing::error!("{e}"))?;

        let user = session.current_user().await;
        tracing::info!(
            "Generating token for user {}",
            user.as_ref().map(|u| u.id.as_str()).unwrap_or("<none>")
        );
        let user = user.ok_or(TokenError::Unauthenticated)?;

        let issued = self.sign(secret, &user.id, now).inspect_err(|e| {
            tracing::error!("Error generating token: {e}");
        })?;
        tracing::info!(
            "Successfully generated token for user {} (expires at {})",
            issued.user_id,
            issued.expires_at
        );
        Ok(issued)
    }

    /// Both the key and the secret must be configured, even though only the
    /// secret signs: a token without a matching key is useless to the client.
    fn secret(&self) -> Result<&str, TokenError> {
        match (
            self.config.api_key.as_deref(),
            self.config.api_secret.as_deref(),
        ) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => Ok(secret),
            _ => Err(TokenError::MissingConfig),
        }
    }

    fn sign(&self, secret: &str, user_id: &str, now: i64) -> Result<IssuedToken, TokenError> {
        let claims = PlatformTokenClaims {
            user_id: user_id.to_string(),
            iat: now - self.config.token_skew_secs,
            exp: now + self.config.token_ttl_secs,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )?;

        Ok(IssuedToken {
            token,
            user_id: claims.user_id,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}
