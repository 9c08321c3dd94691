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

//! Error types for the videomeet client.

use thiserror::Error;

/// Errors returned by backend calls, the platform client and the
/// connection lifecycle.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The platform API key is not configured. Fatal for initialization.
    #[error("Missing video platform API key")]
    MissingApiKey,

    /// The session is missing, expired, or invalid (HTTP 401).
    #[error("Not authenticated. Please log in.")]
    NotAuthenticated,

    /// The token provider could not supply a token.
    #[error("Token provider failed: {0}")]
    Token(#[from] TokenProviderError),

    /// The client was used after `disconnect_user`.
    #[error("Client is disconnected")]
    Disconnected,

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Errors a [`TokenProvider`](crate::token_provider::TokenProvider) hands back
/// to the platform client instead of a token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenProviderError {
    /// The backend has no platform key/secret configured.
    #[error("Missing video platform API key or secret")]
    MissingConfig,

    /// There is no authenticated user to issue a token for.
    #[error("User not authenticated")]
    Unauthenticated,

    /// Signing or transport failed.
    #[error("Failed to generate token: {0}")]
    Failed(String),
}
