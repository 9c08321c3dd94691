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

//! Shared application state passed to every Axum handler via `State`.

use crate::config::Config;
use crate::token::TokenIssuer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Secret shared with the auth provider for verifying session JWTs.
    pub session_secret: String,
    /// Signs video platform access tokens.
    pub issuer: TokenIssuer,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            session_secret: config.session_secret.clone(),
            issuer: TokenIssuer::new(config.platform.clone()),
        }
    }
}
