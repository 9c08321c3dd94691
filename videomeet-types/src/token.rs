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

//! JWT claims used by the backend.
//!
//! Two kinds of token cross the backend boundary:
//! - the **session token**, signed by the authentication provider and
//!   presented by the browser/CLI to prove who the current user is;
//! - the **platform access token**, signed by the backend with the video
//!   platform's API secret and handed to the platform client.

use serde::{Deserialize, Serialize};

/// JWT payload of a video platform access token.
///
/// # Example payload
///
/// ```json
/// { "user_id": "user_2abc", "iat": 1707001140, "exp": 1707004800 }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PlatformTokenClaims {
    /// Platform user id the token authorizes.
    pub user_id: String,

    /// Issued-at (Unix seconds). Backdated to tolerate clock skew.
    pub iat: i64,

    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
}

/// JWT payload of a session token issued by the authentication provider.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    /// Authenticated user id.
    pub sub: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
}
