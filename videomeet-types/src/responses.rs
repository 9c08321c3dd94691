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

//! Response types for the token backend REST API.
//!
//! Every endpoint returns an [`APIResponse<T>`] envelope:
//! - On success: `{ "success": true,  "result": <T> }`
//! - On failure: `{ "success": false, "result": <APIError> }`

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level API response envelope.
///
/// # Success example
///
/// ```json
/// { "success": true, "result": { "token": "eyJ...", "user_id": "u1", "expires_at": 1707004800 } }
/// ```
///
/// # Error example
///
/// ```json
/// { "success": false, "result": { "code": "UNAUTHORIZED", "message": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

impl<A: Serialize> APIResponse<A> {
    /// Wrap a successful result.
    pub fn ok(result: A) -> Self {
        Self {
            success: true,
            result,
        }
    }
}

impl APIResponse<crate::error::APIError> {
    /// Wrap an error result.
    pub fn error(err: crate::error::APIError) -> Self {
        Self {
            success: false,
            result: err,
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint-specific response payloads
// ---------------------------------------------------------------------------

/// Response payload for `POST /api/v1/token`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TokenResponse {
    /// Signed platform access token.
    pub token: String,
    /// The platform user id the token is bound to.
    pub user_id: String,
    /// Unix timestamp in seconds after which the token is rejected.
    pub expires_at: i64,
}

/// Response payload for `GET /profile`.
///
/// Mirrors the current-user state the auth provider exposes to the UI.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProfileResponse {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::APIError;

    #[test]
    fn error_envelope_has_success_false() {
        let body = APIResponse::error(APIError::unauthorized());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["result"]["code"], "UNAUTHORIZED");
        assert!(json["result"].get("engineering_error").is_none());
    }

    #[test]
    fn profile_omits_absent_fields() {
        let profile = ProfileResponse {
            user_id: "u1".to_string(),
            username: None,
            image_url: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"user_id":"u1"}"#);
    }
}
