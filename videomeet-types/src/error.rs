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

//! API error types.
//!
//! Every failed API response is returned as `APIResponse<APIError>` with `success: false`.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `result` field of a failed [`super::APIResponse`].
///
/// The `code` field is a machine-readable identifier (e.g. `"UNAUTHORIZED"`).
/// The `message` field is a human-readable description suitable for display.
/// The `engineering_error` field carries debug-level detail that is useful
/// during development but should be stripped or redacted in production.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIError {
    /// Machine-readable error code (e.g. `"UNAUTHORIZED"`, `"MISSING_CONFIGURATION"`).
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Optional engineering-level detail for debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    pub fn unauthorized() -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: "User not authenticated".to_string(),
            engineering_error: None,
        }
    }

    pub fn unauthorized_with_detail(detail: &str) -> Self {
        Self {
            code: "UNAUTHORIZED".to_string(),
            message: "User not authenticated".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }

    pub fn missing_configuration(detail: &str) -> Self {
        Self {
            code: "MISSING_CONFIGURATION".to_string(),
            message: "Missing video platform API key or secret".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }

    pub fn token_signing_failed(detail: &str) -> Self {
        Self {
            code: "TOKEN_SIGNING_FAILED".to_string(),
            message: "Failed to generate token".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for APIError {}
