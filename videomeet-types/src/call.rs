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

//! Video platform payloads: users and calls.
//!
//! These mirror the subset of the platform's REST contract that videomeet
//! uses: connecting a user and the `get-or-create` call endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `type` value the platform expects for guest users.
pub const GUEST_USER_TYPE: &str = "guest";

/// User descriptor sent to the platform when a client connects.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UserDescriptor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `Some("guest")` for guest users, absent for authenticated users.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_type: Option<String>,
}

impl UserDescriptor {
    pub fn is_guest(&self) -> bool {
        self.user_type.as_deref() == Some(GUEST_USER_TYPE)
    }
}

/// Call fields set on creation.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CallData {
    /// Free-form metadata; videomeet stores `description` here.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub custom: Map<String, Value>,

    /// Scheduled start, if the meeting does not start immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
}

impl CallData {
    /// Key under which the meeting description is stored in `custom`.
    pub const DESCRIPTION_KEY: &'static str = "description";

    pub fn description(&self) -> Option<&str> {
        self.custom
            .get(Self::DESCRIPTION_KEY)
            .and_then(Value::as_str)
    }
}

/// Request body for `POST /video/call/{type}/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct GetOrCreateCallRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CallData>,
}

/// Call state as returned by the platform.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CallInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub call_type: String,
    /// Combined `type:id` identifier.
    #[serde(default)]
    pub cid: String,
    #[serde(default)]
    pub custom: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserDescriptor>,
}

/// Response body for `POST /video/call/{type}/{id}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GetOrCreateCallResponse {
    pub call: CallInfo,
    /// `true` if the call did not exist before this request.
    #[serde(default)]
    pub created: bool,
}

/// Request body for `POST /video/guest`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateGuestRequest {
    pub user: UserDescriptor,
}

/// Response body for `POST /video/guest`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateGuestResponse {
    /// Platform-issued token for the guest session.
    pub access_token: String,
    pub user: UserDescriptor,
}
