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

//! Session route handlers: session check and profile.

use axum::{http::StatusCode, Json};
use videomeet_types::responses::{APIResponse, ProfileResponse};

use crate::auth::AuthUser;

/// GET /session -- returns 200 if the session JWT is valid, 401 otherwise.
pub async fn check_session(AuthUser(_): AuthUser) -> StatusCode {
    StatusCode::OK
}

/// GET /profile -- returns the current user as the auth provider describes it.
pub async fn get_profile(AuthUser(user): AuthUser) -> Json<APIResponse<ProfileResponse>> {
    Json(APIResponse::ok(ProfileResponse {
        user_id: user.id,
        username: user.username,
        image_url: user.image_url,
    }))
}
