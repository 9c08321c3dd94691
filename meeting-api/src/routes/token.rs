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

//! Handler for platform access token issuance.

use axum::{extract::State, Json};
use videomeet_types::responses::{APIResponse, TokenResponse};

use crate::auth::{Session, SessionCredential};
use crate::error::AppError;
use crate::state::AppState;

/// POST /api/v1/token
///
/// The session is only verified after the platform credentials are known
/// to be configured, so a misconfigured server never touches the session.
pub async fn issue_token(
    State(state): State<AppState>,
    credential: SessionCredential,
) -> Result<Json<APIResponse<TokenResponse>>, AppError> {
    let session = Session::new(&state.session_secret, &credential);
    let issued = state.issuer.issue(&session).await?;

    Ok(Json(APIResponse::ok(TokenResponse {
        token: issued.token,
        user_id: issued.user_id,
        expires_at: issued.expires_at,
    })))
}
