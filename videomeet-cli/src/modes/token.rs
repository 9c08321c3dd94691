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

use anyhow::bail;
use tracing::debug;
use videomeet_client::TokenProvider;

use crate::cli_args::Backend;

/// Fetch a platform access token for the signed-in user and print it.
pub async fn token(backend: &Backend) -> anyhow::Result<()> {
    let api = backend.api_client();
    if !api.is_signed_in() {
        bail!("Guests cannot request tokens. Pass --session to sign in.");
    }
    debug!("Requesting platform token from {}", backend.api_url);
    let token = api.token().await?;
    println!("{token}");
    Ok(())
}
