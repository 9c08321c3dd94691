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

use videomeet_client::resolve_identity;

use crate::cli_args::Backend;

/// Print the identity a new connection would use.
pub async fn whoami(backend: &Backend) -> anyhow::Result<()> {
    let state = backend.api_client().auth_state().await?;
    match (resolve_identity(&state), state.user) {
        (Some(identity), Some(_)) => {
            println!("Signed in as {} ({})", identity.name(), identity.id());
        }
        _ => println!("Signed out: you will join meetings as a guest"),
    }
    Ok(())
}
