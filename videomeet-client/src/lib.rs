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

//! Client library for videomeet.
//!
//! Resolves who the user is (signed in or guest), keeps one video platform
//! connection per identity, and drives the meeting creation form.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use videomeet_client::{
//!     AuthMode, ClientProvider, CreateMeetingForm, MeetingApiClient, PlatformConnector,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = MeetingApiClient::new(
//!     "http://localhost:8081",
//!     AuthMode::Session("eyJ...".to_string()),
//! );
//! let auth = api.auth_state().await?;
//!
//! let mut provider = ClientProvider::new(
//!     PlatformConnector::default(),
//!     Some("platform-api-key".to_string()),
//!     Arc::new(api),
//! );
//! provider.sync(&auth).await?;
//!
//! let mut form = CreateMeetingForm::new("https://meet.example.com");
//! form.set_description_enabled(true);
//! form.set_description("Standup")?;
//! form.submit(provider.client(), provider.identity()).await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod error;
pub mod form;
pub mod identity;
pub mod link;
pub mod platform;
pub mod provider;
pub mod token_provider;

#[cfg(test)]
mod testing;

pub use api::{AuthMode, MeetingApiClient};
pub use error::{ClientError, TokenProviderError};
pub use form::{CreateMeetingForm, FormError, FormState, SubmitOutcome};
pub use identity::{resolve_identity, AuthState, AuthUser, Identity};
pub use link::meeting_link;
pub use platform::{Connector, PlatformClient, PlatformConnector, VideoClient};
pub use provider::ClientProvider;
pub use token_provider::{StaticToken, TokenProvider};
pub use videomeet_types;
