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

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use url::Url;
use videomeet_client::{AuthMode, MeetingApiClient};

/// Videomeet CLI
///
/// Create video meetings and inspect your session from the command line.
/// Without a session you act as a guest.
#[derive(Parser, Debug)]
#[clap(name = "videomeet")]
pub struct Opt {
    #[clap(flatten)]
    pub backend: Backend,

    #[clap(subcommand)]
    pub mode: Mode,
}

#[derive(Args, Debug, Clone)]
pub struct Backend {
    /// Token backend URL.
    #[clap(long = "api-url", env = "MEETING_API_URL", default_value = "http://localhost:8081")]
    pub api_url: Url,

    /// Session JWT from the authentication provider. Omit to act as a guest.
    #[clap(long = "session", env = "VIDEOMEET_SESSION", hide_env_values = true)]
    pub session: Option<String>,
}

impl Backend {
    pub fn api_client(&self) -> MeetingApiClient {
        let auth = match self.session.as_deref().filter(|s| !s.is_empty()) {
            Some(session) => AuthMode::Session(session.to_string()),
            None => AuthMode::Anonymous,
        };
        MeetingApiClient::new(self.api_url.as_str(), auth)
    }
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Show who you are signed in as.
    Whoami,

    /// Print a platform access token for the signed-in user.
    Token,

    /// Create a new meeting and print its shareable link.
    NewMeeting(NewMeeting),
}

#[derive(Args, Debug, Clone)]
pub struct NewMeeting {
    /// Video platform API key.
    #[clap(long = "api-key", env = "STREAM_VIDEO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Video platform REST endpoint.
    #[clap(
        long = "platform-url",
        env = "STREAM_VIDEO_BASE_URL",
        default_value = "https://video.stream-io-api.com"
    )]
    pub platform_url: Url,

    /// Base URL shareable links point to.
    #[clap(long = "base-url", env = "BASE_URL", default_value = "http://localhost:3000")]
    pub base_url: Url,

    /// Meeting description (up to 500 characters).
    #[clap(long = "description", short = 'd')]
    pub description: Option<String>,

    /// Scheduled start as RFC 3339, e.g. 2026-10-20T09:00:00Z.
    /// Omit to start immediately.
    #[clap(long = "start-at")]
    pub start_at: Option<DateTime<Utc>>,

    /// Comma-separated participant emails. Omit to let anyone with the link join.
    #[clap(long = "participants", short = 'p')]
    pub participants: Option<String>,
}
