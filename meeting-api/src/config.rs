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

//! Application configuration loaded from environment variables.

use std::env;

/// Configuration for the token backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:8081").
    pub listen_addr: String,
    /// Secret shared with the authentication provider, used to verify session tokens.
    pub session_secret: String,
    /// Video platform credentials. Either may be absent; token issuance
    /// reports the gap per request instead of refusing to start.
    pub platform: PlatformConfig,
}

/// Video platform credentials and token lifetime settings.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    /// Access token lifetime in seconds (default: 3600).
    pub token_ttl_secs: i64,
    /// How far `iat` is backdated to tolerate clock skew (default: 60).
    pub token_skew_secs: i64,
}

impl PlatformConfig {
    pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
    pub const DEFAULT_TOKEN_SKEW_SECS: i64 = 60;

    pub fn new(api_key: Option<String>, api_secret: Option<String>) -> Self {
        Self {
            api_key,
            api_secret,
            token_ttl_secs: Self::DEFAULT_TOKEN_TTL_SECS,
            token_skew_secs: Self::DEFAULT_TOKEN_SKEW_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required
    /// - `SESSION_SECRET`
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:8081"`)
    /// - `STREAM_VIDEO_API_KEY`, `STREAM_VIDEO_API_SECRET`
    /// - `TOKEN_TTL_SECS` (default: `"3600"`)
    /// - `TOKEN_SKEW_SECS` (default: `"60"`)
    pub fn from_env() -> Result<Self, String> {
        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| "SESSION_SECRET environment variable is required")?;

        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8081".to_string());

        let api_key = env::var("STREAM_VIDEO_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());
        let api_secret = env::var("STREAM_VIDEO_API_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        let token_ttl_secs = parse_secs("TOKEN_TTL_SECS", PlatformConfig::DEFAULT_TOKEN_TTL_SECS)?;
        let token_skew_secs =
            parse_secs("TOKEN_SKEW_SECS", PlatformConfig::DEFAULT_TOKEN_SKEW_SECS)?;

        if api_key.is_none() || api_secret.is_none() {
            tracing::warn!(
                "STREAM_VIDEO_API_KEY or STREAM_VIDEO_API_SECRET is unset; token requests will fail"
            );
        }

        Ok(Self {
            listen_addr,
            session_secret,
            platform: PlatformConfig {
                api_key,
                api_secret,
                token_ttl_secs,
                token_skew_secs,
            },
        })
    }
}

fn parse_secs(var: &str, default: i64) -> Result<i64, String> {
    match env::var(var) {
        Ok(raw) => raw
            .parse::<i64>()
            .map_err(|_| format!("{var} must be a valid integer")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "SESSION_SECRET",
        "LISTEN_ADDR",
        "STREAM_VIDEO_API_KEY",
        "STREAM_VIDEO_API_SECRET",
        "TOKEN_TTL_SECS",
        "TOKEN_SKEW_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn session_secret_is_required() {
        clear_env();
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("SESSION_SECRET"));
    }

    #[test]
    #[serial]
    fn defaults_apply_when_optional_vars_unset() {
        clear_env();
        env::set_var("SESSION_SECRET", "s3cret");
        let config = Config::from_env().expect("should load");
        assert_eq!(config.listen_addr, "0.0.0.0:8081");
        assert_eq!(config.platform.token_ttl_secs, 3600);
        assert_eq!(config.platform.token_skew_secs, 60);
        assert!(config.platform.api_key.is_none());
        assert!(config.platform.api_secret.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn empty_platform_credentials_count_as_missing() {
        clear_env();
        env::set_var("SESSION_SECRET", "s3cret");
        env::set_var("STREAM_VIDEO_API_KEY", "key");
        env::set_var("STREAM_VIDEO_API_SECRET", "");
        let config = Config::from_env().expect("should load");
        assert_eq!(config.platform.api_key.as_deref(), Some("key"));
        assert!(config.platform.api_secret.is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_ttl_is_rejected() {
        clear_env();
        env::set_var("SESSION_SECRET", "s3cret");
        env::set_var("TOKEN_TTL_SECS", "an hour");
        let err = Config::from_env().unwrap_err();
        assert!(err.contains("TOKEN_TTL_SECS"));
        clear_env();
    }
}
