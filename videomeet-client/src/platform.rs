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

//! Video platform client.
//!
//! [`VideoClient`] is what the rest of the crate programs against; the
//! HTTP implementation talks to the platform's REST API. A client is bound
//! to one user for its whole life: switching users means disconnecting and
//! connecting a new one (see [`ClientProvider`](crate::provider::ClientProvider)).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use videomeet_types::{
    CallData, CallInfo, CreateGuestRequest, CreateGuestResponse, GetOrCreateCallRequest,
    GetOrCreateCallResponse, UserDescriptor,
};

use crate::error::ClientError;
use crate::token_provider::TokenProvider;

/// Call type used for meetings created by videomeet.
pub const DEFAULT_CALL_TYPE: &str = "default";

/// Default REST endpoint of the video platform.
pub const DEFAULT_PLATFORM_URL: &str = "https://video.stream-io-api.com";

/// Everything needed to connect one user.
#[derive(Clone)]
pub struct ClientOptions {
    pub api_key: String,
    pub user: UserDescriptor,
    /// `None` for guests, who authenticate through the platform's guest endpoint.
    pub token_provider: Option<Arc<dyn TokenProvider>>,
}

impl std::fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientOptions")
            .field("user", &self.user)
            .field("token_provider", &self.token_provider.is_some())
            .finish_non_exhaustive()
    }
}

/// A connected platform client.
#[async_trait]
pub trait VideoClient: Send + Sync {
    /// The user this client is connected as.
    fn user(&self) -> &UserDescriptor;

    /// Fetch the call `call_type:call_id`, creating it with `data` if it
    /// does not exist yet.
    async fn get_or_create_call(
        &self,
        call_type: &str,
        call_id: &str,
        data: CallData,
    ) -> Result<CallInfo, ClientError>;

    /// Disconnect the user. The client is unusable afterwards.
    async fn disconnect_user(&self) -> Result<(), ClientError>;
}

/// Builds connected clients.
#[async_trait]
pub trait Connector: Send + Sync {
    type Client: VideoClient;

    async fn connect(&self, options: ClientOptions) -> Result<Self::Client, ClientError>;
}

/// [`Connector`] for the platform's REST API.
#[derive(Debug, Clone)]
pub struct PlatformConnector {
    base_url: String,
    http: Client,
}

impl PlatformConnector {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn guest_token(&self, api_key: &str, user: &UserDescriptor) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/video/guest", self.base_url))
            .query(&[("api_key", api_key)])
            .header("stream-auth-type", "anonymous")
            .json(&CreateGuestRequest { user: user.clone() })
            .send()
            .await?;
        let guest: CreateGuestResponse = parse_platform_response(response).await?;
        Ok(guest.access_token)
    }
}

impl Default for PlatformConnector {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_URL)
    }
}

#[async_trait]
impl Connector for PlatformConnector {
    type Client = PlatformClient;

    async fn connect(&self, options: ClientOptions) -> Result<PlatformClient, ClientError> {
        if options.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let token = match (&options.token_provider, options.user.is_guest()) {
            (Some(provider), _) => provider.token().await?,
            (None, true) => self.guest_token(&options.api_key, &options.user).await?,
            (None, false) => return Err(ClientError::NotAuthenticated),
        };

        log::info!("Connected to video platform as {}", options.user.id);

        Ok(PlatformClient {
            base_url: self.base_url.clone(),
            http: self.http.clone(),
            api_key: options.api_key,
            user: options.user,
            token_provider: options.token_provider,
            token: Mutex::new(Some(token)),
            connected: AtomicBool::new(true),
        })
    }
}

/// REST-backed [`VideoClient`].
pub struct PlatformClient {
    base_url: String,
    http: Client,
    api_key: String,
    user: UserDescriptor,
    token_provider: Option<Arc<dyn TokenProvider>>,
    token: Mutex<Option<String>>,
    connected: AtomicBool,
}

impl PlatformClient {
    async fn current_token(&self) -> Result<String, ClientError> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }
        let provider = self
            .token_provider
            .as_ref()
            .ok_or(ClientError::NotAuthenticated)?;
        let token = provider.token().await?;
        *slot = Some(token.clone());
        Ok(token)
    }

    /// Drop the cached token so the next request asks the provider again.
    async fn invalidate_token(&self) {
        *self.token.lock().await = None;
    }

    async fn send_get_or_create(
        &self,
        url: &str,
        body: &GetOrCreateCallRequest,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self.current_token().await?;
        let response = self
            .http
            .post(url)
            .query(&[("api_key", self.api_key.as_str())])
            .header(reqwest::header::AUTHORIZATION, token)
            .header("stream-auth-type", "jwt")
            .json(body)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl VideoClient for PlatformClient {
    fn user(&self) -> &UserDescriptor {
        &self.user
    }

    async fn get_or_create_call(
        &self,
        call_type: &str,
        call_id: &str,
        data: CallData,
    ) -> Result<CallInfo, ClientError> {
        if !self.connected.load(Ordering::SeqCst) {
            return Err(ClientError::Disconnected);
        }

        let url = format!("{}/video/call/{call_type}/{call_id}", self.base_url);
        let body = GetOrCreateCallRequest { data: Some(data) };

        let mut response = self.send_get_or_create(&url, &body).await?;
        // An expired token is refreshed once through the provider.
        if response.status() == StatusCode::UNAUTHORIZED && self.token_provider.is_some() {
            log::info!("Platform token rejected, requesting a fresh one");
            self.invalidate_token().await;
            response = self.send_get_or_create(&url, &body).await?;
        }

        let created: GetOrCreateCallResponse = parse_platform_response(response).await?;
        log::debug!(
            "Call {} ready (created: {})",
            created.call.cid,
            created.created
        );
        Ok(created.call)
    }

    async fn disconnect_user(&self) -> Result<(), ClientError> {
        if self.connected.swap(false, Ordering::SeqCst) {
            self.invalidate_token().await;
            log::info!("Disconnected {} from video platform", self.user.id);
        }
        Ok(())
    }
}

async fn parse_platform_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    match status {
        200 | 201 => Ok(response.json().await?),
        401 => Err(ClientError::NotAuthenticated),
        _ => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError { status, body })
        }
    }
}
