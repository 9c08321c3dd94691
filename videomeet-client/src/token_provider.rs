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

//! Token providers: how the platform client obtains access tokens.

use async_trait::async_trait;

use crate::api::MeetingApiClient;
use crate::error::{ClientError, TokenProviderError};

/// Callback the platform client invokes whenever it needs a fresh token.
///
/// Failures are returned as typed errors; the platform client refuses to
/// proceed without a token rather than sending an unusable one.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    async fn token(&self) -> Result<String, TokenProviderError>;
}

#[async_trait]
impl TokenProvider for MeetingApiClient {
    async fn token(&self) -> Result<String, TokenProviderError> {
        match self.issue_token().await {
            Ok(issued) => Ok(issued.token),
            Err(e) => {
                let err = match e {
                    ClientError::NotAuthenticated => TokenProviderError::Unauthenticated,
                    ClientError::ServerError { ref body, .. }
                        if body.contains("MISSING_CONFIGURATION") =>
                    {
                        TokenProviderError::MissingConfig
                    }
                    other => TokenProviderError::Failed(other.to_string()),
                };
                log::error!("Error fetching platform token: {err}");
                Err(err)
            }
        }
    }
}

/// A fixed token, for pre-issued credentials.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

#[async_trait]
impl TokenProvider for StaticToken {
    async fn token(&self) -> Result<String, TokenProviderError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthMode;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn provider_with(response: ResponseTemplate) -> (MockServer, MeetingApiClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/token"))
            .respond_with(response)
            .mount(&server)
            .await;
        let client = MeetingApiClient::new(&server.uri(), AuthMode::Session("sess".into()));
        (server, client)
    }

    #[tokio::test]
    async fn backend_token_is_returned() {
        let (_server, provider) = provider_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({
                "success": true,
                "result": { "token": "tok-1", "user_id": "u1", "expires_at": 1 }
            }),
        ))
        .await;
        assert_eq!(provider.token().await.unwrap(), "tok-1");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_unauthenticated() {
        let (_server, provider) = provider_with(ResponseTemplate::new(401)).await;
        assert_eq!(
            provider.token().await.unwrap_err(),
            TokenProviderError::Unauthenticated
        );
    }

    #[tokio::test]
    async fn missing_configuration_is_recognised() {
        let (_server, provider) = provider_with(ResponseTemplate::new(500).set_body_json(
            serde_json::json!({
                "success": false,
                "result": { "code": "MISSING_CONFIGURATION", "message": "..." }
            }),
        ))
        .await;
        assert_eq!(
            provider.token().await.unwrap_err(),
            TokenProviderError::MissingConfig
        );
    }

    #[tokio::test]
    async fn other_failures_are_wrapped() {
        let (_server, provider) = provider_with(ResponseTemplate::new(502)).await;
        assert!(matches!(
            provider.token().await.unwrap_err(),
            TokenProviderError::Failed(_)
        ));
    }
}
