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

//! Connection lifecycle: one live platform client per resolved identity.
//!
//! [`ClientProvider`] is fed the auth provider's state whenever it may have
//! changed. When the parts of that state the connection depends on change,
//! the live client (if any) is disconnected first and only then is a new
//! one connected for the fresh identity. While auth is still loading, no
//! connection is attempted and [`ClientProvider::client`] stays `None`.

use std::sync::Arc;

use crate::error::ClientError;
use crate::identity::{resolve_identity, AuthState, Identity};
use crate::platform::{ClientOptions, Connector, VideoClient};
use crate::token_provider::TokenProvider;

/// The slice of [`AuthState`] that forces a reconnect when it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
struct AuthDeps {
    is_loaded: bool,
    user_id: Option<String>,
    username: Option<String>,
    image_url: Option<String>,
}

impl From<&AuthState> for AuthDeps {
    fn from(state: &AuthState) -> Self {
        let user = state.user.as_ref();
        Self {
            is_loaded: state.is_loaded,
            user_id: user.map(|u| u.id.clone()),
            username: user.and_then(|u| u.username.clone()),
            image_url: user.and_then(|u| u.image_url.clone()),
        }
    }
}

struct LiveClient<C> {
    identity: Identity,
    client: C,
}

/// Owns at most one connected [`VideoClient`].
pub struct ClientProvider<K: Connector> {
    connector: K,
    api_key: Option<String>,
    token_provider: Arc<dyn TokenProvider>,
    deps: Option<AuthDeps>,
    live: Option<LiveClient<K::Client>>,
}

impl<K: Connector> ClientProvider<K> {
    /// `token_provider` is handed to authenticated connections only.
    pub fn new(connector: K, api_key: Option<String>, token_provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            connector,
            api_key,
            token_provider,
            deps: None,
            live: None,
        }
    }

    /// The connected client, or `None` while not ready.
    pub fn client(&self) -> Option<&K::Client> {
        self.live.as_ref().map(|live| &live.client)
    }

    /// The identity the live client is connected as.
    pub fn identity(&self) -> Option<&Identity> {
        self.live.as_ref().map(|live| &live.identity)
    }

    pub fn is_ready(&self) -> bool {
        self.live.is_some()
    }

    /// Reconcile the connection with the current auth state.
    ///
    /// A missing API key is reported every time a connection would be made.
    pub async fn sync(&mut self, state: &AuthState) -> Result<(), ClientError> {
        let deps = AuthDeps::from(state);
        if self.deps.as_ref() == Some(&deps) {
            return Ok(());
        }

        self.teardown().await;
        self.deps = Some(deps);

        let Some(identity) = resolve_identity(state) else {
            log::debug!("Auth state still loading, deferring platform connection");
            return Ok(());
        };

        let Some(api_key) = self.api_key.clone().filter(|k| !k.is_empty()) else {
            self.deps = None;
            return Err(ClientError::MissingApiKey);
        };

        let options = ClientOptions {
            api_key,
            user: identity.to_user_descriptor(),
            token_provider: identity
                .is_token_eligible()
                .then(|| self.token_provider.clone()),
        };

        match self.connector.connect(options).await {
            Ok(client) => {
                self.live = Some(LiveClient { identity, client });
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to connect {} to video platform: {e}", identity.id());
                self.deps = None;
                Err(e)
            }
        }
    }

    /// Tear down the live client, as on unmount.
    pub async fn shutdown(&mut self) {
        self.teardown().await;
        self.deps = None;
    }

    async fn teardown(&mut self) {
        if let Some(live) = self.live.take() {
            if let Err(e) = live.client.disconnect_user().await {
                log::warn!("Error disconnecting {}: {e}", live.identity.id());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::AuthUser;
    use crate::testing::{Event, FakeConnector};
    use crate::token_provider::StaticToken;

    fn provider(connector: FakeConnector) -> ClientProvider<FakeConnector> {
        ClientProvider::new(
            connector,
            Some("key".to_string()),
            Arc::new(StaticToken("tok".to_string())),
        )
    }

    fn signed_in(id: &str, username: &str) -> AuthState {
        AuthState::signed_in(AuthUser {
            id: id.to_string(),
            username: Some(username.to_string()),
            image_url: None,
        })
    }

    #[tokio::test]
    async fn loading_state_does_not_connect() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&AuthState::loading()).await.unwrap();

        assert!(provider.client().is_none());
        assert!(connector.events().is_empty());
    }

    #[tokio::test]
    async fn authenticated_identity_gets_token_provider() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&signed_in("u1", "alice")).await.unwrap();

        let client = provider.client().expect("connected");
        assert_eq!(client.user().name, "alice");
        assert_eq!(
            connector.events(),
            vec![Event::Connect {
                user_id: "u1".to_string(),
                with_token_provider: true
            }]
        );
    }

    #[tokio::test]
    async fn guest_identity_has_no_token_provider() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&AuthState::signed_out()).await.unwrap();

        let identity = provider.identity().expect("connected").clone();
        assert!(!identity.is_token_eligible());
        assert_eq!(
            connector.events(),
            vec![Event::Connect {
                user_id: identity.id().to_string(),
                with_token_provider: false
            }]
        );
    }

    #[tokio::test]
    async fn unchanged_state_keeps_connection_and_guest_id() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&AuthState::signed_out()).await.unwrap();
        let first = provider.identity().unwrap().id().to_string();
        provider.sync(&AuthState::signed_out()).await.unwrap();

        assert_eq!(provider.identity().unwrap().id(), first);
        assert_eq!(connector.events().len(), 1);
    }

    #[tokio::test]
    async fn identity_change_disconnects_before_connecting() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&signed_in("u1", "alice")).await.unwrap();
        provider.sync(&signed_in("u1", "alicia")).await.unwrap();

        assert_eq!(
            connector.events(),
            vec![
                Event::Connect {
                    user_id: "u1".to_string(),
                    with_token_provider: true
                },
                Event::Disconnect {
                    user_id: "u1".to_string()
                },
                Event::Connect {
                    user_id: "u1".to_string(),
                    with_token_provider: true
                },
            ]
        );
        assert_eq!(connector.live_clients(), 1);
        assert_eq!(provider.identity().unwrap().name(), "alicia");
    }

    #[tokio::test]
    async fn sign_out_replaces_user_with_guest() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&signed_in("u1", "alice")).await.unwrap();
        provider.sync(&AuthState::signed_out()).await.unwrap();

        let events = connector.events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[1],
            Event::Disconnect {
                user_id: "u1".to_string()
            }
        );
        assert!(matches!(
            &events[2],
            Event::Connect { with_token_provider: false, .. }
        ));
        assert_eq!(connector.live_clients(), 1);
    }

    #[tokio::test]
    async fn returning_to_loading_tears_down() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&signed_in("u1", "alice")).await.unwrap();
        provider.sync(&AuthState::loading()).await.unwrap();

        assert!(provider.client().is_none());
        assert_eq!(connector.live_clients(), 0);
    }

    #[tokio::test]
    async fn missing_api_key_is_fatal_and_repeats() {
        let connector = FakeConnector::default();
        let mut provider = ClientProvider::new(
            connector.clone(),
            None,
            Arc::new(StaticToken("tok".to_string())),
        );

        for _ in 0..2 {
            let err = provider.sync(&signed_in("u1", "alice")).await.unwrap_err();
            assert!(matches!(err, ClientError::MissingApiKey));
        }
        assert!(connector.events().is_empty());
        assert!(provider.client().is_none());
    }

    #[tokio::test]
    async fn missing_api_key_not_reported_while_loading() {
        let mut provider = ClientProvider::new(
            FakeConnector::default(),
            Some(String::new()),
            Arc::new(StaticToken("tok".to_string())),
        );
        provider.sync(&AuthState::loading()).await.unwrap();
    }

    #[tokio::test]
    async fn failed_connect_leaves_no_client_and_retries() {
        let connector = FakeConnector::failing();
        let mut provider = provider(connector.clone());

        assert!(provider.sync(&signed_in("u1", "alice")).await.is_err());
        assert!(provider.client().is_none());
        assert!(provider.sync(&signed_in("u1", "alice")).await.is_err());
        assert_eq!(connector.events().len(), 2);
    }

    #[tokio::test]
    async fn shutdown_disconnects() {
        let connector = FakeConnector::default();
        let mut provider = provider(connector.clone());

        provider.sync(&signed_in("u1", "alice")).await.unwrap();
        provider.shutdown().await;

        assert!(!provider.is_ready());
        assert_eq!(connector.live_clients(), 0);
        assert_eq!(
            connector.events().last(),
            Some(&Event::Disconnect {
                user_id: "u1".to_string()
            })
        );
    }
}
