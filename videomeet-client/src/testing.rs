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

//! In-memory platform doubles shared by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use videomeet_types::{CallData, CallInfo, UserDescriptor};

use crate::error::ClientError;
use crate::platform::{ClientOptions, Connector, VideoClient};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Connect {
        user_id: String,
        with_token_provider: bool,
    },
    Disconnect {
        user_id: String,
    },
    GetOrCreate {
        call_type: String,
        call_id: String,
        data: CallData,
    },
}

#[derive(Default)]
struct Shared {
    events: Mutex<Vec<Event>>,
    live: AtomicUsize,
    fail_connect: bool,
    fail_calls: bool,
}

impl Shared {
    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

#[derive(Clone, Default)]
pub struct FakeConnector {
    shared: Arc<Shared>,
}

impl FakeConnector {
    pub fn failing() -> Self {
        Self {
            shared: Arc::new(Shared {
                fail_connect: true,
                ..Default::default()
            }),
        }
    }

    pub fn failing_calls() -> Self {
        Self {
            shared: Arc::new(Shared {
                fail_calls: true,
                ..Default::default()
            }),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.shared.events.lock().unwrap().clone()
    }

    /// Calls created or fetched so far, as `(call_type, call_id, data)`.
    pub fn calls(&self) -> Vec<(String, String, CallData)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::GetOrCreate {
                    call_type,
                    call_id,
                    data,
                } => Some((call_type, call_id, data)),
                _ => None,
            })
            .collect()
    }

    pub fn live_clients(&self) -> usize {
        self.shared.live.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for FakeConnector {
    type Client = FakeClient;

    async fn connect(&self, options: ClientOptions) -> Result<FakeClient, ClientError> {
        self.shared.record(Event::Connect {
            user_id: options.user.id.clone(),
            with_token_provider: options.token_provider.is_some(),
        });
        if self.shared.fail_connect {
            return Err(ClientError::ServerError {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        self.shared.live.fetch_add(1, Ordering::SeqCst);
        Ok(FakeClient {
            user: options.user,
            shared: self.shared.clone(),
            connected: AtomicBool::new(true),
        })
    }
}

pub struct FakeClient {
    user: UserDescriptor,
    shared: Arc<Shared>,
    connected: AtomicBool,
}

impl FakeClient {
    /// A standalone connected client for `user`, with its connector.
    pub fn connected(user: UserDescriptor, connector: &FakeConnector) -> Self {
        connector.shared.live.fetch_add(1, Ordering::SeqCst);
        Self {
            user,
            shared: connector.shared.clone(),
            connected: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl VideoClient for FakeClient {
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
        self.shared.record(Event::GetOrCreate {
            call_type: call_type.to_string(),
            call_id: call_id.to_string(),
            data: data.clone(),
        });
        if self.shared.fail_calls {
            return Err(ClientError::ServerError {
                status: 500,
                body: "call creation failed".to_string(),
            });
        }
        Ok(CallInfo {
            id: call_id.to_string(),
            call_type: call_type.to_string(),
            cid: format!("{call_type}:{call_id}"),
            custom: data.custom,
            starts_at: data.starts_at,
            created_by: Some(self.user.clone()),
        })
    }

    async fn disconnect_user(&self) -> Result<(), ClientError> {
        if self.connected.swap(false, Ordering::SeqCst) {
            self.shared.live.fetch_sub(1, Ordering::SeqCst);
            self.shared.record(Event::Disconnect {
                user_id: self.user.id.clone(),
            });
        }
        Ok(())
    }
}
