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

//! Identity resolution: who the platform client connects as.
//!
//! A signed-in user connects under their auth provider id. Everyone else
//! gets a throwaway guest identity that lives only as long as the
//! connection it was generated for.

use rand::Rng;
use videomeet_types::call::GUEST_USER_TYPE;
use videomeet_types::UserDescriptor;

/// Alphabet and length of generated guest ids (URL-safe, 21 chars).
const GUEST_ID_ALPHABET: &[u8] =
    b"_-0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const GUEST_ID_LEN: usize = 21;

/// The auth provider's view of the current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub username: Option<String>,
    pub image_url: Option<String>,
}

/// Current-user state as reported by the auth provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    /// `false` while the provider is still resolving the session.
    pub is_loaded: bool,
    pub user: Option<AuthUser>,
}

impl AuthState {
    pub fn loading() -> Self {
        Self::default()
    }

    pub fn signed_out() -> Self {
        Self {
            is_loaded: true,
            user: None,
        }
    }

    pub fn signed_in(user: AuthUser) -> Self {
        Self {
            is_loaded: true,
            user: Some(user),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Authenticated {
        id: String,
        name: String,
        image: Option<String>,
    },
    Guest {
        id: String,
        name: String,
    },
}

impl Identity {
    pub fn guest() -> Self {
        let id = generate_guest_id();
        Identity::Guest {
            name: format!("Guest {id}"),
            id,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Identity::Authenticated { id, .. } | Identity::Guest { id, .. } => id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Identity::Authenticated { name, .. } | Identity::Guest { name, .. } => name,
        }
    }

    /// Only authenticated identities may request tokens from the backend.
    pub fn is_token_eligible(&self) -> bool {
        matches!(self, Identity::Authenticated { .. })
    }

    /// The user payload sent to the platform on connect.
    pub fn to_user_descriptor(&self) -> UserDescriptor {
        match self {
            Identity::Authenticated { id, name, image } => UserDescriptor {
                id: id.clone(),
                name: name.clone(),
                image: image.clone(),
                user_type: None,
            },
            Identity::Guest { id, name } => UserDescriptor {
                id: id.clone(),
                name: name.clone(),
                image: None,
                user_type: Some(GUEST_USER_TYPE.to_string()),
            },
        }
    }
}

impl From<&AuthUser> for Identity {
    fn from(user: &AuthUser) -> Self {
        let name = user
            .username
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or(&user.id)
            .to_string();
        Identity::Authenticated {
            id: user.id.clone(),
            name,
            image: user.image_url.clone(),
        }
    }
}

/// Resolve the identity to connect as, or `None` while auth is still loading.
///
/// Every call for a signed-out state yields a fresh guest.
pub fn resolve_identity(state: &AuthState) -> Option<Identity> {
    if !state.is_loaded {
        return None;
    }
    Some(match &state.user {
        Some(user) => Identity::from(user),
        None => Identity::guest(),
    })
}

fn generate_guest_id() -> String {
    let mut rng = rand::thread_rng();
    (0..GUEST_ID_LEN)
        .map(|_| GUEST_ID_ALPHABET[rng.gen_range(0..GUEST_ID_ALPHABET.len())] as char)
        .collect()
}
