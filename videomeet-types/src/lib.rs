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

//! Shared API types for videomeet.
//!
//! This crate defines the contract between the token backend (`meeting-api`),
//! the client library, and the video platform's REST surface.
//! It is intentionally framework-agnostic: no axum, no reqwest.

pub mod call;
pub mod error;
pub mod responses;
pub mod token;

pub use call::{
    CallData, CallInfo, CreateGuestRequest, CreateGuestResponse, GetOrCreateCallRequest,
    GetOrCreateCallResponse, UserDescriptor,
};
pub use error::APIError;
pub use responses::APIResponse;
pub use token::{PlatformTokenClaims, SessionClaims};
