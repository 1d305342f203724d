//! Client for the ForexMentor backend query service.
//!
//! The backend owns invite code state. This crate exposes the
//! [`InviteCodeValidator`] seam the gateway depends on, and a
//! [`QueryClient`] that implements it over the backend's HTTP query API.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod client;
pub mod config;
pub mod error;
mod query;
pub mod validator;

pub use client::{QueryClient, MAX_ERROR_BODY_BYTES, VALIDATE_CODE_QUERY};
pub use config::BackendConfig;
pub use error::BackendError;
pub use validator::InviteCodeValidator;
