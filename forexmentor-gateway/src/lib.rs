//! HTTP gateway for the ForexMentor service.
//!
//! Serves the invite code validation endpoint, which relays verdicts from
//! the backend query service, and the chart crosshair defaults.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
