//! Core types for the ForexMentor service.
//!
//! Defines the invite code request/result contract shared by the HTTP
//! gateway and the backend client, and the chart crosshair configuration
//! consumed by presentation code.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod chart;
pub mod error;
pub mod invite;

pub use chart::{
    CrosshairMode, CrosshairSettings, LineStyle, LineStyleOption, DEFAULT_CROSSHAIR_SETTINGS,
    LINE_STYLE_OPTIONS,
};
pub use error::CoreError;
pub use invite::{
    InviteCodeCheckRequest, InviteCodeCheckResult, INVALID_REQUEST_REASON, SERVER_ERROR_REASON,
};
