//! Invite code validator abstraction.
//!
//! Lets the gateway run against the real backend or a substitute
//! without changing request handling.

use async_trait::async_trait;
use forexmentor_core::InviteCodeCheckResult;

use crate::BackendError;

/// The external authority on invite code state.
///
/// Implementations must be `Send + Sync`; a single instance is shared by
/// all concurrent requests for the life of the process.
#[async_trait]
pub trait InviteCodeValidator: Send + Sync {
    /// Ask the authority whether `code` is valid.
    ///
    /// `code` is passed exactly as received. Business-level rejections
    /// (expired, already used, ...) are `Ok` results with `is_valid == false`.
    ///
    /// # Errors
    /// Returns a [`BackendError`] if no verdict could be obtained.
    async fn validate_code(&self, code: &str) -> Result<InviteCodeCheckResult, BackendError>;
}
