/// Errors produced by the `forexmentor-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// An invite code request body did not match `{ "code": <string> }`.
    #[error("malformed invite code request: {reason}")]
    MalformedRequest { reason: String },

    /// A validator verdict carried a field of the wrong type.
    #[error("malformed verdict: {reason}")]
    MalformedVerdict { reason: String },

    /// A line style ordinal was outside the legal domain `0..=4`.
    #[error("invalid line style {value}: must be in 0..=4")]
    InvalidLineStyle { value: u8 },

    /// A crosshair line references a style that is not offered as an option.
    #[error("{axis} line style {value} is not a selectable option")]
    StyleNotSelectable { axis: &'static str, value: u8 },
}
