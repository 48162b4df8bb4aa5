use thiserror::Error;

/// Error type for token operations.
///
/// Validation failures are split into three kinds so callers can tell a
/// token that never parsed apart from one that parsed but was forged, and
/// from one that was genuine but stale.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token signature does not match")]
    BadSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}
