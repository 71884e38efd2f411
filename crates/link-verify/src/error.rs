use thiserror::Error;

/// Verifying-key import errors.
///
/// Per-link verification failures never surface here; they resolve to
/// [`VerificationVerdict::Invalid`](crate::VerificationVerdict::Invalid).
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("invalid key coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("point is not on the P-256 curve")]
    NotOnCurve,
}
