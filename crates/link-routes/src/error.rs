use thiserror::Error;

/// Route-handler parameter errors.
///
/// These are expected, recoverable outcomes: a malformed parameter on an
/// otherwise-recognized link means "not a valid deep link", never a crash.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("missing required parameter: {0}")]
    MissingParam(String),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParam { name: String, reason: String },
}
