//! Embedded production verifying key for signed deep links.
//!
//! JWK-style affine coordinates of a NIST P-256 public key. The matching
//! private key lives in the link-signing service and is not part of this
//! repository.

/// Curve the deep-link signing key lives on.
pub const PUBLIC_KEY_CURVE: &str = "P-256";

/// Affine x coordinate, unpadded base64url.
pub const PUBLIC_KEY_X: &str = "leatTjARJZP8BTTu61Ptr7mil0fCNVZfsO9PWWdoXvA";

/// Affine y coordinate, unpadded base64url.
pub const PUBLIC_KEY_Y: &str = "iI7pWrYQy0MOBwmMoz6AMlWR7oMsYOFRweEl6hOoWm4";
