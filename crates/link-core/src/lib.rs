//! Signed deep-link parsing and dispatch for the wallet.
//!
//! Accepts an incoming navigation URL, verifies the optional detachable
//! signature against the embedded product key, resolves the path to a typed
//! [`Destination`], and returns an accept/reject verdict. The caller
//! performs the actual navigation and may apply additional trust policy on
//! top of the `signed` flag.

pub mod error;
pub mod parser;

pub use error::DeepLinkError;
pub use parser::{parse, parse_with_verifier, DeepLink, ALLOWED_HOST, MAX_URL_LENGTH};

pub use link_routes::{Destination, QueryParams, RouteError};
pub use link_verify::{canonicalize, LinkVerifier, VerificationVerdict, SIG_PARAM};
