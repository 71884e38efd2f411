//! Deep-link canonicalization and signature verification.
//!
//! This crate provides:
//! - Canonical-form serialization of deep-link URLs (signature parameter
//!   stripped, remaining query parameters sorted by name)
//! - ECDSA P-256 verification of the detachable `sig` query parameter
//!   against a fixed, embedded public key

pub mod canonical;
pub mod error;
pub mod keys;
pub mod verifier;

pub use canonical::{canonicalize, SIG_PARAM};
pub use error::KeyError;
pub use verifier::{LinkVerifier, VerificationVerdict};
