use link_routes::{Destination, QueryParams};
use link_verify::{LinkVerifier, VerificationVerdict};
use serde::Serialize;
use url::Url;

use crate::error::DeepLinkError;

/// Maximum accepted length of a raw deep-link string. Longer inputs are
/// rejected before the URL parser ever sees them.
pub const MAX_URL_LENGTH: usize = 500;

/// The only host whose URLs are treated as deep links.
pub const ALLOWED_HOST: &str = "link.anvilwallet.app";

/// A recognized, resolved deep link.
#[derive(Debug, Clone, Serialize)]
pub struct DeepLink {
    /// The parsed incoming URL, signature parameter included.
    #[serde(serialize_with = "serialize_url")]
    pub url: Url,
    /// Where the wallet should navigate.
    pub destination: Destination,
    /// True only when a signature was present and verified against the
    /// trusted key. An unsigned link is not an error, just untrusted.
    pub signed: bool,
}

fn serialize_url<S>(url: &Url, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(url.as_str())
}

/// Parses and verifies an incoming navigation URL against the embedded
/// product key.
///
/// Returns `Ok(None)` for anything that is not a recognized, well-formed,
/// trustworthy deep link. Only URL syntax errors surface as `Err`; callers
/// must guard the invocation accordingly.
pub fn parse(raw: &str) -> Result<Option<DeepLink>, DeepLinkError> {
    parse_with_verifier(raw, LinkVerifier::shared())
}

/// Like [`parse`], with an explicitly supplied signature verifier.
pub fn parse_with_verifier(
    raw: &str,
    verifier: &LinkVerifier,
) -> Result<Option<DeepLink>, DeepLinkError> {
    // Cheap rejects first: the length guard runs before the URL parser or
    // the canonicalizer touch the input.
    if raw.len() > MAX_URL_LENGTH {
        return Ok(None);
    }

    let url = Url::parse(raw)?;

    if url.host_str() != Some(ALLOWED_HOST) {
        return Ok(None);
    }

    let Some(handler) = link_routes::lookup(url.path()) else {
        return Ok(None);
    };

    let verdict = verifier.verify(&url);

    let params = QueryParams::from_url(&url);
    let destination = match handler(&params) {
        Ok(destination) => destination,
        Err(err) => {
            tracing::debug!(url = %url, error = %err, "deep link rejected by route handler");
            return Ok(None);
        }
    };

    // A present-but-broken signature is never downgraded to "unsigned".
    if verdict == VerificationVerdict::Invalid {
        tracing::debug!(url = %url, "deep link rejected: invalid signature");
        return Ok(None);
    }

    Ok(Some(DeepLink {
        url,
        destination,
        signed: verdict == VerificationVerdict::Valid,
    }))
}
