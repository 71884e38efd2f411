use std::borrow::Cow;

use url::form_urlencoded;
use url::Url;

/// Name of the query parameter carrying the detachable signature.
pub const SIG_PARAM: &str = "sig";

/// Builds the canonical string a deep-link signature is computed over.
///
/// Every `sig` parameter is dropped, the remaining query parameters are
/// sorted lexicographically by name (stable, so repeated names keep their
/// document order), and the URL is reassembled as
/// `origin + path + '?' + query`. The `?` is omitted entirely when no
/// parameters remain.
///
/// Two URLs that differ only in the `sig` value or in query-parameter
/// ordering produce identical canonical forms.
pub fn canonicalize(url: &Url) -> String {
    let mut params: Vec<(Cow<'_, str>, Cow<'_, str>)> = url
        .query_pairs()
        .filter(|(name, _)| name != SIG_PARAM)
        .collect();
    params.sort_by(|a, b| a.0.cmp(&b.0));

    let origin = url.origin().ascii_serialization();
    let path = url.path();

    if params.is_empty() {
        return format!("{origin}{path}");
    }

    // Decode/re-encode through form_urlencoded so both the signing and the
    // verifying side agree on percent-encoding.
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in &params {
        serializer.append_pair(name, value);
    }
    let query = serializer.finish();

    format!("{origin}{path}?{query}")
}
