use thiserror::Error;

/// Deep-link parsing errors.
///
/// Benign rejections (unknown host or path, broken signature, malformed
/// parameters) resolve to `Ok(None)` from the parser so a malicious link can
/// never crash the host application. Only conditions the caller's error
/// boundary must handle surface here.
#[derive(Debug, Error)]
pub enum DeepLinkError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_wraps_url_error() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = DeepLinkError::Url(parse_err);
        assert!(err.to_string().starts_with("invalid url: "));
    }

    #[test]
    fn from_url_parse_error() {
        let parse_err = url::Url::parse("::::").unwrap_err();
        let err: DeepLinkError = parse_err.into();
        assert!(matches!(err, DeepLinkError::Url(_)));
    }

    #[test]
    fn error_trait_is_implemented() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Box<dyn std::error::Error> = Box::new(DeepLinkError::Url(parse_err));
        assert!(err.to_string().contains("invalid url"));
    }
}
