use url::Url;

use crate::error::RouteError;

/// Decoded query parameters of a deep-link URL.
///
/// Values are percent-decoded. Repeated names keep document order and the
/// first occurrence wins for lookups, matching standard query-string
/// semantics.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Collects the query parameters of `url`.
    pub fn from_url(url: &Url) -> Self {
        Self {
            pairs: url
                .query_pairs()
                .map(|(name, value)| (name.into_owned(), value.into_owned()))
                .collect(),
        }
    }

    /// Builds parameters from owned pairs. Mostly useful in tests.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Returns the first value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the first value for `name` or a `MissingParam` error.
    pub fn require(&self, name: &str) -> Result<&str, RouteError> {
        self.get(name)
            .ok_or_else(|| RouteError::MissingParam(name.to_string()))
    }

    /// Parses an optional unsigned integer parameter (e.g. an EVM chain id).
    pub fn get_u64(&self, name: &str) -> Result<Option<u64>, RouteError> {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| RouteError::InvalidParam {
                    name: name.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Parses an optional decimal amount.
    ///
    /// The value must be a finite decimal greater than zero; it is returned
    /// as the original string so no precision is lost downstream.
    pub fn get_amount(&self, name: &str) -> Result<Option<String>, RouteError> {
        let Some(raw) = self.get(name) else {
            return Ok(None);
        };

        let value: f64 = raw.parse().map_err(|_| RouteError::InvalidParam {
            name: name.to_string(),
            reason: format!("not a decimal number: {raw}"),
        })?;

        if !value.is_finite() || value <= 0.0 {
            return Err(RouteError::InvalidParam {
                name: name.to_string(),
                reason: format!("amount must be positive: {raw}"),
            });
        }

        Ok(Some(raw.to_string()))
    }
}
