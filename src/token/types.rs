use std::fmt;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use serde::Serialize;

use super::extractor::BEARER;

/// Where a token was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// `Authorization: Bearer <token>`
    Header,
    /// `?access_token=<token>`
    QueryParameter,
}

impl TokenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSource::Header => "header",
            TokenSource::QueryParameter => "query_parameter",
        }
    }
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque bearer credential. Never empty.
///
/// `Debug` is redacted so the value does not end up in logs by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// `Bearer <token>`, for forwarding the credential upstream.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&format!("{BEARER} {}", self.0))
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BearerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for BearerToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BearerToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A token together with the place it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedToken {
    token: BearerToken,
    source: TokenSource,
}

impl ExtractedToken {
    pub(crate) fn new(token: BearerToken, source: TokenSource) -> Self {
        Self { token, source }
    }

    pub fn source(&self) -> TokenSource {
        self.source
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    pub fn as_str(&self) -> &str {
        self.token.as_str()
    }

    pub fn into_token(self) -> BearerToken {
        self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{AuthorizationSchemeError, QueryParameters};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_sync() {
        assert_send_sync::<ExtractedToken>();
        assert_send_sync::<BearerToken>();
        assert_send_sync::<TokenSource>();
        assert_send_sync::<AuthorizationSchemeError>();
        assert_send_sync::<QueryParameters<'static>>();
    }

    #[test]
    fn debug_does_not_leak_the_token() {
        let token = BearerToken::new("secret-value");

        assert_eq!(format!("{token:?}"), "BearerToken(***)");
        assert!(!format!("{:?}", ExtractedToken::new(token, TokenSource::Header)).contains("secret"));
    }

    #[test]
    fn header_value_uses_bearer_scheme() {
        let token = BearerToken::new("dummy-token");

        assert_eq!(token.to_header_value().unwrap(), "Bearer dummy-token");
    }

    #[test]
    fn header_value_rejects_control_characters() {
        let token = BearerToken::new("line\nbreak");

        assert!(token.to_header_value().is_err());
    }

    #[test]
    fn source_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TokenSource::QueryParameter).unwrap(),
            "\"query_parameter\""
        );
        assert_eq!(TokenSource::Header.to_string(), "header");
    }
}
