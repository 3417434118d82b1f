/*
 * Responsibility
 * - Read-only view of an inbound request, as seen by the token extractor
 * - Header lookup relies on http::HeaderMap (case-insensitive multimap)
 * - Query parameters keep insertion order so "first value" is well defined
 */
use std::borrow::Cow;

use axum::http::{HeaderMap, Request, Uri, request::Parts};

/// What the extractor needs from a request: headers and query parameters.
pub trait InboundRequest {
    fn headers(&self) -> &HeaderMap;

    fn parameters(&self) -> QueryParameters<'_>;
}

/// Insertion-ordered multimap of query parameters.
///
/// Keys and values are percent-decoded with
/// `application/x-www-form-urlencoded` rules (`+` is a space).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParameters<'a> {
    pairs: Vec<(Cow<'a, str>, Cow<'a, str>)>,
}

impl<'a> QueryParameters<'a> {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(query: &'a str) -> Self {
        Self {
            pairs: url::form_urlencoded::parse(query.as_bytes()).collect(),
        }
    }

    pub fn from_uri(uri: &'a Uri) -> Self {
        uri.query().map(Self::parse).unwrap_or_default()
    }

    /// First value for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn get_all<'s>(&'s self, key: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.pairs
            .iter()
            .filter(move |(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k.as_ref() == key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a, K, V> FromIterator<(K, V)> for QueryParameters<'a>
where
    K: Into<Cow<'a, str>>,
    V: Into<Cow<'a, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Borrowed headers + URI, for callers that do not hold a whole request
/// (e.g. a websocket upgrade handler that already took the parts apart).
#[derive(Debug, Clone, Copy)]
pub struct RequestView<'a> {
    headers: &'a HeaderMap,
    uri: &'a Uri,
}

impl<'a> RequestView<'a> {
    pub fn new(headers: &'a HeaderMap, uri: &'a Uri) -> Self {
        Self { headers, uri }
    }
}

impl InboundRequest for RequestView<'_> {
    fn headers(&self) -> &HeaderMap {
        self.headers
    }

    fn parameters(&self) -> QueryParameters<'_> {
        QueryParameters::from_uri(self.uri)
    }
}

impl<B> InboundRequest for Request<B> {
    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }

    fn parameters(&self) -> QueryParameters<'_> {
        QueryParameters::from_uri(self.uri())
    }
}

impl InboundRequest for Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn parameters(&self) -> QueryParameters<'_> {
        QueryParameters::from_uri(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins_and_order_is_kept() {
        let params = QueryParameters::parse("a=1&access_token=first&b=2&access_token=second");

        assert_eq!(params.first("access_token"), Some("first"));
        assert_eq!(
            params.get_all("access_token").collect::<Vec<_>>(),
            vec!["first", "second"]
        );
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn values_are_percent_decoded() {
        let params = QueryParameters::parse("access_token=a%2Eb%2Bc&note=hello+world");

        assert_eq!(params.first("access_token"), Some("a.b+c"));
        assert_eq!(params.first("note"), Some("hello world"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        let params = QueryParameters::parse("Access_Token=x");

        assert!(!params.contains_key("access_token"));
        assert_eq!(params.first("access_token"), None);
    }

    #[test]
    fn uri_without_query_is_empty() {
        let uri: Uri = "/api/v1/token".parse().unwrap();

        assert!(QueryParameters::from_uri(&uri).is_empty());
    }

    #[test]
    fn collects_from_pairs() {
        let params: QueryParameters<'_> =
            [("access_token", "x"), ("access_token", "y")].into_iter().collect();

        assert_eq!(params.first("access_token"), Some("x"));
    }

    #[test]
    fn parts_and_request_expose_same_view() {
        let req = Request::builder()
            .uri("/t?access_token=abc")
            .header("x-test", "1")
            .body(())
            .unwrap();

        assert_eq!(InboundRequest::parameters(&req).first("access_token"), Some("abc"));

        let (parts, _) = req.into_parts();
        assert_eq!(parts.parameters().first("access_token"), Some("abc"));
        assert!(InboundRequest::headers(&parts).contains_key("X-Test"));
    }
}
