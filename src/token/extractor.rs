use axum::http::header::AUTHORIZATION;

use super::error::AuthorizationSchemeError;
use super::request::InboundRequest;
use super::types::{BearerToken, ExtractedToken, TokenSource};

/// Authorization scheme word. Case-sensitive.
pub const BEARER: &str = "Bearer";

/// Query parameter consulted when no `Authorization` header is sent.
pub const ACCESS_TOKEN: &str = "access_token";

/// Find the bearer credential of `request`.
///
/// The `Authorization` header wins over the `access_token` query parameter.
/// Once the header is present it must read `Bearer <token>`; anything else is
/// an [`AuthorizationSchemeError`] and the query parameter is not looked at.
///
/// `Ok(None)` means the request carries no credential at all. Whether that is
/// acceptable is up to the caller.
///
/// Only the single space after `Bearer` is stripped; the rest of the value is
/// returned as-is.
pub fn extract<R>(request: &R) -> Result<Option<ExtractedToken>, AuthorizationSchemeError>
where
    R: InboundRequest + ?Sized,
{
    if let Some(value) = request.headers().get(AUTHORIZATION) {
        // obs-text (non visible ASCII) cannot be a Bearer credential
        let value = value
            .to_str()
            .map_err(|_| AuthorizationSchemeError::unsupported(""))?;

        let token = parse_authorization(value)?;
        return Ok(Some(ExtractedToken::new(token, TokenSource::Header)));
    }

    let parameters = request.parameters();
    let token = parameters
        .first(ACCESS_TOKEN)
        .filter(|v| !v.is_empty())
        .map(|v| ExtractedToken::new(BearerToken::new(v), TokenSource::QueryParameter));

    Ok(token)
}

fn parse_authorization(value: &str) -> Result<BearerToken, AuthorizationSchemeError> {
    let Some(rest) = value.strip_prefix(BEARER) else {
        return Err(AuthorizationSchemeError::unsupported(scheme_word(value)));
    };

    if rest.is_empty() {
        return Err(AuthorizationSchemeError::MissingTokenValue);
    }

    // `Bearerfoo` is some other scheme word, not Bearer
    let Some(token) = rest.strip_prefix(' ') else {
        return Err(AuthorizationSchemeError::unsupported(scheme_word(value)));
    };

    if token.is_empty() {
        return Err(AuthorizationSchemeError::MissingTokenValue);
    }

    Ok(BearerToken::new(token))
}

fn scheme_word(value: &str) -> &str {
    value.split_once(' ').map_or(value, |(scheme, _)| scheme)
}
