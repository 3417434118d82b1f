use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::token::{self, ExtractedToken};

/// Optional bearer credential.
///
/// A malformed `Authorization` header is still rejected (400); only a
/// request without any credential yields `MaybeBearer(None)`.
pub struct MaybeBearer(pub Option<ExtractedToken>);

/// Required bearer credential. No credential → 401 with a `Bearer` challenge.
pub struct Bearer(pub ExtractedToken);

// The access middleware may already have run the extraction
fn resolve(parts: &Parts) -> Result<Option<ExtractedToken>, AppError> {
    if let Some(token) = parts.extensions.get::<ExtractedToken>() {
        return Ok(Some(token.clone()));
    }

    Ok(token::extract(parts)?)
}

impl<S> FromRequestParts<S> for MaybeBearer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts).map(MaybeBearer)
    }
}

impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        resolve(parts)?.map(Bearer).ok_or(AppError::Unauthorized)
    }
}
