//! bearer credential extraction → ExtractedToken into request extensions
//!
//! - `Authorization: Bearer <token>` first, `?access_token=<token>` second
//! - a malformed `Authorization` header is 400, never a silent fallback
//! - no credential at all is 401 when `AppState::token_required`, otherwise the
//!   request continues anonymously
//!
//! Token *validation* (signature, exp, claims) is left to the upstream policy.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::token;

/// Put the access middleware in front of every route of `router`.
///
/// ```ignore
/// let protected = Router::new().route("/token", get(inspect_token));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: unmatched paths keep returning 404 instead of 401
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let extracted = match token::extract(&req) {
        Ok(extracted) => extracted,
        Err(err) => {
            tracing::warn!(code = err.code(), "rejected authorization header");
            return Err(err.into());
        }
    };

    match extracted {
        Some(token) => {
            tracing::debug!(source = %token.source(), "bearer token extracted");
            // picked up by the Bearer / MaybeBearer extractors
            req.extensions_mut().insert(token);
        }
        None if state.token_required => {
            tracing::debug!("no bearer token on protected route");
            return Err(AppError::Unauthorized);
        }
        None => {
            tracing::debug!("no bearer token, continuing anonymously");
        }
    }

    Ok(next.run(req).await)
}
