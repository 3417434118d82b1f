/*
 * Responsibility
 * - v1 URL layout
 * - Decide which routes sit behind the access middleware
 */
use axum::{Router, routing::get};

use crate::middleware;
use crate::state::AppState;

use crate::api::v1::handlers::{health::health, token::inspect_token};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new().route("/token", get(inspect_token));
    let protected = middleware::auth::access::apply(protected, state);

    Router::new().route("/health", get(health)).merge(protected)
}
