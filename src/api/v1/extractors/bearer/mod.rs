/*!
 * Bearer credential extractors
 *
 * Responsibility:
 * - Hand the request's bearer token (if any) to handlers
 * - Token lookup rules live in crate::token; this module only adapts them to axum
 *
 * Public API:
 * - MaybeBearer (absence is fine)
 * - Bearer (absence is 401)
 */

mod core;

pub use self::core::{Bearer, MaybeBearer};
