/*
 * Responsibility
 * - Locate the bearer credential of an inbound request (header first, then query)
 * - Keep HTTP framework glue out: only reads headers and query parameters
 *
 * Public API
 * - extract / BEARER / ACCESS_TOKEN
 * - InboundRequest / QueryParameters / RequestView
 * - ExtractedToken / BearerToken / TokenSource
 * - AuthorizationSchemeError
 */

mod error;
mod extractor;
mod request;
mod types;

pub use error::AuthorizationSchemeError;
pub use extractor::{ACCESS_TOKEN, BEARER, extract};
pub use request::{InboundRequest, QueryParameters, RequestView};
pub use types::{BearerToken, ExtractedToken, TokenSource};
