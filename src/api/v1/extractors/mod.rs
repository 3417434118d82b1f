/*
 * Responsibility
 * - v1 handler extractors (re-export)
 */
mod bearer;

pub use bearer::{Bearer, MaybeBearer};
