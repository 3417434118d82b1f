//! Bearer credential extraction for an HTTP gateway.
//!
//! [`token::extract`] finds the request's token in `Authorization: Bearer`
//! or, when that header is absent, in the `access_token` query parameter.
//! The rest of the crate wires it into axum (extractors, middleware, a small
//! diagnostics server).

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod state;
pub mod token;
