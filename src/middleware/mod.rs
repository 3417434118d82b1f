/*
 * Responsibility
 * - middleware public interface
 * - auth::access (bearer extraction), http (cross-cutting transport layers)
 */
pub mod auth;
pub mod http;
