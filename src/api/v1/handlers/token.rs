/*
 * Responsibility
 * - GET /token: report where the request's credential came from
 * - Peek at the JOSE header (unverified) for diagnostics
 *
 * Notes
 * - The raw token is never echoed back
 * - No signature / claims validation happens here
 */
use axum::Json;
use jsonwebtoken::Algorithm;
use serde::Serialize;

use crate::api::v1::extractors::Bearer;
use crate::token::TokenSource;

#[derive(Debug, Serialize)]
pub struct TokenInfo {
    pub source: TokenSource,
    pub length: usize,
    /// `None` when the token does not look like a JWS compact serialization.
    pub jwt: Option<JwtHeaderInfo>,
}

#[derive(Debug, Serialize)]
pub struct JwtHeaderInfo {
    pub alg: Algorithm,
    pub typ: Option<String>,
    pub kid: Option<String>,
}

pub async fn inspect_token(Bearer(token): Bearer) -> Json<TokenInfo> {
    let jwt = jsonwebtoken::decode_header(token.as_str())
        .ok()
        .map(|header| JwtHeaderInfo {
            alg: header.alg,
            typ: header.typ,
            kid: header.kid,
        });

    Json(TokenInfo {
        source: token.source(),
        length: token.as_str().len(),
        jwt,
    })
}
