use thiserror::Error;

/// Longest scheme word kept on an [`AuthorizationSchemeError::UnsupportedScheme`].
const MAX_SCHEME_LEN: usize = 32;

/// The `Authorization` header was present but not a usable `Bearer` credential.
///
/// Absence of a credential is never reported through this type; see
/// [`crate::token::extract`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationSchemeError {
    /// The header does not start with the `Bearer` scheme word.
    /// `scheme` is the leading word that was sent instead (empty when the
    /// value was not visible ASCII).
    #[error("unsupported authorization scheme")]
    UnsupportedScheme { scheme: String },

    /// `Bearer` with nothing after it.
    #[error("missing token value")]
    MissingTokenValue,
}

impl AuthorizationSchemeError {
    pub(crate) fn unsupported(scheme: &str) -> Self {
        Self::UnsupportedScheme {
            scheme: scheme.chars().take(MAX_SCHEME_LEN).collect(),
        }
    }

    /// Stable machine-readable code, safe to log and to return to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnsupportedScheme { .. } => "UNSUPPORTED_AUTHORIZATION_SCHEME",
            Self::MissingTokenValue => "MISSING_TOKEN_VALUE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_scheme_is_truncated() {
        let long = "X".repeat(100);
        match AuthorizationSchemeError::unsupported(&long) {
            AuthorizationSchemeError::UnsupportedScheme { scheme } => {
                assert_eq!(scheme.len(), MAX_SCHEME_LEN)
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn messages_and_codes() {
        let unsupported = AuthorizationSchemeError::unsupported("Basic");
        assert_eq!(unsupported.to_string(), "unsupported authorization scheme");
        assert_eq!(unsupported.code(), "UNSUPPORTED_AUTHORIZATION_SCHEME");

        let missing = AuthorizationSchemeError::MissingTokenValue;
        assert_eq!(missing.to_string(), "missing token value");
        assert_eq!(missing.code(), "MISSING_TOKEN_VALUE");
    }
}
