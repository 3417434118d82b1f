/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone is expected to be cheap
 */
use crate::config::Config;

#[derive(Clone, Debug)]
pub struct AppState {
    pub token_required: bool,
}

impl AppState {
    pub fn new(token_required: bool) -> Self {
        Self { token_required }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.token_required)
    }
}
