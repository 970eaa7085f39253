use std::sync::Arc;

use crate::config::Config;
use crate::routes::rate_limit::RateLimiter;

/// Shared application state injected into route handlers and middleware.
/// The profile engine itself is stateless; only transport concerns live here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rate_limiter = Arc::new(RateLimiter::from_config(&config));
        Self {
            config,
            rate_limiter,
        }
    }
}
