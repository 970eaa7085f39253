//! Fixed-window, per-client request limiter for the `/api` routes.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

/// Minimum map size before expired windows are swept on insert.
const PRUNE_THRESHOLD: usize = 1024;

#[derive(Debug, Clone, Copy)]
struct ClientWindow {
    started: Instant,
    count: u32,
}

#[derive(Debug)]
struct ClientTable {
    windows: HashMap<String, ClientWindow>,
    /// Size at which the next sweep runs. Doubles past the live set after
    /// each sweep so a table full of live windows isn't rescanned per insert.
    sweep_at: usize,
}

impl ClientTable {
    fn sweep(&mut self, now: Instant, window: Duration) {
        self.windows
            .retain(|_, w| now.duration_since(w.started) < window);
        self.sweep_at = PRUNE_THRESHOLD.max(self.windows.len() * 2);
    }
}

#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    clients: Mutex<ClientTable>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            clients: Mutex::new(ClientTable {
                windows: HashMap::new(),
                sweep_at: PRUNE_THRESHOLD,
            }),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.rate_limit_max_requests,
            Duration::from_secs(config.rate_limit_window_secs),
        )
    }

    /// Records one request for `client`. Returns false once the client has
    /// used up its allowance for the current window.
    pub fn check(&self, client: &str) -> bool {
        self.check_at(client, Instant::now())
    }

    fn check_at(&self, client: &str, now: Instant) -> bool {
        let mut clients = self
            .clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if !clients.windows.contains_key(client) && clients.windows.len() >= clients.sweep_at {
            clients.sweep(now, self.window);
        }

        let entry = clients.windows.entry(client.to_string()).or_insert(ClientWindow {
            started: now,
            count: 0,
        });

        if now.duration_since(entry.started) >= self.window {
            *entry = ClientWindow {
                started: now,
                count: 0,
            };
        }

        if entry.count >= self.max_requests {
            return false;
        }
        entry.count += 1;
        true
    }

    #[cfg(test)]
    fn tracked_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .windows
            .len()
    }

    #[cfg(test)]
    fn sweep_at(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .sweep_at
    }
}

/// Axum middleware. Keys clients by peer IP; requests without connection
/// info (in-process tests) share the `unknown` bucket.
pub async fn rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    if !state.rate_limiter.check(&client) {
        warn!(client = %client, "Rate limit exceeded");
        return Err(AppError::RateLimited);
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit_then_blocks() {
        let limiter = RateLimiter::new(3, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check_at("a", now));
        assert!(limiter.check_at("a", now));
        assert!(limiter.check_at("a", now));
        assert!(!limiter.check_at("a", now));
    }

    #[test]
    fn test_clients_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check_at("a", now));
        assert!(!limiter.check_at("a", now));
        assert!(limiter.check_at("b", now));
    }

    #[test]
    fn test_window_rolls_over() {
        let limiter = RateLimiter::new(1, Duration::from_secs(60));
        let now = Instant::now();
        assert!(limiter.check_at("a", now));
        assert!(!limiter.check_at("a", now + Duration::from_secs(59)));
        assert!(limiter.check_at("a", now + Duration::from_secs(60)));
    }

    #[test]
    fn test_expired_windows_are_pruned() {
        let limiter = RateLimiter::new(5, Duration::from_secs(1));
        let start = Instant::now();
        for i in 0..PRUNE_THRESHOLD {
            limiter.check_at(&format!("client-{i}"), start);
        }
        assert_eq!(limiter.tracked_clients(), PRUNE_THRESHOLD);

        limiter.check_at("late", start + Duration::from_secs(2));
        assert_eq!(limiter.tracked_clients(), 1);
    }

    #[test]
    fn test_live_table_is_not_rescanned_on_every_new_client() {
        let limiter = RateLimiter::new(5, Duration::from_secs(60));
        let start = Instant::now();
        for i in 0..PRUNE_THRESHOLD {
            limiter.check_at(&format!("client-{i}"), start);
        }

        // Sweep frees nothing, so the next sweep is pushed out.
        limiter.check_at("overflow-0", start);
        assert_eq!(limiter.tracked_clients(), PRUNE_THRESHOLD + 1);
        assert_eq!(limiter.sweep_at(), PRUNE_THRESHOLD * 2);

        for i in 1..PRUNE_THRESHOLD {
            limiter.check_at(&format!("overflow-{i}"), start);
        }
        assert_eq!(limiter.sweep_at(), PRUNE_THRESHOLD * 2);
        assert_eq!(limiter.tracked_clients(), PRUNE_THRESHOLD * 2);

        // Once windows expire, the raised threshold still triggers a sweep.
        limiter.check_at("late", start + Duration::from_secs(61));
        assert_eq!(limiter.tracked_clients(), 1);
        assert_eq!(limiter.sweep_at(), PRUNE_THRESHOLD);
    }
}
