//! Per-client admission limit for the summarize endpoint.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use super::helpers;

const WINDOW: Duration = Duration::from_secs(60);

/// Fixed one-minute window counter keyed by client IP.
#[derive(Debug)]
pub struct RateLimiter {
    limit: u32,
    hits: Mutex<HashMap<IpAddr, (Instant, u32)>>,
}

impl RateLimiter {
    #[must_use]
    pub fn per_minute(limit: u32) -> Self {
        Self {
            limit,
            hits: Mutex::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Records a request from `client` at `now` and reports whether it is
    /// within the limit.
    pub fn check_at(&self, client: IpAddr, now: Instant) -> bool {
        let mut hits = match self.hits.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        hits.retain(|_, (started, _)| now.duration_since(*started) < WINDOW);

        let entry = hits.entry(client).or_insert((now, 0));
        if entry.1 >= self.limit {
            return false;
        }
        entry.1 += 1;
        true
    }
}

/// Middleware rejecting clients that exceeded their allowance with a 429.
pub async fn enforce(
    State(limiter): State<Arc<RateLimiter>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    if limiter.check_at(addr.ip(), Instant::now()) {
        return next.run(request).await;
    }

    warn!(client = %addr.ip(), "Rate limit exceeded");
    helpers::err_response(
        StatusCode::TOO_MANY_REQUESTS,
        &format!("Rate limit exceeded: {} per 1 minute", limiter.limit()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_allows_up_to_limit_within_window() {
        let limiter = RateLimiter::per_minute(3);
        let client = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let now = Instant::now();

        assert!(limiter.check_at(client, now));
        assert!(limiter.check_at(client, now));
        assert!(limiter.check_at(client, now));
        assert!(!limiter.check_at(client, now + Duration::from_secs(30)));
    }

    #[test]
    fn test_window_resets_after_a_minute() {
        let limiter = RateLimiter::per_minute(1);
        let client = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));
        let now = Instant::now();

        assert!(limiter.check_at(client, now));
        assert!(!limiter.check_at(client, now + Duration::from_secs(59)));
        assert!(limiter.check_at(client, now + Duration::from_secs(61)));
    }

    #[test]
    fn test_clients_are_counted_separately() {
        let limiter = RateLimiter::per_minute(1);
        let now = Instant::now();

        assert!(limiter.check_at(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), now));
        assert!(limiter.check_at(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2)), now));
        assert!(!limiter.check_at(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), now));
    }
}
