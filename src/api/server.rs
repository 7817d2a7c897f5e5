//! Axum server setup and router construction.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handler;
use super::rate_limit::{self, RateLimiter};
use crate::features::SummarizationPipeline;
use crate::infrastructure::RecordStore;

/// Process-wide state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<SummarizationPipeline>,
    pub store: Arc<dyn RecordStore>,
    pub project_name: String,
    pub debug: bool,
    pub persist_failures: bool,
}

/// HTTP-layer settings that do not reach the handlers.
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    pub cors_allowed_origins: Vec<String>,
    pub rate_limit_per_minute: u32,
}

/// Build the full axum router.
///
/// The router serves:
/// - `POST /summarize`, rate limited per client IP, with no request body
///   size limit
/// - `GET /health`
pub fn build_router(state: AppState, options: &ServerOptions) -> Router {
    let limiter = Arc::new(RateLimiter::per_minute(options.rate_limit_per_minute));

    let summarize_routes = Router::new()
        .route("/summarize", post(handler::summarize))
        .layer(DefaultBodyLimit::disable())
        .route_layer(middleware::from_fn_with_state(limiter, rate_limit::enforce));

    Router::new()
        .merge(summarize_routes)
        .route("/health", get(handler::health))
        .with_state(state)
        .layer(cors_layer(&options.cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Only the listed origins may call the API, with credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Listening on {}", listener.local_addr()?);
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

/// Start the server in the background and return the bound address.
///
/// # Errors
///
/// Returns an error if `bind_addr` cannot be bound.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = serve(listener, router, std::future::pending()).await {
            warn!("Server stopped: {}", e);
        }
    });

    Ok(addr)
}
