//! HTTP API: routing, handlers and request admission

pub mod handler;
pub mod helpers;
pub mod rate_limit;
pub mod server;

pub use server::{AppState, ServerOptions, build_router, serve, start_server};
