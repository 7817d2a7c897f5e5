use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use precis::ai::{EstimatingTokenizer, HfTokenizer, HttpSummarizer, TokenCounter};
use precis::api::{AppState, ServerOptions, build_router, serve};
use precis::core::config::AppConfig;
use precis::features::SummarizationPipeline;
use precis::infrastructure::{RecordStore, SledRecordStore};
use tokio::net::TcpListener;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Config error")?;
    precis::setup_logging(config.debug);

    let summarizer = HttpSummarizer::new(
        config.summarizer_url.clone(),
        config.summarizer_api_token.clone(),
        config.summarizer_timeout,
    )?;

    let tokenizer: Arc<dyn TokenCounter> = match &config.tokenizer_path {
        Some(path) => Arc::new(HfTokenizer::from_file(path)?),
        None => {
            warn!("TOKENIZER_PATH not set, estimating token counts from character length");
            Arc::new(EstimatingTokenizer)
        }
    };

    let store = Arc::new(
        SledRecordStore::open(&config.database_uri, &config.database_name)
            .context("Failed to open record store")?,
    );

    let state = AppState {
        pipeline: Arc::new(SummarizationPipeline::new(Arc::new(summarizer), tokenizer)),
        store: store.clone(),
        project_name: config.project_name.clone(),
        debug: config.debug,
        persist_failures: config.persist_failures,
    };
    let options = ServerOptions {
        cors_allowed_origins: config.cors_allowed_origins.clone(),
        rate_limit_per_minute: config.rate_limit_per_minute,
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(base_url = %config.base_url, "{} starting", config.project_name);

    serve(listener, build_router(state, &options), shutdown_signal()).await?;

    info!("Shutting down, flushing record store");
    store.flush()?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
