/// precis - an HTTP service that summarizes text with a hosted language model.
///
/// Short inputs are summarized in one call. Inputs over the model's token limit
/// are split into overlapping word windows, each window is summarized, and the
/// partial summaries are summarized once more. Every successful summary is
/// stored with a derived title.
///
/// # Architecture
///
/// The system uses:
/// - axum and tower-http for the HTTP surface (routing, CORS, tracing)
/// - reqwest for the hosted summarization model
/// - the `tokenizers` crate for token counting
/// - sled as the document store for summary records
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use precis::ai::{EstimatingTokenizer, HttpSummarizer};
/// use precis::core::config::AppConfig;
/// use precis::core::models::{LengthPreset, Mode};
/// use precis::features::SummarizationPipeline;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     precis::setup_logging(false);
///
///     let config = AppConfig::from_env()?;
///     let summarizer = HttpSummarizer::new(
///         config.summarizer_url.clone(),
///         config.summarizer_api_token.clone(),
///         config.summarizer_timeout,
///     )?;
///     let pipeline = SummarizationPipeline::new(Arc::new(summarizer), Arc::new(EstimatingTokenizer));
///
///     let output = pipeline
///         .run("Some long article ...", LengthPreset::Short.bounds(), Mode::Reliable)
///         .await?;
///     println!("{}", precis::features::derive_title(&output.summary));
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;
pub mod infrastructure;
pub mod utils;

pub use errors::SummarizeError;

/// Configure structured logging with JSON format.
///
/// `debug` lowers the max level from `INFO` to `DEBUG`. Calling this more than
/// once keeps the first subscriber.
///
/// # Example
///
/// ```
/// precis::setup_logging(false);
/// ```
pub fn setup_logging(debug: bool) {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::prelude::*;

    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_target(true)
        .with_filter(level);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
