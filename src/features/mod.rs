pub mod summarize;
pub mod title;

pub use summarize::{MAX_TOKENS, PipelineOutput, SummarizationPipeline};
pub use title::derive_title;
