pub mod normalize;
pub mod prompts;
pub mod types;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{error, info};

use crate::llm::GeminiClient;

pub use normalize::normalize;
pub use types::{Block, Citation, RawCitation, SummaryResult};

/// The only failure the rendering side ever sees. The underlying cause is logged, not carried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("Failed to fetch summary from Gemini API.")]
    FetchFailed,
}

/// Something that can produce a summary. The view controller only knows this seam.
#[async_trait]
pub trait SummaryService: Send + Sync {
    async fn fetch_summary(&self) -> Result<SummaryResult, SummaryError>;
}

pub struct SummaryClient {
    llm: Arc<GeminiClient>,
}

impl SummaryClient {
    pub fn new(llm: Arc<GeminiClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SummaryService for SummaryClient {
    async fn fetch_summary(&self) -> Result<SummaryResult, SummaryError> {
        info!(model = self.llm.model(), "Requesting grounded summary");

        let reply = match self.llm.generate_grounded(prompts::SUMMARY_PROMPT).await {
            Ok(reply) => reply,
            Err(e) => {
                error!("Gemini API error: {:#}", e);
                return Err(SummaryError::FetchFailed);
            }
        };

        let text = reply
            .text()
            .unwrap_or_else(|| prompts::NO_SUMMARY_TEXT.to_string());
        let result = normalize(&text, &reply.web_citations());

        info!(
            text_len = result.text.len(),
            blocks = result.blocks.len(),
            sources = result.sources.len(),
            "Summary received"
        );

        Ok(result)
    }
}
