use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::summary::RawCitation;

/// Reply to `models/{model}:generateContent`. Every level is optional; the
/// service omits fields freely (no candidates on a blocked prompt, no
/// grounding when search was skipped, no title on some web chunks).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate, or `None` if there is no text at all.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Web sources the first candidate was grounded on, in reply order.
    /// Chunks with no `web` object or no usable `uri` are skipped.
    pub fn web_citations(&self) -> Vec<RawCitation> {
        let Some(metadata) = self
            .candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
        else {
            return Vec::new();
        };

        metadata
            .grounding_chunks
            .iter()
            .filter_map(|chunk| match &chunk.web {
                Some(WebChunk {
                    uri: Some(uri),
                    title,
                }) if !uri.is_empty() => Some(RawCitation {
                    uri: uri.clone(),
                    title: title.clone(),
                }),
                _ => None,
            })
            .collect()
    }
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Resolve the generateContent endpoint. The key travels in a header, never in the URL.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ],
            "tools": [
                { "googleSearch": {} }
            ],
        })
    }

    /// Single non-streaming generation with Google Search grounding enabled.
    pub async fn generate_grounded(&self, prompt: &str) -> Result<GenerateContentResponse> {
        debug!(model = %self.model, prompt_len = prompt.len(), "Sending grounded generateContent request");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.as_str())
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Gemini request failed")?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to read Gemini response")?;

        if !status.is_success() {
            bail!("HTTP {} from Gemini API: {}", status, text);
        }

        let reply: GenerateContentResponse =
            serde_json::from_str(&text).context("Failed to parse Gemini JSON")?;

        debug!(
            candidates = reply.candidates.len(),
            body_len = text.len(),
            "Gemini response received"
        );

        Ok(reply)
    }
}
