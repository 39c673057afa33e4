pub const SUMMARY_PROMPT: &str = r#"Summarize in clear, professional bullet points the main findings and insights from the collaborative research paper or report published by Harvard (Harvard Business School/Digital Data Design Institute) and Perplexity regarding the future of knowledge work and AI implementation in enterprises.

Focus on:
1. The core objective of the collaboration.
2. Key productivity metrics or findings.
3. Strategic recommendations for businesses.
4. The impact on traditional search and information retrieval."#;

/// Shown in place of the summary when the service answers with no text.
pub const NO_SUMMARY_TEXT: &str = "No summary available.";
