/// A grounding source as the service reported it, before deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCitation {
    pub uri: String,
    pub title: Option<String>,
}

/// A deduplicated source shown as a badge under the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    /// Unique within one `SummaryResult`.
    pub uri: String,
    /// Display label. Equals `uri` when the service sent no title.
    pub title: String,
}

/// One renderable unit of the summary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Bullet(String),
    Paragraph(String),
}

/// The outcome of one successful fetch. Built by `normalize` and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    /// Raw answer text as returned by the service.
    pub text: String,
    pub blocks: Vec<Block>,
    pub sources: Vec<Citation>,
}
