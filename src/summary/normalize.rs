use std::collections::HashSet;

use super::types::{Block, Citation, RawCitation, SummaryResult};

/// Turn raw answer text and raw grounding sources into a `SummaryResult`.
///
/// Lines are trimmed. Blank lines are dropped, lines starting with `*` or `-`
/// become bullets (leading markers and whitespace stripped) and everything
/// else becomes a paragraph. Citations are deduplicated by exact `uri`,
/// keeping the first occurrence and its title.
pub fn normalize(raw_text: &str, raw_citations: &[RawCitation]) -> SummaryResult {
    SummaryResult {
        text: raw_text.to_string(),
        blocks: parse_blocks(raw_text),
        sources: dedup_citations(raw_citations),
    }
}

fn parse_blocks(text: &str) -> Vec<Block> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Block> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('*') || trimmed.starts_with('-') {
        let content =
            trimmed.trim_start_matches(|c: char| c == '*' || c == '-' || c.is_whitespace());
        Some(Block::Bullet(content.to_string()))
    } else {
        Some(Block::Paragraph(trimmed.to_string()))
    }
}

fn dedup_citations(raw: &[RawCitation]) -> Vec<Citation> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for c in raw {
        if !seen.insert(c.uri.as_str()) {
            continue;
        }
        let title = c
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(c.uri.as_str())
            .to_string();
        out.push(Citation {
            uri: c.uri.clone(),
            title,
        });
    }

    out
}
