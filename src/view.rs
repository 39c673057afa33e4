use crate::state::RequestStatus;
use crate::summary::{Block, Citation, SummaryResult};

const APP_TITLE: &str = "Research Summarizer";
const REPORT_TAG: &str = "Research Summary • February 2025";
const REPORT_TITLE: &str = "Harvard x Perplexity: The Future of Knowledge Work";
const REPORT_BLURB: &str = "Exploring how AI-native tools are reshaping productivity, \
    information synthesis, and decision-making within global enterprises.";
const FOOTER: &str = "Powered by Gemini & Google Search Grounding • Experimental Research Tool";

/// Badge labels longer than this are cut and suffixed with `...`.
pub const BADGE_LABEL_MAX: usize = 30;

/// Render the whole screen for `status` as markdown.
pub fn render(status: &RequestStatus) -> String {
    let mut out = String::new();
    render_header(&mut out, status);
    render_report_banner(&mut out);

    match status {
        RequestStatus::Idle => {}
        RequestStatus::Loading => render_skeleton(&mut out),
        RequestStatus::Error(message) => render_error(&mut out, message),
        RequestStatus::Success(result) => render_summary(&mut out, result),
    }

    out.push_str(&format!("\n---\n_{}_\n", FOOTER));
    out
}

fn render_header(out: &mut String, status: &RequestStatus) {
    let control = if status.is_loading() {
        "Refreshing…"
    } else {
        "[r] Refresh"
    };
    out.push_str(&format!("# {}    {}\n\n", APP_TITLE, control));
}

fn render_report_banner(out: &mut String) {
    out.push_str(&format!("`{}`\n\n", REPORT_TAG));
    out.push_str(&format!("## {}\n\n", REPORT_TITLE));
    out.push_str(&format!("{}\n\n", REPORT_BLURB));
}

fn render_skeleton(out: &mut String) {
    let groups: [&[usize]; 3] = [&[36, 48, 40], &[48, 48, 32], &[48, 48, 48]];
    for (i, widths) in groups.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for width in widths.iter() {
            out.push_str(&"░".repeat(*width));
            out.push('\n');
        }
    }
}

fn render_error(out: &mut String, message: &str) {
    out.push_str("> **Failed to generate summary**\n>\n");
    out.push_str(&format!("> {}\n>\n", message));
    out.push_str("> [r] Retry Request\n");
}

fn render_summary(out: &mut String, result: &SummaryResult) {
    for block in &result.blocks {
        match block {
            Block::Bullet(content) => out.push_str(&format!("• {}\n\n", content)),
            Block::Paragraph(content) => out.push_str(&format!("**{}**\n\n", content)),
        }
    }

    if result.sources.is_empty() {
        return;
    }

    out.push_str("---\n### Verified Sources\n\n");
    let badges: Vec<String> = result.sources.iter().map(source_badge).collect();
    out.push_str(&badges.join("  "));
    out.push('\n');
}

/// A single source as a markdown link.
pub fn source_badge(source: &Citation) -> String {
    format!("[{}]({})", badge_label(&source.title), source.uri)
}

pub fn badge_label(title: &str) -> String {
    if title.chars().count() > BADGE_LABEL_MAX {
        let cut: String = title.chars().take(BADGE_LABEL_MAX).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{normalize, RawCitation};

    fn raw(uri: &str, title: Option<&str>) -> RawCitation {
        RawCitation {
            uri: uri.to_string(),
            title: title.map(|t| t.to_string()),
        }
    }

    #[test]
    fn test_badge_label_truncation() {
        let exact = "a".repeat(30);
        assert_eq!(badge_label(&exact), exact);
        assert_eq!(badge_label("short"), "short");

        let long = "b".repeat(31);
        assert_eq!(badge_label(&long), format!("{}...", "b".repeat(30)));
    }

    #[test]
    fn test_badge_label_counts_chars() {
        let accented = "é".repeat(30);
        assert_eq!(badge_label(&accented), accented);
        let longer = "é".repeat(35);
        assert_eq!(badge_label(&longer), format!("{}...", "é".repeat(30)));
    }

    #[test]
    fn test_source_badge_links_uri() {
        let badge = source_badge(&Citation {
            uri: "https://www.hbs.edu/faculty/Pages/item.aspx?num=12345".to_string(),
            title: "Harvard Business School Working Paper".to_string(),
        });
        assert_eq!(
            badge,
            "[Harvard Business School Workin...](https://www.hbs.edu/faculty/Pages/item.aspx?num=12345)"
        );
    }

    #[test]
    fn test_render_idle_has_no_body() {
        let out = render(&RequestStatus::Idle);
        assert!(out.contains("# Research Summarizer    [r] Refresh"));
        assert!(out.contains(REPORT_TITLE));
        assert!(!out.contains('░'));
        assert!(!out.contains("Failed to generate summary"));
        assert!(out.contains(FOOTER));
    }

    #[test]
    fn test_render_loading() {
        let out = render(&RequestStatus::Loading);
        assert!(out.contains("Refreshing…"));
        assert!(!out.contains("[r] Refresh"));
        assert!(out.contains('░'));
    }

    #[test]
    fn test_render_loading_skeleton_layout() {
        let out = render(&RequestStatus::Loading);
        let bars: Vec<&str> = out.lines().filter(|l| l.starts_with('░')).collect();
        assert_eq!(bars.len(), 9);
        assert_eq!(bars[0].chars().count(), 36);
        assert_eq!(bars[5].chars().count(), 32);
    }

    #[test]
    fn test_render_error_panel() {
        let out = render(&RequestStatus::Error(
            "Failed to fetch summary from Gemini API.".to_string(),
        ));
        assert!(out.contains("**Failed to generate summary**"));
        assert!(out.contains("> Failed to fetch summary from Gemini API."));
        assert!(out.contains("[r] Retry Request"));
        assert!(!out.contains("Verified Sources"));
    }

    #[test]
    fn test_render_success_blocks_and_sources() {
        let result = normalize(
            "* Point one\n\nPoint two\n- Point three",
            &[
                raw("https://a.com", Some("A")),
                raw("https://a.com", Some("A-dup")),
                raw("https://b.com", None),
            ],
        );
        let out = render(&RequestStatus::Success(result));

        let one = out.find("• Point one").unwrap();
        let two = out.find("**Point two**").unwrap();
        let three = out.find("• Point three").unwrap();
        assert!(one < two && two < three);

        assert!(out.contains("### Verified Sources"));
        assert!(out.contains("[A](https://a.com)  [https://b.com](https://b.com)"));
        assert!(!out.contains("A-dup"));
    }

    #[test]
    fn test_render_empty_summary_without_sources() {
        let result = normalize("No summary available.", &[]);
        let out = render(&RequestStatus::Success(result));
        assert!(out.contains("**No summary available.**"));
        assert!(!out.contains("Verified Sources"));
        assert!(!out.contains("]("));
    }
}
