//! Terminal rendering for the copilot display states.
//!
//! Pure payload-to-text functions. Category colors and relevance bands are
//! display policy only; they never feed back into ranking or ordering.

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};
use copilot_async::types::{AnswerResponse, Citation, CitationCategory};

/// Display color band for a relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelevanceBand {
    /// Relevance >= 0.8
    High,
    /// Relevance >= 0.6
    Medium,
    /// Everything below
    Low,
}

impl RelevanceBand {
    /// Picks the band for a score
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            Self::High
        } else if score >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    fn paint(self, text: String) -> ColoredString {
        match self {
            Self::High => text.green(),
            Self::Medium => text.yellow(),
            Self::Low => text.red(),
        }
    }
}

/// Capitalizes a label for display
fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn category_badge(category: &CitationCategory) -> ColoredString {
    let label = capitalize(category.as_str());
    match category {
        CitationCategory::Condition => label.red(),
        CitationCategory::Medication => label.blue(),
        CitationCategory::Observation => label.green(),
        CitationCategory::Procedure => label.magenta(),
        CitationCategory::Patient => label.yellow(),
        CitationCategory::Other(_) => label.normal(),
    }
}

fn citation_entry(citation: &Citation) -> String {
    let band = RelevanceBand::from_score(citation.relevance);
    let score = band.paint(format!("{:.2} ({})", citation.relevance, band.label()));

    let mut entry = format!(
        "  [{}] {}\n      {}  relevance {}",
        category_badge(&citation.category),
        citation.text,
        citation.source.dimmed(),
        score
    );

    if let Some(extra) = &citation.metadata {
        let mut details = Vec::new();
        if let Some(date) = &extra.date {
            details.push(format!("date {date}"));
        }
        if let Some(code) = &extra.code {
            details.push(format!("code {code}"));
        }
        if let Some(status) = &extra.status {
            details.push(format!("status {status}"));
        }
        if !details.is_empty() {
            let _ = write!(entry, "\n      {}", details.join("  ").dimmed());
        }
    }

    entry
}

/// Renders the populated state: answer, citations, metadata
///
/// The answer is emitted verbatim with its line breaks; the citation list
/// keeps the order received; empty sections are omitted entirely.
#[must_use]
pub fn populated(resp: &AnswerResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "AI Clinical Analysis".bold());
    let _ = writeln!(out, "{}", resp.answer);
    let _ = writeln!(out);
    let _ = writeln!(out, "Sources: {} documents", resp.context_used);

    if !resp.citations.is_empty() {
        let noun = if resp.citations.len() == 1 {
            "source"
        } else {
            "sources"
        };
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{} ({} {noun})",
            "Supporting Evidence".bold(),
            resp.citations.len()
        );
        for citation in &resp.citations {
            let _ = writeln!(out, "{}", citation_entry(citation));
        }
    }

    if let Some(meta) = &resp.response_metadata {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Analysis Details".bold());
        let _ = writeln!(out, "  Model: {}", meta.model);
        let _ = writeln!(out, "  Temperature: {}", meta.temperature);
        let _ = writeln!(out, "  Context documents: {}", resp.context_used);
        if !meta.context_sources.is_empty() {
            let badges: Vec<String> = meta.context_sources.iter().map(|s| capitalize(s)).collect();
            let _ = writeln!(out, "  Data sources: {}", badges.join(", "));
        }
    }

    out
}

/// Renders the empty state: request succeeded, nothing usable came back
#[must_use]
pub fn empty() -> String {
    format!(
        "{}\n{}",
        "No analysis available".bold(),
        "The AI couldn't generate a response. This might be due to insufficient data or connectivity issues."
    )
}

/// Renders the error state with the failure message verbatim
#[must_use]
pub fn error(message: &str) -> String {
    format!(
        "{}\n{message}\n{}",
        "Analysis Error".red().bold(),
        "Try again with a new query, or check that patient data has been uploaded.".dimmed()
    )
}
