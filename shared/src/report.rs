//! Builds the per-pointer reports across a document's pages and
//! assembles the final document report.

use tracing::debug;

use crate::dto::{DocumentReport, MatchEntry, Page, PointerReport};
use crate::matcher::find_snippets;

const NO_MATCH_RATIONALE: &str = "No matching text found for the pointer.";

/// All matches for one pointer across the whole document, grouped by
/// ascending page number; within a page the matcher's score order is
/// kept. There is deliberately no cross-page score sort: group by
/// page first, rank within page. When not a single candidate exists
/// anywhere (e.g. every page is empty) a single synthetic entry with
/// `page = None` takes its place, so the report is never empty.
pub fn build_pointer_report(pointer: &str, pages: &[Page], max_snippets: usize) -> PointerReport {
    let mut matches: Vec<MatchEntry> = Vec::new();
    for page in pages {
        for candidate in find_snippets(&page.text, pointer, max_snippets) {
            matches.push(MatchEntry {
                snippet: candidate.snippet,
                page: Some(page.page),
                start: Some(candidate.start),
                end: Some(candidate.end),
                rationale: format!(
                    "Sentence matched pointer '{}' with similarity {:.2}.",
                    pointer, candidate.score
                ),
            });
        }
    }

    if matches.is_empty() {
        debug!(pointer, "no candidate sentences on any page");
        return PointerReport {
            pointer: pointer.to_string(),
            matches: vec![MatchEntry {
                snippet: String::new(),
                page: None,
                start: None,
                end: None,
                rationale: NO_MATCH_RATIONALE.to_string(),
            }],
        };
    }

    matches.sort_by_key(|m| m.page.unwrap_or(u32::MAX));
    PointerReport {
        pointer: pointer.to_string(),
        matches,
    }
}

/// One [`PointerReport`] per input pointer, in input order. Total over
/// well-formed input: a document with zero pages simply produces the
/// fallback entry for every pointer.
pub fn analyze_document(
    file_name: &str,
    pages: &[Page],
    pointers: &[String],
    max_snippets: usize,
) -> DocumentReport {
    DocumentReport {
        file_name: file_name.to_string(),
        pointers: pointers
            .iter()
            .map(|pointer| build_pointer_report(pointer, pages, max_snippets))
            .collect(),
    }
}
