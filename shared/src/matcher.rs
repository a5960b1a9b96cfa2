//! Scores every sentence on one page against a pointer and keeps the
//! best few.

use crate::segmenter::sentence_spans;
use crate::similarity::score;

/// Top candidates kept per page when nothing else is configured.
pub const DEFAULT_MAX_SNIPPETS: usize = 2;

/// A scored sentence on one page. Transient: only the top candidates
/// survive ranking. `start` and `end` are character offsets of the raw
/// span in the page text; `snippet` is the trimmed sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub snippet: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

/// The top `max_snippets` candidates for `pointer` on one page, ranked
/// by descending score. The sort is stable, so ties keep scan order.
/// There is no score threshold: even a poorly matching page returns
/// its best sentences. An empty page yields no candidates.
pub fn find_snippets(page_text: &str, pointer: &str, max_snippets: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();
    for span in sentence_spans(page_text) {
        let sentence = span.sentence();
        if sentence.is_empty() {
            continue;
        }
        candidates.push(Candidate {
            snippet: sentence.to_string(),
            start: span.start,
            end: span.end,
            score: score(pointer, sentence),
        });
    }

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(max_snippets);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "This agreement covers services. Total contract value: \
$250,000 split across milestones. Payment is due within 30 days. \
Either party may terminate with notice.";

    #[test]
    fn never_more_than_max_snippets() {
        let got = find_snippets(PAGE, "payment", DEFAULT_MAX_SNIPPETS);
        assert_eq!(got.len(), 2);
        let got = find_snippets(PAGE, "payment", 3);
        assert_eq!(got.len(), 3);
    }

    #[test]
    fn best_sentence_ranks_first() {
        let got = find_snippets(PAGE, "total contract value", 2);
        assert_eq!(
            got[0].snippet,
            "Total contract value: $250,000 split across milestones."
        );
        assert!(got[0].score >= got[1].score);
    }

    #[test]
    fn offsets_point_back_into_the_page() {
        let chars: Vec<char> = PAGE.chars().collect();
        for c in find_snippets(PAGE, "terminate", 4) {
            let raw: String = chars[c.start..c.end].iter().collect();
            assert_eq!(raw.trim(), c.snippet);
        }
    }

    #[test]
    fn ties_keep_scan_order() {
        // an empty pointer scores every sentence 0.0
        let got = find_snippets("One fish. Two fish.", "", 2);
        assert_eq!(got[0].snippet, "One fish.");
        assert_eq!(got[1].snippet, "Two fish.");
        assert_eq!(got[0].score, 0.0);
        assert_eq!(got[1].score, 0.0);
    }

    #[test]
    fn empty_page_yields_nothing() {
        assert!(find_snippets("", "anything", 2).is_empty());
        assert!(find_snippets("   \n ", "anything", 2).is_empty());
    }
}
