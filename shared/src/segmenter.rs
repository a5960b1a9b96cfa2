//! Splits raw page text into sentence spans so the matcher can score
//! individual sentences against a pointer. Implemented as an explicit
//! character scan instead of a regex so span boundaries stay identical
//! everywhere and no extra dependency is needed.

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// One raw sentence span. `start` and `end` are 0-based character
/// indices into the page text; `end` is exclusive and covers the
/// optional trailing terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceSpan {
    pub raw: String,
    pub start: usize,
    pub end: usize,
}

impl SentenceSpan {
    /// The span with surrounding whitespace removed; this is what gets
    /// scored and reported.
    pub fn sentence(&self) -> &str {
        self.raw.trim()
    }
}

/// Lazy iterator over the sentence spans of one page. Restartable by
/// calling [`sentence_spans`] again on the same text.
pub struct SentenceSpans<'a> {
    chars: std::str::Chars<'a>,
    pos: usize,
}

pub fn sentence_spans(text: &str) -> SentenceSpans<'_> {
    SentenceSpans {
        chars: text.chars(),
        pos: 0,
    }
}

impl Iterator for SentenceSpans<'_> {
    type Item = SentenceSpan;

    /// A span is a maximal run of non-terminator characters plus at
    /// most one terminator. A terminator with no preceding run starts
    /// no span, and a trailing run that trims to nothing is dropped.
    fn next(&mut self) -> Option<SentenceSpan> {
        let mut raw = String::new();
        let mut start = self.pos;
        while let Some(c) = self.chars.next() {
            self.pos += 1;
            if TERMINATORS.contains(&c) {
                if raw.is_empty() {
                    start = self.pos;
                    continue;
                }
                raw.push(c);
                return Some(SentenceSpan {
                    raw,
                    start,
                    end: self.pos,
                });
            }
            raw.push(c);
        }
        if raw.trim().is_empty() {
            return None;
        }
        Some(SentenceSpan {
            raw,
            start,
            end: self.pos,
        })
    }
}
