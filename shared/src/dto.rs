use serde::{Deserialize, Serialize};

/// Text of one physical page, numbered from 1 in document order.
/// Pages whose text could not be extracted carry an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub page: u32,
    pub text: String,
}

/// One reported snippet. `page`, `start`, and `end` are `None` only
/// for the synthetic "no matching text" entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchEntry {
    pub snippet: String,
    pub page: Option<u32>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub rationale: String,
}

/// All matches for one pointer; never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointerReport {
    pub pointer: String,
    pub matches: Vec<MatchEntry>,
}

/// Final report for one analyzed document: one `PointerReport` per
/// input pointer, in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentReport {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub pointers: Vec<PointerReport>,
}
