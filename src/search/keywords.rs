//! Keyword Index
//!
//! A fixed lookup table from lowercase keywords/phrases to the documents they
//! signal. Entries are matched by substring containment against the lowercased
//! query, so `"ip"` also fires for words such as "relationship".

/// One entry of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Lowercase keyword or phrase.
    pub keyword: &'static str,
    /// Ids of the documents this keyword points at.
    pub doc_ids: &'static [&'static str],
}

impl KeywordRule {
    /// Returns true if the keyword occurs anywhere in the (already lowercased) query.
    pub fn matches(&self, query_lower: &str) -> bool {
        query_lower.contains(self.keyword)
    }

    /// Returns true if this keyword points at `doc_id`.
    pub fn targets(&self, doc_id: &str) -> bool {
        self.doc_ids.iter().any(|id| *id == doc_id)
    }
}

/// Keyword table for the legal document store.
///
/// Every id referenced here must exist in [`crate::documents::LEGAL_DOCUMENTS`].
pub static LEGAL_KEYWORDS: &[KeywordRule] = &[
    KeywordRule {
        keyword: "contract",
        doc_ids: &["doc_001"],
    },
    KeywordRule {
        keyword: "employment",
        doc_ids: &["doc_002"],
    },
    KeywordRule {
        keyword: "patent",
        doc_ids: &["doc_003"],
    },
    KeywordRule {
        keyword: "trademark",
        doc_ids: &["doc_003"],
    },
    KeywordRule {
        keyword: "copyright",
        doc_ids: &["doc_003"],
    },
    KeywordRule {
        keyword: "wage",
        doc_ids: &["doc_002"],
    },
    KeywordRule {
        keyword: "discrimination",
        doc_ids: &["doc_002"],
    },
    KeywordRule {
        keyword: "agreement",
        doc_ids: &["doc_001"],
    },
    KeywordRule {
        keyword: "intellectual property",
        doc_ids: &["doc_003"],
    },
    KeywordRule {
        keyword: "ip",
        doc_ids: &["doc_003"],
    },
];
