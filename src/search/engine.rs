use super::keywords::{KeywordRule, LEGAL_KEYWORDS};
use super::summary::summarize;
use super::types::{RelevantDocument, SearchResponse};
use crate::documents::{Document, LEGAL_DOCUMENTS};
use std::collections::HashSet;

/// Score for a document signalled by at least one keyword in the query.
pub const KEYWORD_MATCH_SCORE: f64 = 0.9;
/// Score for a document returned only because nothing matched.
pub const FALLBACK_SCORE: f64 = 0.5;
/// Number of characters of trimmed content kept in an excerpt.
pub const EXCERPT_CHARS: usize = 200;
pub const EXCERPT_SUFFIX: &str = "...";

/// Matches queries against a document store using a keyword table.
///
/// Holds only `'static` references and is `Copy`.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    documents: &'static [Document],
    keywords: &'static [KeywordRule],
}

impl Matcher {
    pub const fn new(documents: &'static [Document], keywords: &'static [KeywordRule]) -> Self {
        Self {
            documents,
            keywords,
        }
    }

    pub fn documents(&self) -> &'static [Document] {
        self.documents
    }

    /// Runs a query and returns the ranked matches with a summary.
    ///
    /// Callers must reject empty or whitespace-only queries beforehand.
    pub fn search(&self, query: &str) -> SearchResponse {
        let query_lower = query.to_lowercase();

        let mut matched: HashSet<&str> = HashSet::new();
        for rule in self.keywords.iter().filter(|rule| rule.matches(&query_lower)) {
            matched.extend(rule.doc_ids.iter().copied());
        }

        let fallback = matched.is_empty();
        if fallback {
            tracing::debug!("No keyword matched {:?}, returning all documents", query);
        }

        let mut results: Vec<RelevantDocument> = self
            .documents
            .iter()
            .filter(|doc| fallback || matched.contains(doc.id))
            .map(|doc| RelevantDocument {
                doc_id: doc.id.to_string(),
                title: doc.title.to_string(),
                excerpt: excerpt(doc.content),
                relevance_score: self.score(doc, &query_lower),
            })
            .collect();

        // sort_by is stable: equal scores keep store order
        results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        let summary = summarize(query, &results);
        tracing::debug!("Query {:?} matched {} document(s)", query, results.len());

        SearchResponse {
            summary,
            relevant_docs: results,
        }
    }

    fn score(&self, doc: &Document, query_lower: &str) -> f64 {
        let keyword_hit = self
            .keywords
            .iter()
            .any(|rule| rule.targets(doc.id) && rule.matches(query_lower));

        if keyword_hit {
            KEYWORD_MATCH_SCORE
        } else {
            FALLBACK_SCORE
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(LEGAL_DOCUMENTS, LEGAL_KEYWORDS)
    }
}

/// First [`EXCERPT_CHARS`] characters of the trimmed content, always followed
/// by [`EXCERPT_SUFFIX`].
pub fn excerpt(content: &str) -> String {
    let mut excerpt: String = content.trim().chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str(EXCERPT_SUFFIX);
    excerpt
}
