use serde::{Deserialize, Serialize};

/// Body of a `POST /generate` request.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// A single ranked match, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevantDocument {
    pub doc_id: String,
    pub title: String,
    pub excerpt: String,
    pub relevance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub summary: String,
    pub relevant_docs: Vec<RelevantDocument>,
}
