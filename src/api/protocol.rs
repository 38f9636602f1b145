//! API Endpoints and Introspection DTOs
//!
//! Route paths, plus the payloads served by the health check and the `/docs`
//! introspection endpoint.

use crate::documents::Document;
use serde::Serialize;
use serde_json::Value;

// --- API Endpoints ---

/// Health check.
pub const ENDPOINT_HEALTH: &str = "/";
/// Document listing and endpoint overview.
pub const ENDPOINT_DOCS: &str = "/docs";
/// Search and summarize.
pub const ENDPOINT_GENERATE: &str = "/generate";

pub const API_NAME: &str = "Legal Document Search API";
pub const API_DESCRIPTION: &str = "API for searching and summarizing legal documents. \
Contains 3 hardcoded legal documents covering Contract Law, Employment Law, and Intellectual Property Rights.";

// --- Data Transfer Objects ---

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: String,
}

/// Metadata for one stored document. The content itself is not exposed.
#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub content_length: usize,
}

impl From<&Document> for DocumentInfo {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            content_length: doc.content_length(),
        }
    }
}

/// Description of a single route for the `/docs` listing.
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub method: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct DocsResponse {
    pub api_name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub total_documents: usize,
    pub documents: Vec<DocumentInfo>,
    pub endpoints: Vec<EndpointInfo>,
}
