use super::protocol::{
    API_DESCRIPTION, API_NAME, DocsResponse, DocumentInfo, ENDPOINT_DOCS, ENDPOINT_GENERATE,
    ENDPOINT_HEALTH, EndpointInfo, HealthResponse,
};
use crate::search::engine::Matcher;
use axum::{Extension, Json};
use serde_json::json;

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: format!("{} is running", API_NAME),
    })
}

pub async fn handle_docs(Extension(matcher): Extension<Matcher>) -> Json<DocsResponse> {
    let documents: Vec<DocumentInfo> = matcher
        .documents()
        .iter()
        .map(DocumentInfo::from)
        .collect();

    Json(DocsResponse {
        api_name: API_NAME,
        version: env!("CARGO_PKG_VERSION"),
        description: API_DESCRIPTION,
        total_documents: documents.len(),
        documents,
        endpoints: endpoint_listing(),
    })
}

fn endpoint_listing() -> Vec<EndpointInfo> {
    vec![
        EndpointInfo {
            path: ENDPOINT_HEALTH,
            method: "GET",
            description: "Health check endpoint",
            request_body: None,
            response: None,
        },
        EndpointInfo {
            path: ENDPOINT_DOCS,
            method: "GET",
            description: "Get API documentation and available legal documents",
            request_body: None,
            response: None,
        },
        EndpointInfo {
            path: ENDPOINT_GENERATE,
            method: "POST",
            description: "Search legal documents and generate summary",
            request_body: Some(json!({ "query": "string (required)" })),
            response: Some(json!({
                "summary": "string",
                "relevant_docs": "array of documents with relevance scores"
            })),
        },
    ]
}
