use super::engine::Matcher;
use super::types::{QueryRequest, SearchResponse};
use crate::api::errors::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::{Extension, Json};

pub async fn handle_generate(
    Extension(matcher): Extension<Matcher>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::warn!("Rejected /generate body: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    if req.query.trim().is_empty() {
        tracing::warn!("Rejected empty query");
        return Err(ApiError::BadRequest("Query cannot be empty".to_string()));
    }

    let response = matcher.search(&req.query);
    tracing::info!(
        "Query {:?} -> {} relevant document(s)",
        req.query,
        response.relevant_docs.len()
    );

    Ok(Json(response))
}
