//! Search Module
//!
//! Matches a free-text query against the document store and produces a ranked
//! list of excerpts plus a short canned summary.
//!
//! ## Overview
//! There is no tokenizer and no inverted index here. A hand-authored keyword
//! table is checked by substring containment against the lowercased query;
//! every document signalled by a hit is returned with a high score, and a query
//! that hits nothing returns the whole store with a low score.
//!
//! ## Submodules
//! - **`engine`**: The `Matcher`, scoring and excerpt extraction.
//! - **`handlers`**: The `POST /generate` Axum handler.
//! - **`keywords`**: The keyword-to-document lookup table.
//! - **`summary`**: Ordered, first-match-wins summary selection.
//! - **`types`**: Request/response DTOs for the search endpoint.

pub mod engine;
pub mod handlers;
pub mod keywords;
pub mod summary;
pub mod types;
