//! Legal Document Search Service Library
//!
//! Core modules of a small HTTP service that matches free-text queries against
//! a fixed set of legal documents. The binary (`main.rs`) only parses config,
//! sets up logging and serves the router built here.
//!
//! ## Modules
//! - **`api`**: Axum router, introspection handlers, error mapping and middleware.
//! - **`config`**: Command-line / environment configuration.
//! - **`documents`**: The static, read-only document store.
//! - **`search`**: Keyword matching, scoring and summary selection.

pub mod api;
pub mod config;
pub mod documents;
pub mod search;
