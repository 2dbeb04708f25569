//! Shopify Storefront API product fetcher.
//!
//! # Architecture
//!
//! - One fixed GraphQL document resolves the configured product ids through
//!   the `nodes(ids:)` query; typed serde structs in [`wire`] describe the
//!   request and response shapes
//! - Shopify is source of truth - products are fetched fresh per widget
//!   lifetime, never persisted
//! - Authenticates with the Storefront API *public* access token
//!   (`X-Shopify-Storefront-Access-Token` header), the same credential host
//!   pages embed

mod client;
mod types;
pub mod wire;

pub use client::StorefrontClient;
pub use types::{Money, Product};

use thiserror::Error;

/// Panel copy for failures that carry no usable message of their own.
pub const GENERIC_FETCH_FAILURE: &str = "Failed to fetch products";

/// Errors that can occur when fetching products from the Storefront API.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// HTTP transport failed (connect, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response carried a GraphQL `errors` array.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// The response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response carried neither `data` nor `errors`.
    #[error("response contained neither data nor errors")]
    MissingData,
}

impl StorefrontError {
    /// The human-readable message the widget panel displays.
    ///
    /// GraphQL-reported errors surface their first message; everything else
    /// collapses into a generic failure string so transport internals never
    /// leak into the host page.
    #[must_use]
    pub fn panel_message(&self) -> String {
        match self {
            Self::GraphQL(errors) => errors
                .first()
                .map_or_else(|| GENERIC_FETCH_FAILURE.to_string(), |e| e.message.clone()),
            _ => GENERIC_FETCH_FAILURE.to_string(),
        }
    }
}

/// A GraphQL error returned by the Storefront API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    if errors.is_empty() {
        return "(no error details provided)".to_string();
    }

    errors
        .iter()
        .map(|e| {
            if e.message.is_empty() {
                "(no details)".to_string()
            } else {
                e.message.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
