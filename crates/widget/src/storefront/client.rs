//! Storefront API client.

use std::sync::Arc;

use shopin_core::ProductId;
use tracing::{debug, instrument};

use crate::config::WidgetConfig;

use super::{GraphQLError, Product, StorefrontError, wire};

/// Header carrying the Storefront API public access token.
const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Client for the Shopify Storefront API.
///
/// Resolves the widget's configured product ids into full product records
/// with a single `nodes(ids:)` query.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    /// Create a client for the configured shop.
    #[must_use]
    pub fn new(config: &WidgetConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing HTTP connection pool.
    #[must_use]
    pub fn with_http_client(client: reqwest::Client, config: &WidgetConfig) -> Self {
        Self::with_endpoint(client, config.endpoint(), config.token.clone())
    }

    /// Create a client against an explicit endpoint.
    ///
    /// Tests point this at a local mock server; production callers use
    /// [`StorefrontClient::new`].
    #[must_use]
    pub fn with_endpoint(client: reqwest::Client, endpoint: String, access_token: String) -> Self {
        Self {
            inner: Arc::new(StorefrontClientInner {
                client,
                endpoint,
                access_token,
            }),
        }
    }

    /// Resolve product ids into product records.
    ///
    /// Ids that resolve to nothing (deleted products, ids outside the
    /// token's scope) are dropped; the order of the remaining products
    /// follows the order of `ids`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success status, a
    /// GraphQL `errors` response, or an undecodable body.
    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    pub async fn fetch_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, StorefrontError> {
        let request = wire::Request {
            query: wire::PRODUCT_NODES_QUERY,
            variables: wire::Variables {
                ids: ids.iter().map(ProductId::gid).collect(),
            },
        };

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(ACCESS_TOKEN_HEADER, &self.inner.access_token)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        // Read the body as text first for better error diagnostics
        let response_text = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Storefront API returned non-success status"
            );
            return Err(StorefrontError::Status(status.as_u16()));
        }

        let parsed: wire::Response = match serde_json::from_str(&response_text) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Storefront GraphQL response"
                );
                return Err(StorefrontError::Parse(e));
            }
        };

        if let Some(errors) = parsed.errors
            && !errors.is_empty()
        {
            debug!(count = errors.len(), "GraphQL errors in response");
            return Err(StorefrontError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError { message: e.message })
                    .collect(),
            ));
        }

        let data = parsed.data.ok_or(StorefrontError::MissingData)?;

        let products: Vec<Product> = data.nodes.into_iter().flatten().map(Product::from).collect();
        debug!(resolved = products.len(), "products fetched");

        Ok(products)
    }
}
