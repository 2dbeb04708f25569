//! Wire types for the Storefront GraphQL exchange.
//!
//! The widget issues exactly one query, so the request and response shapes
//! are hand-written serde structs rather than schema codegen. The response
//! structs mirror the connection shapes of the Storefront schema
//! (`images(first: 1)` edges, `priceRange.minVariantPrice`).

use serde::{Deserialize, Serialize};

/// The product resolution query.
///
/// `nodes(ids:)` resolves each gid independently; ids that no longer exist
/// or are outside the token's scope come back as `null` entries.
pub const PRODUCT_NODES_QUERY: &str = "\
query getProducts($ids: [ID!]!) {
  nodes(ids: $ids) {
    ... on Product {
      id
      title
      handle
      images(first: 1) {
        edges {
          node {
            url
          }
        }
      }
      priceRange {
        minVariantPrice {
          amount
          currencyCode
        }
      }
    }
  }
}";

/// GraphQL request envelope.
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub query: &'a str,
    pub variables: Variables,
}

/// Variables for [`PRODUCT_NODES_QUERY`].
#[derive(Debug, Serialize)]
pub struct Variables {
    /// Product gids, in display order.
    pub ids: Vec<String>,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct Response {
    pub data: Option<Data>,
    pub errors: Option<Vec<Error>>,
}

/// A single entry of the response `errors` array.
#[derive(Debug, Deserialize)]
pub struct Error {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    /// One entry per requested id; unresolvable ids are `null`.
    pub nodes: Vec<Option<ProductNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub images: ImageConnection,
    pub price_range: PriceRange,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageConnection {
    #[serde(default)]
    pub edges: Vec<ImageEdge>,
}

#[derive(Debug, Deserialize)]
pub struct ImageEdge {
    pub node: ImageNode,
}

#[derive(Debug, Deserialize)]
pub struct ImageNode {
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: MoneyV2,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: String,
    pub currency_code: String,
}
