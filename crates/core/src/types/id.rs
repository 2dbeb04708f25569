//! Type-safe product id with Shopify global-id conversion.
//!
//! Shopify addresses resources through URI-shaped "global ids"; for products
//! the form is `gid://shopify/Product/{numericId}`. Host pages configure the
//! widget with the raw numeric part, the Storefront API speaks gids.

use serde::{Deserialize, Serialize};

/// Gid prefix for product resources.
const PRODUCT_GID_PREFIX: &str = "gid://shopify/Product/";

/// A Shopify product id as configured by the host page.
///
/// The raw id is kept as an opaque string: Shopify ids are numeric today but
/// documented as opaque, and round-tripping them through an integer would
/// silently mangle malformed embed attributes instead of passing them to the
/// API, which reports them as unresolvable nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id from its raw (numeric) form.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw id as configured, e.g. `"8359425179890"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The Storefront API global id, e.g.
    /// `"gid://shopify/Product/8359425179890"`.
    #[must_use]
    pub fn gid(&self) -> String {
        format!("{PRODUCT_GID_PREFIX}{}", self.0)
    }

    /// Parse a product gid back into its raw id.
    ///
    /// Returns `None` for gids of other resource types.
    #[must_use]
    pub fn from_gid(gid: &str) -> Option<Self> {
        gid.strip_prefix(PRODUCT_GID_PREFIX).map(Self::new)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ProductId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gid_round_trip() {
        let id = ProductId::new("8359425179890");
        assert_eq!(id.gid(), "gid://shopify/Product/8359425179890");
        assert_eq!(ProductId::from_gid(&id.gid()), Some(id));
    }

    #[test]
    fn test_from_gid_rejects_other_resources() {
        assert_eq!(ProductId::from_gid("gid://shopify/Collection/42"), None);
        assert_eq!(ProductId::from_gid("42"), None);
    }

    #[test]
    fn test_display_is_raw_id() {
        assert_eq!(ProductId::new("123").to_string(), "123");
    }
}
