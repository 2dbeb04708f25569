//! Domain types for fetched products.
//!
//! These types provide a clean API separate from the raw wire structs in
//! [`super::wire`].

use serde::{Deserialize, Serialize};
use shopin_core::{Price, ProductId};

/// Monetary amount with currency code, as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal amount as string (preserves precision).
    pub amount: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Locale-fixed display form, e.g. `$19.50`.
    ///
    /// An amount the API reports in a shape [`Price`] cannot parse falls
    /// back to `{amount} {code}` verbatim.
    #[must_use]
    pub fn display(&self) -> String {
        Price::parse(&self.amount, &self.currency_code).map_or_else(
            |_| format!("{} {}", self.amount, self.currency_code),
            |price| price.to_string(),
        )
    }
}

/// A product as shown in the widget grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Raw product id (the numeric part of the gid).
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL handle on the shop's storefront.
    pub handle: String,
    /// First product image, if any.
    pub image_url: Option<String>,
    /// Minimum variant price.
    pub price: Money,
}

impl From<super::wire::ProductNode> for Product {
    fn from(node: super::wire::ProductNode) -> Self {
        Self {
            // The API reports gids; nodes of an unexpected shape keep the
            // reported id verbatim
            id: ProductId::from_gid(&node.id).unwrap_or_else(|| ProductId::new(node.id)),
            title: node.title,
            handle: node.handle,
            image_url: node.images.edges.into_iter().next().map(|edge| edge.node.url),
            price: Money {
                amount: node.price_range.min_variant_price.amount,
                currency_code: node.price_range.min_variant_price.currency_code,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        let money = Money {
            amount: "19.5".to_string(),
            currency_code: "USD".to_string(),
        };
        assert_eq!(money.display(), "$19.50");
    }

    #[test]
    fn test_money_display_falls_back_on_unparseable_amount() {
        let money = Money {
            amount: "free".to_string(),
            currency_code: "USD".to_string(),
        };
        assert_eq!(money.display(), "free USD");
    }
}
