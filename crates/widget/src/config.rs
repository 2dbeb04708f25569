//! Widget configuration and embed-tag resolution.
//!
//! A widget is configured either programmatically (builder) or from the
//! `data-*` attributes of the embed `<script>` tag a host page carries:
//!
//! ```html
//! <script src="https://widgets.shopin.app/static/embed.js"
//!         data-shop-domain="demo.myshopify.com"
//!         data-token="0b5d8f3f2a9c4e1d"
//!         data-product-ids="8359425179890,8359425212658"
//!         data-position="bottom-right"
//!         data-theme="light"></script>
//! ```
//!
//! Embed-tag resolution is deliberately silent: a tag missing the shop
//! domain, the token, or every product id yields no widget at all rather
//! than an error the host page would have to handle.

use regex::Regex;
use serde::Deserialize;
use shopin_core::{Position, ProductId, Theme};
use thiserror::Error;

/// Storefront API version the widget queries.
pub const DEFAULT_API_VERSION: &str = "2023-10";

/// Configuration errors from programmatic construction.
///
/// Embed-tag resolution never reports these; it skips initialization
/// silently instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("shop domain must not be empty")]
    MissingShopDomain,
    #[error("storefront access token must not be empty")]
    MissingToken,
    #[error("at least one product id is required")]
    MissingProductIds,
}

/// Immutable widget configuration.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Shop domain, e.g. `demo.myshopify.com`.
    pub shop_domain: String,
    /// Storefront API public access token.
    pub token: String,
    /// Products to feature, in display order.
    pub product_ids: Vec<ProductId>,
    /// Host-page element to mount into; `None` uses the default container.
    pub container_id: Option<String>,
    /// Screen corner the widget floats in.
    pub position: Position,
    /// Color theme.
    pub theme: Theme,
    /// Storefront API version.
    pub api_version: String,
}

impl WidgetConfig {
    /// Start building a configuration from the two required credentials.
    #[must_use]
    pub fn builder(shop_domain: impl Into<String>, token: impl Into<String>) -> WidgetConfigBuilder {
        WidgetConfigBuilder {
            shop_domain: shop_domain.into(),
            token: token.into(),
            product_ids: Vec::new(),
            container_id: None,
            position: Position::default(),
            theme: Theme::default(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Storefront GraphQL endpoint for this shop.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "https://{}/api/{}/graphql.json",
            self.shop_domain, self.api_version
        )
    }

    /// Public product page URL for a product handle.
    #[must_use]
    pub fn product_url(&self, handle: &str) -> String {
        format!("https://{}/products/{handle}", self.shop_domain)
    }

    /// Render the embed `<script>` tag for this configuration.
    ///
    /// `script_src` is the URL the loader script is served from.
    #[must_use]
    pub fn embed_snippet(&self, script_src: &str) -> String {
        let ids = self
            .product_ids
            .iter()
            .map(ProductId::as_str)
            .collect::<Vec<_>>()
            .join(",");

        let mut snippet = format!(
            "<script src=\"{}\" data-shop-domain=\"{}\" data-token=\"{}\" data-product-ids=\"{}\" data-position=\"{}\" data-theme=\"{}\"",
            escape_attr(script_src),
            escape_attr(&self.shop_domain),
            escape_attr(&self.token),
            escape_attr(&ids),
            self.position,
            self.theme,
        );
        if let Some(container_id) = &self.container_id {
            snippet.push_str(&format!(
                " data-container-id=\"{}\"",
                escape_attr(container_id)
            ));
        }
        snippet.push_str("></script>");
        snippet
    }
}

/// Builder for [`WidgetConfig`].
#[derive(Debug, Clone)]
pub struct WidgetConfigBuilder {
    shop_domain: String,
    token: String,
    product_ids: Vec<ProductId>,
    container_id: Option<String>,
    position: Position,
    theme: Theme,
    api_version: String,
}

impl WidgetConfigBuilder {
    /// Replace the product id list.
    #[must_use]
    pub fn product_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ProductId>,
    {
        self.product_ids = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Mount into a specific host-page element instead of the default.
    #[must_use]
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    #[must_use]
    pub const fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub const fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Override the Storefront API version.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the shop domain or token is blank, or no
    /// product id survived parsing.
    pub fn build(self) -> Result<WidgetConfig, ConfigError> {
        if self.shop_domain.trim().is_empty() {
            return Err(ConfigError::MissingShopDomain);
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if self.product_ids.is_empty() {
            return Err(ConfigError::MissingProductIds);
        }

        Ok(WidgetConfig {
            shop_domain: self.shop_domain,
            token: self.token,
            product_ids: self.product_ids,
            container_id: self.container_id,
            position: self.position,
            theme: self.theme,
            api_version: self.api_version,
        })
    }
}

/// Raw embed attributes before resolution.
///
/// One resolution path serves both sources: the embed `<script>` tag in host
/// HTML, and the query string the loader script forwards to the server.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmbedAttrs {
    pub shop_domain: Option<String>,
    pub token: Option<String>,
    /// Comma-separated raw product ids, as written in the embed attribute.
    pub product_ids: Option<String>,
    pub position: Option<String>,
    pub theme: Option<String>,
    pub container_id: Option<String>,
}

impl EmbedAttrs {
    /// Resolve into a validated configuration.
    ///
    /// Returns `None` if the shop domain, the token, or every product id is
    /// missing; unknown position/theme values fall back to their defaults.
    /// No diagnostic reaches the host page.
    #[must_use]
    pub fn resolve(self) -> Option<WidgetConfig> {
        let shop_domain = self.shop_domain.filter(|v| !v.trim().is_empty())?;
        let token = self.token.filter(|v| !v.trim().is_empty())?;
        let product_ids = parse_product_ids(self.product_ids.as_deref().unwrap_or_default());
        if product_ids.is_empty() {
            tracing::debug!(%shop_domain, "embed attributes carry no product ids, skipping");
            return None;
        }

        let position = self
            .position
            .as_deref()
            .and_then(Position::from_attr)
            .unwrap_or_default();
        let theme = self
            .theme
            .as_deref()
            .and_then(Theme::from_attr)
            .unwrap_or_default();

        Some(WidgetConfig {
            shop_domain,
            token,
            product_ids,
            container_id: self.container_id.filter(|v| !v.trim().is_empty()),
            position,
            theme,
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }
}

/// Resolve a configuration from the first embed `<script>` tag in host HTML.
///
/// Mirrors the loader's auto-init: the first script tag carrying
/// `data-shop-domain` is the embed tag; if it is incomplete no widget is
/// initialized and later tags are not consulted.
#[must_use]
pub fn from_embed_tag(html: &str) -> Option<WidgetConfig> {
    let tag = find_embed_tag(html)?;
    EmbedAttrs {
        shop_domain: attr_value(tag, "data-shop-domain"),
        token: attr_value(tag, "data-token"),
        product_ids: attr_value(tag, "data-product-ids"),
        position: attr_value(tag, "data-position"),
        theme: attr_value(tag, "data-theme"),
        container_id: attr_value(tag, "data-container-id"),
    }
    .resolve()
}

/// Split a comma-separated id attribute, preserving order and dropping
/// blank segments.
fn parse_product_ids(raw: &str) -> Vec<ProductId> {
    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ProductId::new)
        .collect()
}

/// First `<script ...>` open tag that carries a `data-shop-domain` attribute.
fn find_embed_tag(html: &str) -> Option<&str> {
    let tags = Regex::new(r"(?is)<script\b[^>]*>").ok()?;
    tags.find_iter(html)
        .map(|m| m.as_str())
        .find(|tag| attr_value(tag, "data-shop-domain").is_some())
}

/// Extract a double- or single-quoted attribute value from an open tag.
fn attr_value(tag: &str, name: &str) -> Option<String> {
    let pattern = format!(r#"(?is)\b{name}\s*=\s*(?:"([^"]*)"|'([^']*)')"#);
    let re = Regex::new(&pattern).ok()?;
    let captures = re.captures(tag)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().to_string())
}

/// Minimal escaping for values interpolated into HTML attributes.
pub(crate) fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
