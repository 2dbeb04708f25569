//! Presentation views.
//!
//! All views are pure functions of the widget state: the floating toggle
//! button, the panel (loading / error / grid), and the product grid. Prices
//! and product URLs are precomputed into [`ProductView`] so templates only
//! interpolate strings.

use askama::Template;
use shopin_core::Theme;

use crate::config::WidgetConfig;
use crate::controller::WidgetState;
use crate::storefront::Product;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: String,
    pub title: String,
    /// Product page on the shop's storefront; opened in a new tab.
    pub url: String,
    pub image_url: Option<String>,
    /// Currency-formatted price, e.g. `$19.50`.
    pub price: String,
}

impl ProductView {
    fn new(product: &Product, config: &WidgetConfig) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            url: config.product_url(&product.handle),
            image_url: product.image_url.clone(),
            price: product.price.display(),
        }
    }
}

/// Floating toggle button: pure function of `{is_open, theme}`.
#[derive(Template)]
#[template(path = "button.html")]
pub struct FloatingButtonTemplate {
    pub is_open: bool,
    pub theme: Theme,
}

/// Product grid: pure function of `{products, theme}`.
#[derive(Template)]
#[template(path = "grid.html")]
pub struct ProductGridTemplate {
    pub products: Vec<ProductView>,
    pub theme: Theme,
}

/// Panel body: loading indicator, error display with Retry, or the grid.
#[derive(Template)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    pub loading: bool,
    pub error: Option<String>,
    pub products: Vec<ProductView>,
    pub theme: Theme,
}

impl PanelTemplate {
    /// Build the panel view for the current state.
    #[must_use]
    pub fn from_state(config: &WidgetConfig, state: &WidgetState) -> Self {
        Self {
            loading: state.loading,
            error: state.error.clone(),
            products: product_views(config, state),
            theme: config.theme,
        }
    }
}

/// The whole widget: toggle button plus, when open, the panel.
#[derive(Template)]
#[template(path = "widget.html")]
pub struct WidgetTemplate {
    pub is_open: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub products: Vec<ProductView>,
    pub theme: Theme,
}

impl WidgetTemplate {
    /// Build the widget view for the current state.
    #[must_use]
    pub fn from_state(config: &WidgetConfig, state: &WidgetState) -> Self {
        Self {
            is_open: state.is_open,
            loading: state.loading,
            error: state.error.clone(),
            products: product_views(config, state),
            theme: config.theme,
        }
    }
}

fn product_views(config: &WidgetConfig, state: &WidgetState) -> Vec<ProductView> {
    state
        .products
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|product| ProductView::new(product, config))
        .collect()
}

/// Render the whole widget for the current state.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_widget(config: &WidgetConfig, state: &WidgetState) -> askama::Result<String> {
    WidgetTemplate::from_state(config, state).render()
}

/// Render only the panel for the current state.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_panel(config: &WidgetConfig, state: &WidgetState) -> askama::Result<String> {
    PanelTemplate::from_state(config, state).render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopin_core::ProductId;

    use crate::storefront::Money;

    use super::*;

    fn test_config() -> WidgetConfig {
        WidgetConfig::builder("demo.myshopify.com", "tok")
            .product_ids(["1", "2"])
            .build()
            .unwrap()
    }

    fn product(id: &str, title: &str, handle: &str, image: Option<&str>) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            handle: handle.to_string(),
            image_url: image.map(String::from),
            price: Money {
                amount: "19.5".to_string(),
                currency_code: "USD".to_string(),
            },
        }
    }

    #[test]
    fn test_button_reflects_open_state() {
        let closed = FloatingButtonTemplate {
            is_open: false,
            theme: Theme::Light,
        }
        .render()
        .unwrap();
        assert!(closed.contains("aria-label=\"Open widget\""));
        assert!(!closed.contains(" open\""));

        let open = FloatingButtonTemplate {
            is_open: true,
            theme: Theme::Dark,
        }
        .render()
        .unwrap();
        assert!(open.contains("aria-label=\"Close widget\""));
        assert!(open.contains("dark"));
    }

    #[test]
    fn test_grid_renders_items_in_order() {
        let config = test_config();
        let state = WidgetState {
            is_open: true,
            products: Some(vec![
                product("1", "Blue Mug", "blue-mug", Some("https://cdn/x.jpg")),
                product("2", "Red Mug", "red-mug", None),
            ]),
            loading: false,
            error: None,
        };

        let html = render_panel(&config, &state).unwrap();
        let first = html.find("Blue Mug").unwrap();
        let second = html.find("Red Mug").unwrap();
        assert!(first < second);

        // Formatted price and product-page link.
        assert!(html.contains("$19.50"));
        assert!(html.contains("https://demo.myshopify.com/products/blue-mug"));
        assert!(html.contains("target=\"_blank\""));
        // Missing image falls back to the placeholder.
        assert!(html.contains("shopin-widget-product-placeholder"));
    }

    #[test]
    fn test_grid_empty_state() {
        let config = test_config();
        let state = WidgetState {
            is_open: true,
            products: Some(vec![]),
            loading: false,
            error: None,
        };
        let html = render_panel(&config, &state).unwrap();
        assert!(html.contains("No products available"));
        assert!(!html.contains("shopin-widget-grid"));
    }

    #[test]
    fn test_panel_error_shows_message_and_retry() {
        let config = test_config();
        let state = WidgetState {
            is_open: true,
            products: None,
            loading: false,
            error: Some("Invalid token".to_string()),
        };
        let html = render_panel(&config, &state).unwrap();
        assert!(html.contains("Error: Invalid token"));
        assert!(html.contains("data-shopin-retry"));
        assert!(!html.contains("shopin-widget-loading"));
    }

    #[test]
    fn test_panel_loading_indicator() {
        let config = test_config();
        let state = WidgetState {
            is_open: true,
            products: None,
            loading: true,
            error: None,
        };
        let html = render_panel(&config, &state).unwrap();
        assert!(html.contains("Loading products"));
        assert!(!html.contains("data-shopin-retry"));
    }

    #[test]
    fn test_widget_hides_panel_when_closed() {
        let config = test_config();
        let state = WidgetState::default();
        let html = render_widget(&config, &state).unwrap();
        assert!(html.contains("shopin-widget-fab"));
        assert!(!html.contains("shopin-widget-panel"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let config = test_config();
        let state = WidgetState {
            is_open: true,
            products: None,
            loading: false,
            error: Some("<script>alert(1)</script>".to_string()),
        };
        let html = render_panel(&config, &state).unwrap();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
