//! Mount/lifecycle: container resolution and the imperative widget handle.
//!
//! A mounted widget lives inside one container element whose id is either
//! caller-supplied or [`DEFAULT_CONTAINER_ID`], with the position and theme
//! applied as CSS class modifiers. The handle re-renders after every
//! transition (explicit redraw); host pages that want programmatic control
//! outside the floating button call `open`/`close`/`destroy` directly.

use crate::config::{self, WidgetConfig};
use crate::controller::{FetchProducts, Widget, WidgetState};
use crate::storefront::StorefrontClient;
use crate::views;

/// Container element id used when the host page does not supply one.
pub const DEFAULT_CONTAINER_ID: &str = "shopin-widget-container";

/// Mount a widget against the real Storefront API.
#[must_use]
pub fn mount(config: WidgetConfig) -> WidgetHandle<StorefrontClient> {
    let client = StorefrontClient::new(&config);
    mount_with_fetcher(config, client)
}

/// Mount a widget with a custom fetcher (tests, instrumented callers).
#[must_use]
pub fn mount_with_fetcher<F: FetchProducts>(config: WidgetConfig, fetcher: F) -> WidgetHandle<F> {
    WidgetHandle {
        widget: Widget::new(config, fetcher),
    }
}

/// Resolve the embed tag in host HTML and mount the widget it describes.
///
/// Returns `None` - silently - when no complete embed tag is present.
#[must_use]
pub fn mount_from_host_html(html: &str) -> Option<WidgetHandle<StorefrontClient>> {
    config::from_embed_tag(html).map(mount)
}

/// An initialized widget bound to its container.
pub struct WidgetHandle<F = StorefrontClient> {
    widget: Widget<F>,
}

impl<F: FetchProducts> WidgetHandle<F> {
    /// Id of the container element this widget renders into.
    #[must_use]
    pub fn container_id(&self) -> &str {
        self.widget
            .config()
            .container_id
            .as_deref()
            .unwrap_or(DEFAULT_CONTAINER_ID)
    }

    /// The immutable configuration.
    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        self.widget.config()
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &WidgetState {
        self.widget.state()
    }

    /// Open the panel and return the re-rendered container.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub async fn open(&mut self) -> askama::Result<String> {
        self.widget.open().await;
        self.render()
    }

    /// Close the panel and return the re-rendered container.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn close(&mut self) -> askama::Result<String> {
        self.widget.close();
        self.render()
    }

    /// Flip open/closed and return the re-rendered container.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub async fn toggle(&mut self) -> askama::Result<String> {
        self.widget.toggle().await;
        self.render()
    }

    /// Controlled mode: force the displayed state from an external flag.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub async fn sync_open(&mut self, open: bool) -> askama::Result<String> {
        self.widget.sync_open(open).await;
        self.render()
    }

    /// Repeat the fetch after an error and return the re-rendered container.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub async fn retry(&mut self) -> askama::Result<String> {
        self.widget.retry().await;
        self.render()
    }

    /// Render the container and its current contents.
    ///
    /// A destroyed widget renders nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self) -> askama::Result<String> {
        if self.widget.is_destroyed() {
            return Ok(String::new());
        }

        let config = self.widget.config();
        let inner = views::render_widget(config, self.widget.state())?;
        Ok(format!(
            "<div id=\"{}\" class=\"shopin-widget shopin-widget-{} shopin-widget-{}\">{}</div>",
            config::escape_attr(self.container_id()),
            config.position,
            config.theme,
            inner,
        ))
    }

    /// Render only the panel body (fragment delivery).
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render_panel(&self) -> askama::Result<String> {
        if self.widget.is_destroyed() {
            return Ok(String::new());
        }
        views::render_panel(self.widget.config(), self.widget.state())
    }

    /// Tear the widget down. Later operations are no-ops and render nothing.
    pub fn destroy(&mut self) {
        self.widget.destroy();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use shopin_core::{Position, ProductId, Theme};

    use crate::storefront::{Money, Product, StorefrontError};

    use super::*;

    /// Fetcher that always succeeds with one product.
    struct StubFetcher;

    impl FetchProducts for StubFetcher {
        async fn fetch_products(
            &self,
            _ids: &[ProductId],
        ) -> Result<Vec<Product>, StorefrontError> {
            Ok(vec![Product {
                id: ProductId::new("1"),
                title: "Blue Mug".to_string(),
                handle: "blue-mug".to_string(),
                image_url: None,
                price: Money {
                    amount: "19.5".to_string(),
                    currency_code: "USD".to_string(),
                },
            }])
        }
    }

    fn test_config() -> WidgetConfig {
        WidgetConfig::builder("demo.myshopify.com", "tok")
            .product_ids(["1"])
            .position(Position::TopLeft)
            .theme(Theme::Dark)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_container_markup() {
        let handle = mount_with_fetcher(test_config(), StubFetcher);
        let html = handle.render().unwrap();

        assert!(html.starts_with(&format!("<div id=\"{DEFAULT_CONTAINER_ID}\"")));
        assert!(html.contains("shopin-widget shopin-widget-top-left shopin-widget-dark"));
        assert!(html.contains("shopin-widget-fab"));
    }

    #[tokio::test]
    async fn test_custom_container_id() {
        let config = WidgetConfig::builder("demo.myshopify.com", "tok")
            .product_ids(["1"])
            .container_id("my-spot")
            .build()
            .unwrap();
        let handle = mount_with_fetcher(config, StubFetcher);
        assert_eq!(handle.container_id(), "my-spot");
        assert!(handle.render().unwrap().contains("id=\"my-spot\""));
    }

    #[tokio::test]
    async fn test_open_renders_products() {
        let mut handle = mount_with_fetcher(test_config(), StubFetcher);
        let html = handle.open().await.unwrap();
        assert!(html.contains("shopin-widget-panel"));
        assert!(html.contains("Blue Mug"));
        assert!(html.contains("$19.50"));
    }

    #[tokio::test]
    async fn test_destroy_renders_nothing() {
        let mut handle = mount_with_fetcher(test_config(), StubFetcher);
        handle.open().await.unwrap();
        handle.destroy();
        assert_eq!(handle.render().unwrap(), "");
        assert_eq!(handle.render_panel().unwrap(), "");
    }

    #[tokio::test]
    async fn test_mount_from_host_html() {
        let html = r#"<script data-shop-domain="d.myshopify.com" data-token="t" data-product-ids="5,6"></script>"#;
        let handle = mount_from_host_html(html).unwrap();
        assert_eq!(handle.config().product_ids.len(), 2);

        assert!(mount_from_host_html("<p>no embed here</p>").is_none());
    }
}
