//! Widget controller: the open/loading/error/ready state machine.
//!
//! The controller owns the only mutable state in the widget. Opening the
//! panel for the first time is the only trigger for the product fetch; a
//! successful fetch is kept for the instance's lifetime, a failed fetch is
//! kept as a stale error display until the user presses Retry. Closing the
//! panel never clears anything.

use shopin_core::ProductId;

use crate::config::WidgetConfig;
use crate::storefront::{Product, StorefrontClient, StorefrontError};

/// Seam between the controller and the Storefront API.
///
/// The controller only needs "ids in, products or a failure out"; tests
/// drive the state machine with a counting mock behind this trait.
pub trait FetchProducts {
    /// Resolve product ids into product records.
    fn fetch_products(
        &self,
        ids: &[ProductId],
    ) -> impl Future<Output = Result<Vec<Product>, StorefrontError>> + Send;
}

impl FetchProducts for StorefrontClient {
    fn fetch_products(
        &self,
        ids: &[ProductId],
    ) -> impl Future<Output = Result<Vec<Product>, StorefrontError>> + Send {
        Self::fetch_products(self, ids)
    }
}

/// Transient widget state, owned solely by the controller.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    /// Whether the panel is shown.
    pub is_open: bool,
    /// `None` until the first successful fetch; then the fetched products,
    /// possibly empty.
    pub products: Option<Vec<Product>>,
    /// A fetch is outstanding.
    pub loading: bool,
    /// Panel error message from the last failed fetch.
    pub error: Option<String>,
}

impl WidgetState {
    /// The display phase derived from the state bundle.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.is_open {
            Phase::Closed
        } else if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Error
        } else {
            Phase::Ready
        }
    }

    /// Whether products have been fetched successfully.
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        self.products.is_some()
    }
}

/// Display phase of the widget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Loading,
    Error,
    Ready,
}

/// The widget controller.
///
/// State transitions:
///
/// ```text
/// closed --toggle--> open-loading   (products not yet fetched, no prior error)
/// closed --toggle--> open-ready     (products fetched)
/// closed --toggle--> open-error     (stale error, retry-eligible)
/// open-loading --success--> open-ready
/// open-loading --failure--> open-error
/// open-error --retry--> open-loading
/// any open state --toggle--> closed (products and error are preserved)
/// ```
pub struct Widget<F> {
    config: WidgetConfig,
    fetcher: F,
    state: WidgetState,
    destroyed: bool,
}

impl<F: FetchProducts> Widget<F> {
    /// Create a closed widget.
    pub const fn new(config: WidgetConfig, fetcher: F) -> Self {
        Self {
            config,
            fetcher,
            state: WidgetState {
                is_open: false,
                products: None,
                loading: false,
                error: None,
            },
            destroyed: false,
        }
    }

    /// The immutable configuration.
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Current state snapshot.
    pub const fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Whether [`Widget::destroy`] has been called.
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Open the panel, fetching products if this is the first open.
    ///
    /// A prior error re-opens into the stale error display; only Retry
    /// starts a new fetch. A fetch already outstanding is never doubled.
    pub async fn open(&mut self) {
        if self.destroyed {
            return;
        }
        self.state.is_open = true;
        if !self.state.is_fetched() && self.state.error.is_none() && !self.state.loading {
            self.fetch().await;
        }
    }

    /// Close the panel, preserving products and error.
    pub fn close(&mut self) {
        if self.destroyed {
            return;
        }
        self.state.is_open = false;
    }

    /// Flip between open and closed.
    pub async fn toggle(&mut self) {
        if self.state.is_open {
            self.close();
        } else {
            self.open().await;
        }
    }

    /// Controlled mode: force the displayed state from an external flag.
    ///
    /// Call whenever the external flag changes; opening behaves exactly
    /// like [`Widget::open`].
    pub async fn sync_open(&mut self, open: bool) {
        if open {
            self.open().await;
        } else {
            self.close();
        }
    }

    /// Repeat the fetch after an error. No-op outside the error display.
    pub async fn retry(&mut self) {
        if self.destroyed || !self.state.is_open || self.state.error.is_none() {
            return;
        }
        self.fetch().await;
    }

    /// Tear the widget down; every later operation is a no-op.
    pub fn destroy(&mut self) {
        self.destroyed = true;
        self.state = WidgetState::default();
    }

    async fn fetch(&mut self) {
        if self.state.loading {
            return;
        }
        self.state.loading = true;
        self.state.error = None;

        let result = self.fetcher.fetch_products(&self.config.product_ids).await;

        // The panel may have been torn down while the request was in
        // flight; the late resolution must not resurrect any state.
        if self.destroyed {
            return;
        }

        self.state.loading = false;
        match result {
            Ok(products) => {
                self.state.products = Some(products);
            }
            Err(e) => {
                tracing::debug!(error = %e, "product fetch failed");
                self.state.error = Some(e.panel_message());
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::storefront::{GraphQLError, Money};

    use super::*;

    /// Mock fetcher that counts calls and replays a scripted outcome.
    #[derive(Clone)]
    struct MockFetcher {
        calls: Arc<AtomicUsize>,
        outcome: Arc<dyn Fn(usize) -> Result<Vec<Product>, StorefrontError> + Send + Sync>,
    }

    impl MockFetcher {
        fn ok(products: Vec<Product>) -> Self {
            Self::scripted(move |_| Ok(products.clone()))
        }

        fn graphql_error(message: &str) -> Self {
            let message = message.to_string();
            Self::scripted(move |_| {
                Err(StorefrontError::GraphQL(vec![GraphQLError {
                    message: message.clone(),
                }]))
            })
        }

        fn scripted(
            outcome: impl Fn(usize) -> Result<Vec<Product>, StorefrontError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                outcome: Arc::new(outcome),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl FetchProducts for MockFetcher {
        async fn fetch_products(
            &self,
            _ids: &[ProductId],
        ) -> Result<Vec<Product>, StorefrontError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            (self.outcome)(call)
        }
    }

    fn test_config() -> WidgetConfig {
        WidgetConfig::builder("demo.myshopify.com", "tok")
            .product_ids(["1", "2"])
            .build()
            .unwrap()
    }

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            handle: title.to_lowercase().replace(' ', "-"),
            image_url: None,
            price: Money {
                amount: "19.5".to_string(),
                currency_code: "USD".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_first_open_fetches_exactly_once() {
        let fetcher = MockFetcher::ok(vec![product("1", "Blue Mug")]);
        let mut widget = Widget::new(test_config(), fetcher.clone());

        assert_eq!(widget.state().phase(), Phase::Closed);
        widget.toggle().await;
        assert_eq!(widget.state().phase(), Phase::Ready);
        assert_eq!(fetcher.call_count(), 1);

        // Re-opening without a reset never refetches.
        widget.toggle().await;
        assert_eq!(widget.state().phase(), Phase::Closed);
        widget.toggle().await;
        assert_eq!(widget.state().phase(), Phase::Ready);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_success_counts_as_fetched() {
        let fetcher = MockFetcher::ok(vec![]);
        let mut widget = Widget::new(test_config(), fetcher.clone());

        widget.open().await;
        assert_eq!(widget.state().phase(), Phase::Ready);
        assert!(widget.state().products.as_ref().is_some_and(Vec::is_empty));

        widget.close();
        widget.open().await;
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_surfaces_first_graphql_message() {
        let fetcher = MockFetcher::graphql_error("Invalid token");
        let mut widget = Widget::new(test_config(), fetcher);

        widget.open().await;
        assert_eq!(widget.state().phase(), Phase::Error);
        assert_eq!(widget.state().error.as_deref(), Some("Invalid token"));
        assert!(!widget.state().is_fetched());
    }

    #[tokio::test]
    async fn test_reopen_after_error_shows_stale_error_without_refetch() {
        let fetcher = MockFetcher::graphql_error("Invalid token");
        let mut widget = Widget::new(test_config(), fetcher.clone());

        widget.open().await;
        widget.close();
        assert_eq!(widget.state().error.as_deref(), Some("Invalid token"));

        widget.open().await;
        assert_eq!(widget.state().phase(), Phase::Error);
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_retry_repeats_the_fetch() {
        let fetcher = MockFetcher::scripted(|call| {
            if call == 0 {
                Err(StorefrontError::Status(502))
            } else {
                Ok(vec![])
            }
        });
        let mut widget = Widget::new(test_config(), fetcher.clone());

        widget.open().await;
        assert_eq!(widget.state().phase(), Phase::Error);

        widget.retry().await;
        assert_eq!(widget.state().phase(), Phase::Ready);
        assert!(widget.state().error.is_none());
        assert_eq!(fetcher.call_count(), 2);
    }

    #[tokio::test]
    async fn test_retry_is_noop_outside_error_display() {
        let fetcher = MockFetcher::ok(vec![product("1", "Blue Mug")]);
        let mut widget = Widget::new(test_config(), fetcher.clone());

        // Closed, nothing fetched: retry must not fetch.
        widget.retry().await;
        assert_eq!(fetcher.call_count(), 0);

        widget.open().await;
        widget.retry().await;
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_controlled_mode_follows_external_flag() {
        let fetcher = MockFetcher::ok(vec![product("1", "Blue Mug")]);
        let mut widget = Widget::new(test_config(), fetcher.clone());

        widget.sync_open(true).await;
        assert_eq!(widget.state().phase(), Phase::Ready);
        widget.sync_open(false).await;
        assert_eq!(widget.state().phase(), Phase::Closed);
        widget.sync_open(true).await;
        assert_eq!(fetcher.call_count(), 1);
    }

    #[tokio::test]
    async fn test_operations_after_destroy_are_noops() {
        let fetcher = MockFetcher::ok(vec![product("1", "Blue Mug")]);
        let mut widget = Widget::new(test_config(), fetcher.clone());

        widget.destroy();
        widget.open().await;
        widget.toggle().await;
        widget.retry().await;

        assert!(widget.is_destroyed());
        assert_eq!(widget.state().phase(), Phase::Closed);
        assert_eq!(fetcher.call_count(), 0);
    }
}
