//! Shopin Widget - embeddable featured-products pop-up.
//!
//! A host page configures the widget with a shop domain, a Storefront API
//! public access token, and a list of product ids. The widget shows a
//! floating toggle button; opening the panel fetches the configured products
//! from the Storefront API exactly once and renders them as a grid of links
//! into the shop's product pages.
//!
//! # Architecture
//!
//! - [`config`] - config resolution from explicit values or embed-tag
//!   `data-*` attributes (missing required values skip initialization
//!   silently)
//! - [`storefront`] - the Storefront API product fetcher
//! - [`controller`] - the open/loading/error/ready state machine
//! - [`views`] - askama-rendered toggle button, panel, and product grid
//! - [`mount`] - container resolution and the imperative widget handle
//!
//! # Example
//!
//! ```rust,ignore
//! use shopin_widget::WidgetConfig;
//!
//! let config = WidgetConfig::builder("demo.myshopify.com", "shpat_token")
//!     .product_ids(["8359425179890", "8359425212658"])
//!     .build()?;
//!
//! let mut widget = shopin_widget::mount(config);
//! let html = widget.open().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod mount;
pub mod storefront;
pub mod views;

pub use config::{ConfigError, EmbedAttrs, WidgetConfig, WidgetConfigBuilder};
pub use controller::{FetchProducts, Phase, Widget, WidgetState};
pub use mount::{DEFAULT_CONTAINER_ID, WidgetHandle, mount, mount_from_host_html, mount_with_fetcher};
pub use storefront::{Money, Product, StorefrontClient, StorefrontError};
