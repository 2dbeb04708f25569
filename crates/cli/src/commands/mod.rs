//! CLI command implementations.

pub mod fetch;
pub mod render;
pub mod snippet;

use clap::Args;
use shopin_core::{Position, Theme};
use shopin_widget::{ConfigError, WidgetConfig};

/// Widget configuration flags shared by every command.
#[derive(Debug, Args)]
pub struct ShopArgs {
    /// Shop domain, e.g. your-store.myshopify.com
    #[arg(long)]
    pub shop_domain: String,

    /// Storefront API public access token
    #[arg(long)]
    pub token: String,

    /// Comma-separated product ids, in display order
    #[arg(long)]
    pub product_ids: String,

    /// Widget corner: bottom-right, bottom-left, top-right, top-left
    #[arg(long)]
    pub position: Option<String>,

    /// Widget theme: light or dark
    #[arg(long)]
    pub theme: Option<String>,

    /// Host-page container element id
    #[arg(long)]
    pub container_id: Option<String>,

    /// Storefront API version
    #[arg(long)]
    pub api_version: Option<String>,
}

/// Errors turning CLI flags into a widget configuration.
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("unknown position: {0} (expected bottom-right, bottom-left, top-right, top-left)")]
    UnknownPosition(String),
    #[error("unknown theme: {0} (expected light or dark)")]
    UnknownTheme(String),
}

impl ShopArgs {
    /// Build the widget configuration, reporting bad flags explicitly.
    ///
    /// Unlike embed-tag resolution the CLI is integrator-facing, so unknown
    /// values are errors rather than silent fallbacks.
    pub fn into_config(self) -> Result<WidgetConfig, ArgsError> {
        let mut builder = WidgetConfig::builder(self.shop_domain, self.token).product_ids(
            self.product_ids
                .split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty()),
        );

        if let Some(raw) = self.position {
            let position =
                Position::from_attr(&raw).ok_or_else(|| ArgsError::UnknownPosition(raw))?;
            builder = builder.position(position);
        }
        if let Some(raw) = self.theme {
            let theme = Theme::from_attr(&raw).ok_or_else(|| ArgsError::UnknownTheme(raw))?;
            builder = builder.theme(theme);
        }
        if let Some(container_id) = self.container_id {
            builder = builder.container_id(container_id);
        }
        if let Some(api_version) = self.api_version {
            builder = builder.api_version(api_version);
        }

        Ok(builder.build()?)
    }
}
