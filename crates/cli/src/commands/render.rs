//! Render command: write the widget HTML to stdout or a file.

use std::io::Write;
use std::path::PathBuf;

use shopin_widget::mount;

use super::ShopArgs;

/// Render the widget container (or just the panel fragment).
///
/// With `--open` the panel is opened first, which fetches the configured
/// products from the Storefront API; a fetch failure renders the widget's
/// own error panel rather than failing the command.
pub async fn run(
    shop: ShopArgs,
    open: bool,
    panel_only: bool,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = shop.into_config()?;
    let mut handle = mount(config);

    if open {
        handle.open().await?;
    }

    let html = if panel_only {
        handle.render_panel()?
    } else {
        handle.render()?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, html)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => {
            writeln!(std::io::stdout().lock(), "{html}")?;
        }
    }

    Ok(())
}
