//! Fetch command: resolve the configured products and print them.

use std::io::Write;

use shopin_widget::StorefrontClient;

use super::ShopArgs;

/// Fetch products and print one line per resolved product (or raw JSON).
pub async fn run(shop: ShopArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = shop.into_config()?;
    let client = StorefrontClient::new(&config);

    tracing::info!(
        "Fetching {} products from {}",
        config.product_ids.len(),
        config.shop_domain
    );

    let products = client.fetch_products(&config.product_ids).await?;

    let mut out = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &products)?;
        writeln!(out)?;
    } else {
        for product in &products {
            writeln!(
                out,
                "{}\t{}\t{}\t{}",
                product.id,
                product.title,
                product.price.display(),
                config.product_url(&product.handle)
            )?;
        }
        tracing::info!(
            "{} of {} ids resolved",
            products.len(),
            config.product_ids.len()
        );
    }

    Ok(())
}
