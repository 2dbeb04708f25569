//! Snippet command: print the embed `<script>` tag for a configuration.

use std::io::Write;

use super::ShopArgs;

/// Print the copy-paste embed snippet.
pub fn run(shop: ShopArgs, script_src: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = shop.into_config()?;
    writeln!(
        std::io::stdout().lock(),
        "{}",
        config.embed_snippet(script_src)
    )?;
    Ok(())
}
