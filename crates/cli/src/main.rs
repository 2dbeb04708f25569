//! Shopin CLI - integrator tools for the product pop-up widget.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the products a widget config resolves to
//! shopin fetch --shop-domain your-store.myshopify.com --token TOKEN --product-ids 1,2,3
//!
//! # Render the widget HTML (opened, so products are fetched)
//! shopin render --shop-domain your-store.myshopify.com --token TOKEN --product-ids 1,2,3 --open
//!
//! # Print the embed snippet for a host page
//! shopin snippet --shop-domain your-store.myshopify.com --token TOKEN --product-ids 1,2,3
//! ```
//!
//! # Commands
//!
//! - `fetch` - Resolve product ids through the Storefront API and print them
//! - `render` - Render the widget (or just its panel) to stdout or a file
//! - `snippet` - Print the embed `<script>` tag for a configuration

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::ShopArgs;

#[derive(Parser)]
#[command(name = "shopin")]
#[command(author, version, about = "Shopin widget CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the configured products from the Storefront API
    Fetch {
        #[command(flatten)]
        shop: ShopArgs,

        /// Print raw JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },
    /// Render the widget HTML
    Render {
        #[command(flatten)]
        shop: ShopArgs,

        /// Open the panel first (fetches products from the Storefront API)
        #[arg(long)]
        open: bool,

        /// Render only the panel fragment instead of the full container
        #[arg(long)]
        panel_only: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Print the embed snippet for a host page
    Snippet {
        #[command(flatten)]
        shop: ShopArgs,

        /// URL the embed loader script is served from
        #[arg(
            long,
            default_value = "https://widgets.shopin.app/static/embed.js"
        )]
        script_src: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Fetch { shop, json } => commands::fetch::run(shop, json).await?,
        Commands::Render {
            shop,
            open,
            panel_only,
            output,
        } => commands::render::run(shop, open, panel_only, output).await?,
        Commands::Snippet { shop, script_src } => commands::snippet::run(shop, &script_src)?,
    }
    Ok(())
}
