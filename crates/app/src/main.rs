use stockroom_app::report::{render_json, render_text};
use stockroom_app::{AppConfig, OutputFormat};
use stockroom_inventory::{Inventory, SearchQuery, seed::seed_demo};

fn main() -> anyhow::Result<()> {
    let (config, problems) = AppConfig::from_env();
    stockroom_observability::init(config.log_format);
    for problem in &problems {
        tracing::warn!(error = %problem, "using default");
    }
    tracing::info!(?config, "starting");

    let inventory = Inventory::new();
    if config.seed_demo {
        seed_demo(&inventory)?;
    }

    let query = SearchQuery::parse(&config.search);
    let parts = inventory.search_parts(&query);
    let products = inventory.search_products(&query);
    tracing::info!(?query, parts = parts.len(), products = products.len(), "listing catalog");

    match config.output {
        OutputFormat::Text => print!("{}", render_text(&parts, &products)),
        OutputFormat::Json => println!("{}", render_json(&parts, &products)?),
    }

    Ok(())
}
