use anyhow::Context;
use tracing_subscriber::EnvFilter;

use watchwith_api::{
    api::{create_router, AppState},
    catalog::{source::load_catalog, BuiltinCatalog, CatalogSource, JsonFileCatalog},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    // Load the catalog once; it is read-only from here on
    let source: Box<dyn CatalogSource> = match &config.catalog_path {
        Some(path) => Box::new(JsonFileCatalog::new(path)),
        None => Box::new(BuiltinCatalog),
    };
    let catalog = load_catalog(source.as_ref())
        .await
        .with_context(|| format!("Failed to load {} catalog", source.name()))?;

    let state = AppState::new(catalog, &config);
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
