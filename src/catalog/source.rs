use serde::Deserialize;
use std::path::PathBuf;

use crate::{
    error::{AppError, AppResult},
    models::{Title, TitleId},
};

use super::{builtin, Catalog, CategoryIndex};

/// Where the catalog comes from
///
/// Sources are consulted once at start-up; the resulting [`Catalog`] is
/// immutable afterwards.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the full catalog
    async fn load(&self) -> AppResult<Catalog>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// The compiled-in sample catalog
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalog;

#[async_trait::async_trait]
impl CatalogSource for BuiltinCatalog {
    async fn load(&self) -> AppResult<Catalog> {
        Catalog::new(builtin::titles(), builtin::category_index(), builtin::trending())
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}

/// On-disk catalog document
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    titles: Vec<Title>,
    #[serde(default)]
    index: CategoryIndex,
    #[serde(default)]
    trending: Vec<TitleId>,
}

/// Catalog read from a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> AppResult<Catalog> {
        tracing::debug!(path = %self.path.display(), "Reading catalog file");

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let document: CatalogDocument = serde_json::from_str(&raw).map_err(|e| {
            AppError::Catalog(format!("{}: {}", self.path.display(), e))
        })?;

        Catalog::new(document.titles, document.index, document.trending)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

/// Loads a catalog from a source, logging its size
pub async fn load_catalog(source: &dyn CatalogSource) -> AppResult<Catalog> {
    let catalog = source.load().await?;

    tracing::info!(
        source = source.name(),
        titles = catalog.len(),
        trending = catalog.trending_ids().len(),
        "Catalog loaded"
    );

    Ok(catalog)
}
