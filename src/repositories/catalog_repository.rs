use std::path::Path;

use crate::error::CatalogError;
use crate::models::catalog_models::Catalog;
use crate::utils::catalog_filter::sorted_levels;

const EMBEDDED_CATALOG: &str = include_str!("../../data/courses.json");

/// Read-only training catalog, loaded once at startup.
pub struct CatalogRepository {
    catalog: Catalog,
    levels: Vec<String>, // filter options, computed once from the full catalog
}

impl CatalogRepository {
    pub fn new(catalog: Catalog) -> Self {
        let levels = sorted_levels(&catalog);
        Self { catalog, levels }
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(Self::new(catalog))
    }

    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let repository = match path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json(&json)?
            }
            None => Self::embedded()?,
        };
        tracing::info!(
            "Loaded catalog with {} certifications and {} levels",
            repository.catalog.certifications.len(),
            repository.levels.len()
        );
        Ok(repository)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }
}
