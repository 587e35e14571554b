use contracts::domain::a001_llm_model::aggregate::Model;
use once_cell::sync::OnceCell;
use std::collections::HashSet;

static CATALOG: OnceCell<ModelCatalog> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("model catalog is not initialized")]
    NotInitialized,
    #[error("model catalog is already initialized")]
    AlreadyInitialized,
    #[error("duplicate model id in catalog: {0}")]
    DuplicateId(String),
}

/// Validated, immutable list of selectable models
#[derive(Debug, Clone, Default)]
pub struct ModelCatalog {
    models: Vec<Model>,
}

impl ModelCatalog {
    /// Build a catalog, rejecting duplicate ids. Order is preserved.
    pub fn new(models: Vec<Model>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for model in &models {
            if !seen.insert(model.id.as_str()) {
                return Err(CatalogError::DuplicateId(model.id.clone()));
            }
            if model.id.is_empty() || model.name.is_empty() {
                tracing::warn!("Catalog entry with empty id or name: {:?}", model);
            }
        }
        Ok(Self { models })
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Install the process-wide catalog. Called once at startup.
pub fn initialize(models: Vec<Model>) -> Result<(), CatalogError> {
    let catalog = ModelCatalog::new(models)?;
    let count = catalog.len();
    CATALOG
        .set(catalog)
        .map_err(|_| CatalogError::AlreadyInitialized)?;
    tracing::info!("Model catalog initialized with {} models", count);
    Ok(())
}

fn catalog() -> Result<&'static ModelCatalog, CatalogError> {
    CATALOG.get().ok_or(CatalogError::NotInitialized)
}

pub async fn list_all() -> Result<Vec<Model>, CatalogError> {
    Ok(catalog()?.models().to_vec())
}
