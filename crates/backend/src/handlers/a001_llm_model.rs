use axum::Json;
use contracts::domain::a001_llm_model::aggregate::Model;

use crate::domain::a001_llm_model;

/// GET /api/models
pub async fn list_all() -> Result<Json<Vec<Model>>, axum::http::StatusCode> {
    match a001_llm_model::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list models: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_llm_model::service::{self, CatalogError};

    #[tokio::test]
    async fn test_list_all_returns_catalog() {
        let catalog = vec![
            Model::new("m1", "Alpha", "fast"),
            Model::new("m2", "Beta", "accurate"),
        ];
        match service::initialize(catalog.clone()) {
            Ok(()) | Err(CatalogError::AlreadyInitialized) => {}
            Err(e) => panic!("unexpected error: {e}"),
        }

        let Json(models) = list_all().await.unwrap();
        assert_eq!(models, catalog);

        let body = serde_json::to_value(&models).unwrap();
        assert_eq!(body[0]["id"], "m1");
        assert_eq!(body[1]["description"], "accurate");
    }
}
