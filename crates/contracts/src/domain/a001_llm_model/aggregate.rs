use serde::{Deserialize, Serialize};

/// Selectable LLM model as returned by `GET /api/models`
///
/// Every field falls back to an empty string when the backend omits it,
/// so one incomplete entry never fails the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Model {
    /// Unique identifier, used as the selection value
    #[serde(default)]
    pub id: String,

    /// Display name shown in the dropdown
    #[serde(default)]
    pub name: String,

    /// Short description shown under the dropdown
    #[serde(default)]
    pub description: String,
}

impl Model {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Find a model by its identifier
    pub fn find_by_id<'a>(models: &'a [Model], id: &str) -> Option<&'a Model> {
        models.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list() {
        let json = r#"[
            {"id":"m1","name":"Alpha","description":"fast"},
            {"id":"m2","name":"Beta","description":"accurate"}
        ]"#;
        let models: Vec<Model> = serde_json::from_str(json).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0], Model::new("m1", "Alpha", "fast"));
        assert_eq!(models[1].description, "accurate");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let json = r#"[{"id":"m1"},{"name":"NoId","extra":42}]"#;
        let models: Vec<Model> = serde_json::from_str(json).unwrap();
        assert_eq!(models[0].name, "");
        assert_eq!(models[0].description, "");
        assert_eq!(models[1].id, "");
        assert_eq!(models[1].name, "NoId");
    }

    #[test]
    fn test_find_by_id() {
        let models = vec![
            Model::new("m1", "Alpha", "fast"),
            Model::new("m2", "Beta", "accurate"),
        ];
        assert_eq!(
            Model::find_by_id(&models, "m2").map(|m| m.name.as_str()),
            Some("Beta")
        );
        assert!(Model::find_by_id(&models, "m3").is_none());
        assert!(Model::find_by_id(&[], "m1").is_none());
    }
}
