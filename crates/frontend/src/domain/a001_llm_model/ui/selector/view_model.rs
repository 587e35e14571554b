//! LLM Model Selector - ViewModel
//!
//! Fetch state machine of the selector: `Idle -> Loading -> {Ready, Error}`,
//! once per mount.

use super::model::{FetchError, ModelSource};
use crate::shared::state::FormState;
use contracts::domain::a001_llm_model::aggregate::Model;
use leptos::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lifecycle of the model list request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Ready(Vec<Model>),
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// Loaded models, empty unless `Ready`
    pub fn models(&self) -> &[Model] {
        match self {
            FetchStatus::Ready(models) => models,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Description of the selected model, `None` if nothing matches
pub fn describe_selected(models: &[Model], selected: &str) -> Option<String> {
    if selected.is_empty() {
        return None;
    }
    Model::find_by_id(models, selected).map(|m| m.description.clone())
}

/// ViewModel for the model selector
#[derive(Debug, Clone)]
pub struct ModelSelectorVm {
    pub form: FormState,
    status: RwSignal<FetchStatus>,
    mounted: Arc<AtomicBool>,
}

impl ModelSelectorVm {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            status: RwSignal::new(FetchStatus::Idle),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn status(&self) -> Signal<FetchStatus> {
        self.status.read_only().into()
    }

    pub fn status_untracked(&self) -> FetchStatus {
        self.status.get_untracked()
    }

    pub fn is_loading_untracked(&self) -> bool {
        self.status.with_untracked(FetchStatus::is_loading)
    }

    pub fn models_untracked(&self) -> Vec<Model> {
        self.status.with_untracked(|s| s.models().to_vec())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Mark the owning component as unmounted; pending results are dropped
    pub fn release(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    /// Enter `Loading`. Returns false if a load was already started.
    pub fn begin_load(&self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let idle = self.status.with_untracked(|s| *s == FetchStatus::Idle);
        if idle {
            self.status.set(FetchStatus::Loading);
        }
        idle
    }

    /// Apply the outcome of the request in one step
    ///
    /// Returns false when the outcome was dropped (unmounted or not loading).
    pub fn settle(&self, result: Result<Vec<Model>, FetchError>) -> bool {
        if !self.is_mounted() {
            log::debug!("model list settled after unmount, result dropped");
            return false;
        }
        if !self.status.with_untracked(FetchStatus::is_loading) {
            log::warn!("model list settled while not loading, result dropped");
            return false;
        }

        match result {
            Ok(models) => {
                log::debug!("loaded {} models", models.len());
                if let Some(first) = models.first() {
                    self.form.set_selected_model(first.id.clone());
                }
                self.status.set(FetchStatus::Ready(models));
            }
            Err(e) => {
                log::error!("failed to load models: {}", e);
                self.status.set(FetchStatus::Error(e.user_message()));
            }
        }
        true
    }

    /// Await the request started by [`Self::begin_load`] and apply the outcome
    ///
    /// Does nothing unless the status is `Loading`.
    pub async fn finish_load<S: ModelSource>(&self, source: &S) {
        if !self.status.with_untracked(FetchStatus::is_loading) {
            return;
        }
        let result = source.list_models().await;
        self.settle(result);
    }

    /// Request the model list once and apply the outcome
    pub async fn load<S: ModelSource>(&self, source: &S) {
        if !self.begin_load() {
            return;
        }
        self.finish_load(source).await;
    }

    /// User picked a model
    pub fn select(&self, model_id: String) {
        self.form.set_selected_model(model_id);
    }

    /// Description of the selected model, tracked
    pub fn selected_description(&self) -> Option<String> {
        let selected = self.form.selected_model().get();
        self.status.with(|s| describe_selected(s.models(), &selected))
    }

    pub fn selected_description_untracked(&self) -> Option<String> {
        let selected = self.form.selected_model_untracked();
        self.status
            .with_untracked(|s| describe_selected(s.models(), &selected))
    }
}
