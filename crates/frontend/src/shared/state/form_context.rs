//! Shared generation form state
//!
//! One `FormState` holds the prompt, the selected model id and the generation
//! parameters for a form subtree. Components that can take it as a prop do so;
//! the page boundary resolves it from context with [`use_form`].

use contracts::shared::generation_parameters::GenerationParameters;
use leptos::prelude::*;

/// Error raised when the form state is read outside of a [`FormProvider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormContextError {
    #[error("use_form must be used within a FormProvider")]
    MissingProvider,
}

/// Reactive holder for the generation form
///
/// Signals stay private: every mutation goes through a setter.
#[derive(Debug, Clone, Copy)]
pub struct FormState {
    prompt: RwSignal<String>,
    selected_model: RwSignal<String>,
    parameters: RwSignal<GenerationParameters>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(String::new()),
            selected_model: RwSignal::new(String::new()),
            parameters: RwSignal::new(GenerationParameters::default()),
        }
    }

    pub fn prompt(&self) -> Signal<String> {
        self.prompt.read_only().into()
    }

    pub fn set_prompt(&self, prompt: String) {
        self.prompt.set(prompt);
    }

    /// Currently selected model id, empty until something is selected
    pub fn selected_model(&self) -> Signal<String> {
        self.selected_model.read_only().into()
    }

    /// Replace the selection. The id is not checked against the loaded models.
    pub fn set_selected_model(&self, model_id: String) {
        self.selected_model.set(model_id);
    }

    pub fn parameters(&self) -> Signal<GenerationParameters> {
        self.parameters.read_only().into()
    }

    /// Replace the whole parameter bundle
    pub fn set_parameters(&self, parameters: GenerationParameters) {
        self.parameters.set(parameters);
    }

    /// Derive the next parameters from the current ones
    ///
    /// Use this to change a single field without overwriting the others.
    pub fn update_parameters(&self, f: impl FnOnce(&mut GenerationParameters)) {
        self.parameters.update(f);
    }

    pub fn prompt_untracked(&self) -> String {
        self.prompt.get_untracked()
    }

    pub fn selected_model_untracked(&self) -> String {
        self.selected_model.get_untracked()
    }

    pub fn parameters_untracked(&self) -> GenerationParameters {
        self.parameters.get_untracked()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Form state provider component
///
/// Creates one [`FormState`] that lives as long as this component's owner.
#[component]
pub fn FormProvider(children: Children) -> impl IntoView {
    provide_context(FormState::new());

    children()
}

/// Resolve the form state provided by an enclosing [`FormProvider`]
pub fn try_use_form() -> Result<FormState, FormContextError> {
    use_context::<FormState>().ok_or(FormContextError::MissingProvider)
}

/// Hook to access the form state
///
/// Panics outside of a [`FormProvider`]: that is a wiring mistake and the
/// consuming component must not initialise.
pub fn use_form() -> FormState {
    match try_use_form() {
        Ok(form) => form,
        Err(e) => panic!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        Owner::new().with(|| {
            let form = FormState::new();
            assert_eq!(form.prompt_untracked(), "");
            assert_eq!(form.selected_model_untracked(), "");
            assert_eq!(form.parameters_untracked(), GenerationParameters::default());
        });
    }

    #[test]
    fn test_setters_replace_values() {
        Owner::new().with(|| {
            let form = FormState::new();
            form.set_prompt("Write a haiku".to_string());
            form.set_selected_model("unknown-model".to_string());
            assert_eq!(form.prompt().get_untracked(), "Write a haiku");
            assert_eq!(form.selected_model().get_untracked(), "unknown-model");

            form.set_selected_model(String::new());
            assert_eq!(form.selected_model_untracked(), "");
        });
    }

    #[test]
    fn test_set_parameters_replaces_bundle() {
        Owner::new().with(|| {
            let form = FormState::new();
            let custom = GenerationParameters {
                temperature: 3.5,
                max_tokens: -1,
                top_p: 0.2,
                frequency_penalty: 1.0,
                presence_penalty: -2.0,
            };
            form.set_parameters(custom);
            assert_eq!(form.parameters_untracked(), custom);
        });
    }

    #[test]
    fn test_update_parameters_keeps_other_fields() {
        Owner::new().with(|| {
            let form = FormState::new();
            form.update_parameters(|p| p.temperature = 1.2);
            form.update_parameters(|p| p.max_tokens = 256);

            let p = form.parameters_untracked();
            assert_eq!(p.temperature, 1.2);
            assert_eq!(p.max_tokens, 256);
            assert_eq!(p.top_p, 1.0);
            assert_eq!(p.presence_penalty, 0.0);
        });
    }

    #[test]
    fn test_context_shares_one_instance() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(FormState::new());
            let first = try_use_form().unwrap();
            first.set_prompt("shared".to_string());

            let child = Owner::current().unwrap().child();
            child.with(|| {
                let second = try_use_form().unwrap();
                assert_eq!(second.prompt_untracked(), "shared");
            });
        });
    }

    #[test]
    fn test_missing_provider() {
        Owner::new().with(|| {
            assert_eq!(try_use_form().unwrap_err(), FormContextError::MissingProvider);
        });
    }

    #[test]
    #[should_panic(expected = "within a FormProvider")]
    fn test_use_form_panics_outside_provider() {
        Owner::new().with(|| {
            let _ = use_form();
        });
    }
}
