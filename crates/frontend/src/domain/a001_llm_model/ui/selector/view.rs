//! LLM Model Selector - View Component

use super::model::HttpModelSource;
use super::view_model::{FetchStatus, ModelSelectorVm};
use crate::shared::components::ui::Select;
use crate::shared::state::FormState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Dropdown of the models offered by the backend
///
/// Loads the list once when mounted and defaults the form selection to the
/// first model. The list is not refreshed afterwards.
#[component]
#[allow(non_snake_case)]
pub fn ModelSelector(form: FormState) -> impl IntoView {
    let vm = ModelSelectorVm::new(form);

    let vm_cleanup = vm.clone();
    on_cleanup(move || vm_cleanup.release());

    // Loading from the first render, the task only awaits and settles
    if vm.begin_load() {
        let vm_load = vm.clone();
        spawn_local(async move {
            vm_load.finish_load(&HttpModelSource::from_api()).await;
        });
    }

    let status = vm.status();
    let options = Signal::derive(move || {
        status.with(|s| {
            s.models()
                .iter()
                .map(|m| (m.id.clone(), m.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let vm_description = vm.clone();
    let description = Signal::derive(move || vm_description.selected_description());
    let vm_change = vm.clone();
    let on_change = Callback::new(move |model_id: String| vm_change.select(model_id));

    view! {
        {move || match status.get() {
            FetchStatus::Idle | FetchStatus::Loading => view! {
                <Card>
                    <div class="model-selector model-selector--loading" aria-busy="true">
                        <Spinner />
                    </div>
                </Card>
            }
            .into_any(),
            FetchStatus::Error(message) => view! {
                <Card>
                    <div class="model-selector model-selector--error" role="alert">
                        <span style="color: var(--color-error);">{format!("Error: {}", message)}</span>
                    </div>
                </Card>
            }
            .into_any(),
            FetchStatus::Ready(_) => view! {
                <Card>
                    <div class="model-selector">
                        <Select
                            label="Select Model"
                            id="model-select"
                            aria_label="Select AI model"
                            value=form.selected_model()
                            options=options
                            on_change=on_change
                        />
                        {move || {
                            description
                                .get()
                                .map(|text| view! { <p class="model-selector__description">{text}</p> })
                        }}
                    </div>
                </Card>
            }
            .into_any(),
        }}
    }
}
