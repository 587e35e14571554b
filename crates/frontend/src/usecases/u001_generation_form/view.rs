use super::parameters::ParameterField;
use crate::domain::a001_llm_model::ui::ModelSelector;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::state::{use_form, FormProvider, FormState};
use leptos::prelude::*;
use thaw::{Card, Flex, FlexGap};

/// Page entry: establishes the form state scope
#[component]
#[allow(non_snake_case)]
pub fn GenerationFormPage() -> impl IntoView {
    view! {
        <FormProvider>
            <GenerationForm />
        </FormProvider>
    }
}

/// Model selection, prompt and parameters bound to the enclosing form state
#[component]
#[allow(non_snake_case)]
pub fn GenerationForm() -> impl IntoView {
    let form = use_form();
    let on_prompt = Callback::new(move |text: String| form.set_prompt(text));

    view! {
        <div class="details-form" style="padding: 20px; max-width: 720px;">
            <h2 style="font-size: 20px; font-weight: bold; margin-bottom: 20px;">
                "Generation"
            </h2>
            <Flex vertical=true gap=FlexGap::Large>
                <ModelSelector form=form />
                <Card>
                    <Textarea
                        label="Prompt"
                        id="prompt"
                        value=form.prompt()
                        on_input=on_prompt
                        placeholder="Describe what you want to generate..."
                        rows=6
                    />
                </Card>
                <ParametersPanel form=form />
            </Flex>
        </div>
    }
}

/// Numeric inputs for the generation parameters
///
/// Each input updates only its own field.
#[component]
#[allow(non_snake_case)]
pub fn ParametersPanel(form: FormState) -> impl IntoView {
    let params = form.parameters();

    let fields = ParameterField::ALL
        .into_iter()
        .map(|field| {
            // Memo: a keystroke that parses to the same number ("1." after "1")
            // must not rewrite the text being typed
            let value = Memo::new(move |_| params.with(|p| field.read(p)));
            let on_input = Callback::new(move |raw: String| match field.parse(&raw) {
                Some(parsed) => form.update_parameters(|p| field.assign(p, parsed)),
                None => log::debug!("ignored non-numeric {}: {:?}", field.label(), raw),
            });
            view! {
                <Input
                    label=field.label()
                    id=field.id()
                    input_type="number"
                    step=field.step()
                    value=value
                    on_input=on_input
                />
            }
        })
        .collect_view();

    view! {
        <Card>
            <div class="parameters-panel">
                {fields}
            </div>
        </Card>
    }
}
