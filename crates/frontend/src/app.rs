use crate::usecases::u001_generation_form::GenerationFormPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <GenerationFormPage />
    }
}
