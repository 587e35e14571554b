//! Generation form: model selection, prompt and generation parameters
//! sharing one `FormState`.

pub mod parameters;
mod view;

pub use parameters::{ParameterField, ParameterValue};
pub use view::{GenerationForm, GenerationFormPage, ParametersPanel};
