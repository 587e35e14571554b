pub mod form_context;

pub use form_context::{try_use_form, use_form, FormContextError, FormProvider, FormState};
