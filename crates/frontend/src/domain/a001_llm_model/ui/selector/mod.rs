//! LLM Model Selector UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: model source trait, HTTP source and fetch errors
//! - view_model.rs: ModelSelectorVm with the fetch state machine
//! - view.rs: Main component ModelSelector

pub mod model;
mod view;
pub mod view_model;

pub use model::{FetchError, HttpModelSource, ModelSource};
pub use view::ModelSelector;
pub use view_model::{describe_selected, FetchStatus, ModelSelectorVm};
