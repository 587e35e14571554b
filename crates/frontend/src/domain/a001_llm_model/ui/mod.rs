pub mod selector;

pub use selector::ModelSelector;
