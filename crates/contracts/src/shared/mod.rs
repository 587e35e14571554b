pub mod generation_parameters;
