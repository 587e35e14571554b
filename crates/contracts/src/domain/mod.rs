pub mod a001_llm_model;
