pub mod llm;
pub mod observability;
