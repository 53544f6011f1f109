pub mod llm;
pub mod pdf;
