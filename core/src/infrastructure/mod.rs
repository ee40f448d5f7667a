pub mod export;
pub mod llm;
pub mod session;
