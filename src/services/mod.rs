pub mod chatbot;
pub mod gemini;
pub mod knowledge_base;
pub mod provider;
