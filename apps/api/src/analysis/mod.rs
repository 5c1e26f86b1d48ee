// Résumé analysis: multipart intake, PDF text extraction, prompt assembly.
// The model call itself goes through llm_client.

pub mod extraction;
pub mod handlers;
pub mod prompts;
