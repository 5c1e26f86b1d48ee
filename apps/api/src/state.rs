use std::sync::Arc;

use crate::analysis::extraction::ResumeTextExtractor;
use crate::analysis::prompts::PromptBuilder;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds only immutable collaborators; nothing is shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Résumé bytes → text. Default: PdfTextExtractor.
    pub extractor: Arc<dyn ResumeTextExtractor>,
    pub prompt_builder: Arc<dyn PromptBuilder>,
    /// Gemini in production, stubbed in handler tests.
    pub generator: Arc<dyn TextGenerator>,
}
