// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file only holds the pieces reused across them.

/// Instruction that pins the reply to a single JSON document.
/// Gemini has no separate system slot in the plain `generateContent` call we make,
/// so this is appended to the user prompt instead.
pub const JSON_ONLY_INSTRUCTION: &str = "Respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
