// Shared prompt fragments and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting pieces.

/// Persona opening every section-level system prompt.
pub const WRITER_PERSONA: &str = "You are an expert LinkedIn content writer.";

/// Appends the optional user-supplied context to a prompt line.
/// Blank context is ignored.
pub fn with_context(prompt: &str, context: Option<&str>) -> String {
    match context.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => format!("{prompt} Context: {c}"),
        None => prompt.to_string(),
    }
}
