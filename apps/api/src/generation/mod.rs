// Post generation: prompt catalog, template repository, section generators,
// assembly, engagement heuristic and A/B variants.
// All LLM calls go through llm_client; nothing here builds HTTP requests.

pub mod assembler;
pub mod catalog;
pub mod engagement;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod sections;
pub mod templates;
pub mod variants;
