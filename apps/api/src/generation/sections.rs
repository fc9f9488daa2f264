//! Section generators: hook, story, insight and call-to-action.
//!
//! Each generator picks one phrase from the template, asks the completion
//! service to expand it, and falls back to the picked phrase when the call
//! fails. Generation therefore always succeeds; `SectionOutcome` records
//! whether the text was personalized or is the raw template phrase.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::generation::prompts::SECTION_TEMPERATURE;
use crate::llm_client::prompts::{with_context, WRITER_PERSONA};
use crate::llm_client::{CompletionRequest, CompletionService};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hook,
    Story,
    Insight,
    Cta,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Hook, Section::Story, Section::Insight, Section::Cta];

    /// Human-readable name used inside prompts.
    pub fn name(self) -> &'static str {
        match self {
            Section::Hook => "hook",
            Section::Story => "story",
            Section::Insight => "insight",
            Section::Cta => "call-to-action",
        }
    }

    /// Phrases used when a template has none for this section.
    pub fn default_phrases(self) -> [&'static str; 3] {
        match self {
            Section::Hook => [
                "What if I told you that {topic}?",
                "Here's something most people get wrong about {topic}:",
                "I've discovered a surprising truth about {topic}:",
            ],
            Section::Story => [
                "Share a personal experience related to {topic}",
                "Tell a story about a challenge you faced",
                "Describe a situation that taught you something valuable",
            ],
            Section::Insight => [
                "The key insight is: {insight}",
                "Here's what I learned: {insight}",
                "The most important takeaway: {insight}",
            ],
            Section::Cta => [
                "What are your thoughts on this?",
                "Share your experience in the comments below!",
                "Have you faced similar challenges? Let me know!",
            ],
        }
    }

    pub fn max_tokens(self) -> u32 {
        match self {
            Section::Hook | Section::Cta => 100,
            Section::Story | Section::Insight => 150,
        }
    }

    fn system_prompt(self, post_type: &str, tone: &str) -> String {
        let task = match self {
            Section::Hook => "Generate a compelling hook",
            Section::Story => "Generate a short, relatable story (2-3 sentences)",
            Section::Insight => "Generate a valuable insight",
            Section::Cta => "Generate an engaging call-to-action",
        };
        format!("{WRITER_PERSONA} {task} for a {post_type} post with a {tone} tone.")
    }

    fn user_prompt(self, phrase: &str, context: Option<&str>) -> String {
        let (lead, closing) = match self {
            Section::Hook => (
                format!("Generate a hook based on this template: \"{phrase}\"."),
                "Make it engaging and attention-grabbing.",
            ),
            Section::Story => (
                format!("Generate a story based on this prompt: \"{phrase}\"."),
                "Make it authentic and engaging.",
            ),
            Section::Insight => (
                format!("Generate an insight based on this format: \"{phrase}\"."),
                "Make it actionable and valuable.",
            ),
            Section::Cta => (
                format!("Generate a CTA based on this template: \"{phrase}\"."),
                "Make it encourage engagement.",
            ),
        };
        format!("{} {closing}", with_context(&lead, context))
    }
}

/// Result of a generation step that may degrade to template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// Text produced by the completion service.
    Personalized(String),
    /// The completion call failed; this is the un-personalized input text.
    Fallback(String),
}

impl SectionOutcome {
    pub fn text(&self) -> &str {
        match self {
            SectionOutcome::Personalized(text) | SectionOutcome::Fallback(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            SectionOutcome::Personalized(text) | SectionOutcome::Fallback(text) => text,
        }
    }

    pub fn is_personalized(&self) -> bool {
        matches!(self, SectionOutcome::Personalized(_))
    }
}

/// Picks one phrase uniformly at random, using the section defaults when
/// `phrases` is empty.
pub fn pick_phrase<R: Rng + ?Sized>(section: Section, phrases: &[String], rng: &mut R) -> String {
    match phrases.choose(rng) {
        Some(phrase) => phrase.clone(),
        None => section
            .default_phrases()
            .choose(rng)
            .map(|p| p.to_string())
            .unwrap_or_default(),
    }
}

/// Sends `request` and trims the reply; on any failure returns `fallback` verbatim.
pub async fn complete_or_fallback(
    llm: &dyn CompletionService,
    request: CompletionRequest,
    fallback: String,
    label: &str,
) -> SectionOutcome {
    match llm.complete(&request).await {
        Ok(text) if !text.trim().is_empty() => SectionOutcome::Personalized(text.trim().to_string()),
        Ok(_) => {
            warn!("{label}: completion was blank, using template text");
            SectionOutcome::Fallback(fallback)
        }
        Err(e) => {
            warn!("{label}: completion failed ({e}), using template text");
            SectionOutcome::Fallback(fallback)
        }
    }
}

/// Expands a picked phrase into a finished section.
pub async fn expand_section(
    llm: &dyn CompletionService,
    section: Section,
    phrase: String,
    post_type: &str,
    tone: &str,
    context: Option<&str>,
) -> SectionOutcome {
    let request = CompletionRequest::chat(
        section.system_prompt(post_type, tone),
        section.user_prompt(&phrase, context),
        SECTION_TEMPERATURE,
        section.max_tokens(),
    );
    complete_or_fallback(llm, request, phrase, section.name()).await
}
