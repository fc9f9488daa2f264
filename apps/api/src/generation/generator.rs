//! Post generation pipelines.
//!
//! Two entry points:
//! - `generate_post`: one completion call with the full expert-writer prompt.
//! - `generate_content`: template lookup, then four section generators run
//!   concurrently, then assembly and the engagement score.
//!
//! Collaborators are injected at construction; nothing here is global.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::db::Store;
use crate::errors::AppError;
use crate::generation::assembler::PostSections;
use crate::generation::catalog::Selection;
use crate::generation::engagement::predict_engagement;
use crate::generation::prompts::{
    POST_MAX_TOKENS, POST_SYSTEM_TEMPLATE, POST_TEMPERATURE, POST_USER_TEMPLATE,
};
use crate::generation::sections::{expand_section, pick_phrase, Section};
use crate::generation::templates::fetch_best_template;
use crate::generation::variants::{generate_variants, Variant};
use crate::llm_client::{CompletionRequest, CompletionService};

/// Hashtags attached to a pipeline-generated post.
const HASHTAG_LIMIT: i64 = 5;

/// Output of the section pipeline.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    #[serde(flatten)]
    pub sections: PostSections,
    pub full_content: String,
    pub predicted_engagement: f64,
    /// Sections that fell back to raw template text.
    pub fallback_sections: Vec<Section>,
}

#[derive(Clone)]
pub struct ContentGenerator {
    store: Arc<dyn Store>,
    llm: Arc<dyn CompletionService>,
}

impl ContentGenerator {
    pub fn new(store: Arc<dyn Store>, llm: Arc<dyn CompletionService>) -> Self {
        Self { store, llm }
    }

    /// Single-shot post for a validated selection. Any upstream failure,
    /// including an empty reply, is an error.
    pub async fn generate_post(
        &self,
        selection: Selection,
        context: Option<&str>,
    ) -> Result<String, AppError> {
        let request = build_post_request(selection, context);
        let post = self
            .llm
            .complete(&request)
            .await
            .map_err(|e| AppError::Llm(format!("Post generation failed: {e}")))?;

        info!(
            "Generated {} post for {} ({} chars)",
            selection.post_type,
            selection.niche,
            post.trim().chars().count()
        );
        Ok(post.trim().to_string())
    }

    /// Template-driven pipeline. Section failures degrade to template text;
    /// only store failures are errors.
    pub async fn generate_content(
        &self,
        selection: Selection,
        context: Option<&str>,
    ) -> Result<GeneratedContent, AppError> {
        let niche = selection.niche.as_str();
        let post_type = selection.post_type.as_str();
        let tone = selection.tone.as_str();

        let (template, hashtags) = tokio::try_join!(
            fetch_best_template(self.store.as_ref(), niche, post_type, tone),
            async {
                self.store
                    .top_hashtags(niche, HASHTAG_LIMIT)
                    .await
                    .map_err(AppError::from)
            },
        )?;

        // Pick every phrase before the first await so the RNG is not held across it.
        let phrases: Vec<String> = {
            let mut rng = rand::thread_rng();
            Section::ALL
                .iter()
                .map(|&s| pick_phrase(s, template.phrases(s), &mut rng))
                .collect()
        };

        let llm = self.llm.as_ref();
        let (hook, story, insight, cta) = tokio::join!(
            expand_section(llm, Section::Hook, phrases[0].clone(), post_type, tone, context),
            expand_section(llm, Section::Story, phrases[1].clone(), post_type, tone, context),
            expand_section(llm, Section::Insight, phrases[2].clone(), post_type, tone, context),
            expand_section(llm, Section::Cta, phrases[3].clone(), post_type, tone, context),
        );

        let fallback_sections: Vec<Section> = [
            (Section::Hook, &hook),
            (Section::Story, &story),
            (Section::Insight, &insight),
            (Section::Cta, &cta),
        ]
        .into_iter()
        .filter(|(_, outcome)| !outcome.is_personalized())
        .map(|(section, _)| section)
        .collect();

        let sections = PostSections {
            hook: hook.into_text(),
            story: story.into_text(),
            insight: insight.into_text(),
            cta: cta.into_text(),
            hashtags,
        };
        let full_content = sections.assemble();
        let predicted_engagement = predict_engagement(&full_content);

        info!(
            "Assembled {niche}/{post_type}/{tone} post: score {:.2}, {} fallback sections, template performance {:.2} (stored: {})",
            predicted_engagement,
            fallback_sections.len(),
            template.performance,
            template.stored
        );

        Ok(GeneratedContent {
            sections,
            full_content,
            predicted_engagement,
            fallback_sections,
        })
    }

    /// Three ranked single-section variants of `base`.
    pub async fn generate_variants(
        &self,
        base: &PostSections,
        niche: &str,
        post_type: &str,
        tone: &str,
    ) -> Vec<Variant> {
        generate_variants(self.llm.as_ref(), base, niche, post_type, tone).await
    }
}

/// Builds the expert-writer prompt from the catalog fragments.
pub fn build_post_request(selection: Selection, context: Option<&str>) -> CompletionRequest {
    let context_line = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| format!("Additional context to include: {c}"))
        .unwrap_or_default();

    let system = POST_SYSTEM_TEMPLATE
        .replace("{audience}", selection.niche.prompt_fragment())
        .replace("{content_type}", selection.post_type.prompt_fragment())
        .replace("{tone}", selection.tone.prompt_fragment())
        .replace("{context_line}", &context_line);

    let user = POST_USER_TEMPLATE
        .replace("{niche}", selection.niche.as_str())
        .replace("{post_type}", selection.post_type.as_str())
        .replace("{tone}", selection.tone.as_str());

    CompletionRequest::chat(system, user, POST_TEMPERATURE, POST_MAX_TOKENS)
}
