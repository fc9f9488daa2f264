//! A/B variant generator.
//!
//! Produces exactly three variants of a base post, each differing in one
//! section (hook, CTA, insight), scores them with the engagement heuristic and
//! returns them best first. The three rewrites are independent and run
//! concurrently.

use serde::Serialize;
use tracing::info;

use crate::generation::assembler::PostSections;
use crate::generation::engagement::predict_engagement;
use crate::generation::prompts::{
    SECTION_TEMPERATURE, VARIANT_SYSTEM_TEMPLATE, VARIANT_USER_TEMPLATE,
};
use crate::generation::sections::{complete_or_fallback, Section, SectionOutcome};
use crate::llm_client::{CompletionRequest, CompletionService};

/// Sections rewritten for variants, in encounter order.
pub const VARIANT_SECTIONS: [Section; 3] = [Section::Hook, Section::Cta, Section::Insight];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Which section differs from the base post.
    pub kind: Section,
    #[serde(flatten)]
    pub sections: PostSections,
    pub full_content: String,
    pub predicted_engagement: f64,
    /// False when the rewrite failed and the base section was kept.
    pub personalized: bool,
}

impl Variant {
    fn build(base: &PostSections, kind: Section, outcome: SectionOutcome) -> Self {
        let personalized = outcome.is_personalized();
        let mut sections = base.clone();
        let text = outcome.into_text();
        match kind {
            Section::Hook => sections.hook = text,
            Section::Story => sections.story = text,
            Section::Insight => sections.insight = text,
            Section::Cta => sections.cta = text,
        }
        let full_content = sections.assemble();
        let predicted_engagement = predict_engagement(&full_content);
        Self {
            kind,
            sections,
            full_content,
            predicted_engagement,
            personalized,
        }
    }
}

fn section_text(sections: &PostSections, section: Section) -> &str {
    match section {
        Section::Hook => &sections.hook,
        Section::Story => &sections.story,
        Section::Insight => &sections.insight,
        Section::Cta => &sections.cta,
    }
}

/// Asks for an alternative version of one section; keeps `current` on failure.
pub async fn rewrite_section(
    llm: &dyn CompletionService,
    section: Section,
    current: &str,
    post_type: &str,
    tone: &str,
) -> SectionOutcome {
    let system = VARIANT_SYSTEM_TEMPLATE
        .replace("{section}", section.name())
        .replace("{post_type}", post_type)
        .replace("{tone}", tone);
    let user = VARIANT_USER_TEMPLATE
        .replace("{section}", section.name())
        .replace("{current}", current);

    let request = CompletionRequest::chat(system, user, SECTION_TEMPERATURE, section.max_tokens());
    let label = format!("alternate {}", section.name());
    complete_or_fallback(llm, request, current.to_string(), &label).await
}

/// Sorts by descending score. The sort is stable, so equal scores keep
/// encounter order (hook, cta, insight).
pub fn rank_variants(variants: &mut [Variant]) {
    variants.sort_by(|a, b| b.predicted_engagement.total_cmp(&a.predicted_engagement));
}

pub async fn generate_variants(
    llm: &dyn CompletionService,
    base: &PostSections,
    niche: &str,
    post_type: &str,
    tone: &str,
) -> Vec<Variant> {
    let [first, second, third] = VARIANT_SECTIONS;

    let (a, b, c) = tokio::join!(
        rewrite_section(llm, first, section_text(base, first), post_type, tone),
        rewrite_section(llm, second, section_text(base, second), post_type, tone),
        rewrite_section(llm, third, section_text(base, third), post_type, tone),
    );

    let mut variants = vec![
        Variant::build(base, first, a),
        Variant::build(base, second, b),
        Variant::build(base, third, c),
    ];
    rank_variants(&mut variants);

    info!(
        "Generated {} variants for {niche}/{post_type}/{tone}, best score {:.2}",
        variants.len(),
        variants[0].predicted_engagement
    );

    variants
}
