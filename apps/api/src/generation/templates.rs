//! Template repository: best stored phrase set per (niche, post type, tone),
//! with a built-in default when nothing is stored.

use tracing::debug;

use crate::db::Store;
use crate::errors::AppError;
use crate::generation::sections::Section;
use crate::models::content::{decode_string_list, ContentTemplateRow};

const DEFAULT_PERFORMANCE: f64 = 0.5;

/// Decoded phrase lists for the four sections.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTemplate {
    pub hooks: Vec<String>,
    pub story_prompts: Vec<String>,
    pub insight_formats: Vec<String>,
    pub cta_templates: Vec<String>,
    pub performance: f64,
    /// False for the built-in default.
    pub stored: bool,
}

impl ContentTemplate {
    pub fn builtin() -> Self {
        let phrases = |s: Section| -> Vec<String> {
            s.default_phrases().iter().map(|p| p.to_string()).collect()
        };
        Self {
            hooks: phrases(Section::Hook),
            story_prompts: phrases(Section::Story),
            insight_formats: phrases(Section::Insight),
            cta_templates: phrases(Section::Cta),
            performance: DEFAULT_PERFORMANCE,
            stored: false,
        }
    }

    /// Malformed or missing phrase columns decode to empty lists; the section
    /// generators substitute their defaults for those.
    pub fn from_row(row: &ContentTemplateRow) -> Self {
        Self {
            hooks: decode_string_list(row.hooks.as_deref()),
            story_prompts: decode_string_list(row.story_prompts.as_deref()),
            insight_formats: decode_string_list(row.insight_formats.as_deref()),
            cta_templates: decode_string_list(row.cta_templates.as_deref()),
            performance: row.performance,
            stored: true,
        }
    }

    pub fn phrases(&self, section: Section) -> &[String] {
        match section {
            Section::Hook => &self.hooks,
            Section::Story => &self.story_prompts,
            Section::Insight => &self.insight_formats,
            Section::Cta => &self.cta_templates,
        }
    }
}

/// Returns the highest-performance stored template for the exact key, or the
/// built-in default. Only a store failure is an error.
pub async fn fetch_best_template(
    store: &dyn Store,
    niche: &str,
    post_type: &str,
    tone: &str,
) -> Result<ContentTemplate, AppError> {
    match store.best_template(niche, post_type, tone).await? {
        Some(row) => {
            debug!(
                "Using stored template {} (performance {:.2}) for {niche}/{post_type}/{tone}",
                row.id, row.performance
            );
            Ok(ContentTemplate::from_row(&row))
        }
        None => {
            debug!("No stored template for {niche}/{post_type}/{tone}, using default");
            Ok(ContentTemplate::builtin())
        }
    }
}
