//! Trend detector. Asks the completion service what is trending for a niche.

use tracing::{info, warn};

use crate::db::Store;
use crate::errors::AppError;
use crate::llm_client::{CompletionRequest, CompletionService};

pub const MAX_TRENDS: usize = 5;

const TREND_SYSTEM: &str = "You are a trend detection expert for LinkedIn content.";
const TREND_TEMPERATURE: f32 = 0.7;
const TREND_MAX_TOKENS: u32 = 300;

pub fn build_trend_request(niche_name: &str, keywords: &[String]) -> CompletionRequest {
    let user = format!(
        "What are the current trending topics in {niche_name}? Focus on: {}.",
        keywords.join(", ")
    );
    CompletionRequest::chat(TREND_SYSTEM, user, TREND_TEMPERATURE, TREND_MAX_TOKENS)
}

/// Non-blank lines of the reply, at most `MAX_TRENDS`. Lines are returned
/// verbatim, including leading whitespace and any `\r`.
pub fn parse_trend_lines(reply: &str) -> Vec<String> {
    reply
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .take(MAX_TRENDS)
        .map(String::from)
        .collect()
}

/// Unknown niches and completion failures both yield an empty list.
/// A store failure is still an error.
pub async fn detect_trends(
    store: &dyn Store,
    llm: &dyn CompletionService,
    niche_id: &str,
) -> Result<Vec<String>, AppError> {
    let Some(niche) = store.find_niche(niche_id).await? else {
        info!("Trend lookup for unknown niche '{niche_id}'");
        return Ok(Vec::new());
    };

    let request = build_trend_request(&niche.name, &niche.keyword_list());
    match llm.complete(&request).await {
        Ok(reply) => Ok(parse_trend_lines(&reply)),
        Err(e) => {
            warn!("Error detecting trends for '{niche_id}': {e}");
            Ok(Vec::new())
        }
    }
}
