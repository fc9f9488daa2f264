use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::analytics::reader::{analyze_niche, NicheAnalytics};
use crate::analytics::timing::{optimal_timing, PostingTime};
use crate::analytics::trends::detect_trends;
use crate::errors::AppError;
use crate::state::AppState;

/// Niche used when `nicheId` is omitted.
const DEFAULT_NICHE: &str = "technology";

#[derive(Debug, Deserialize)]
pub struct NicheIdQuery {
    #[serde(rename = "nicheId")]
    pub niche_id: Option<String>,
}

impl NicheIdQuery {
    fn niche_or_default(&self) -> &str {
        self.niche_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_NICHE)
    }
}

#[derive(Debug, Deserialize)]
pub struct NicheQuery {
    pub niche: Option<String>,
}

/// GET /api/analytics?nicheId=
pub async fn handle_analytics(
    State(state): State<AppState>,
    Query(params): Query<NicheIdQuery>,
) -> Result<Json<NicheAnalytics>, AppError> {
    let analytics = analyze_niche(state.store.as_ref(), params.niche_or_default()).await?;
    Ok(Json(analytics))
}

/// GET /api/trends?nicheId=
pub async fn handle_trends(
    State(state): State<AppState>,
    Query(params): Query<NicheIdQuery>,
) -> Result<Json<Vec<String>>, AppError> {
    let trends = detect_trends(
        state.store.as_ref(),
        state.llm.as_ref(),
        params.niche_or_default(),
    )
    .await?;
    Ok(Json(trends))
}

/// GET /api/optimal-timing?niche=
pub async fn handle_optimal_timing(
    State(state): State<AppState>,
    Query(params): Query<NicheQuery>,
) -> Result<Json<PostingTime>, AppError> {
    let niche = params
        .niche
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("Missing niche parameter".to_string()))?;

    Ok(Json(optimal_timing(state.store.as_ref(), niche).await?))
}
