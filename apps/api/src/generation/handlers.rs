//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::assembler::disassemble_content;
use crate::generation::catalog::Selection;
use crate::generation::generator::GeneratedContent;
use crate::generation::variants::Variant;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of `/api/generate-post` and `/api/generate-content`.
/// Fields are optional so that missing ones produce a 400 with our own message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePostRequest {
    pub niche: Option<String>,
    pub post_type: Option<String>,
    pub tone: Option<String>,
    pub context: Option<String>,
}

impl GeneratePostRequest {
    fn selection(&self) -> Result<Selection, AppError> {
        match (
            present(&self.niche),
            present(&self.post_type),
            present(&self.tone),
        ) {
            (Some(niche), Some(post_type), Some(tone)) => Selection::parse(niche, post_type, tone)
                .map_err(|e| AppError::Validation(e.to_string())),
            _ => Err(AppError::Validation(
                "Missing required fields: niche, postType, tone".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GeneratePostResponse {
    pub post: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVariantsRequest {
    pub content: Option<String>,
    pub niche: Option<String>,
    pub post_type: Option<String>,
    pub tone: Option<String>,
}

/// Treats absent and blank strings alike.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub(crate) fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(format!("Invalid request body: {}", rejection.body_text()))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-post
///
/// One completion call with the expert-writer prompt; returns the trimmed text.
pub async fn handle_generate_post(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePostRequest>, JsonRejection>,
) -> Result<Json<GeneratePostResponse>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let selection = request.selection()?;

    let post = state
        .content_generator()
        .generate_post(selection, request.context.as_deref())
        .await?;

    Ok(Json(GeneratePostResponse { post }))
}

/// POST /api/generate-content
///
/// Template-driven pipeline returning each section, hashtags and the score.
pub async fn handle_generate_content(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePostRequest>, JsonRejection>,
) -> Result<Json<GeneratedContent>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;
    let selection = request.selection()?;

    let content = state
        .content_generator()
        .generate_content(selection, request.context.as_deref())
        .await?;

    Ok(Json(content))
}

/// POST /api/generate-variants
///
/// Splits the submitted post into sections and returns three ranked variants.
pub async fn handle_generate_variants(
    State(state): State<AppState>,
    payload: Result<Json<GenerateVariantsRequest>, JsonRejection>,
) -> Result<Json<Vec<Variant>>, AppError> {
    let Json(request) = payload.map_err(invalid_body)?;

    let (content, niche, post_type, tone) = match (
        present(&request.content),
        present(&request.niche),
        present(&request.post_type),
        present(&request.tone),
    ) {
        (Some(c), Some(n), Some(p), Some(t)) => (c, n, p, t),
        _ => {
            return Err(AppError::Validation(
                "Missing required fields: content, niche, postType, tone".to_string(),
            ))
        }
    };

    let selection = Selection::parse(niche, post_type, tone)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let base = disassemble_content(content);
    let variants = state
        .content_generator()
        .generate_variants(
            &base,
            selection.niche.as_str(),
            selection.post_type.as_str(),
            selection.tone.as_str(),
        )
        .await;

    Ok(Json(variants))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(niche: Option<&str>, post_type: Option<&str>, tone: Option<&str>) -> GeneratePostRequest {
        GeneratePostRequest {
            niche: niche.map(String::from),
            post_type: post_type.map(String::from),
            tone: tone.map(String::from),
            context: None,
        }
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let err = request(Some("technology"), Some("  "), Some("professional"))
            .selection()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: Missing required fields: niche, postType, tone"
        );
    }

    #[test]
    fn test_unknown_catalog_value_is_validation_error() {
        let err = request(Some("astrology"), Some("story"), Some("professional"))
            .selection()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Unsupported niche: astrology"));
    }

    #[test]
    fn test_request_uses_camel_case_keys() {
        let req: GeneratePostRequest = serde_json::from_value(serde_json::json!({
            "niche": "sales", "postType": "tips", "tone": "conversational"
        }))
        .unwrap();
        assert!(req.selection().is_ok());
        assert!(req.context.is_none());
    }
}
