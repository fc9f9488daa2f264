use axum::{response::Html, Json};
use serde::Serialize;

use crate::generation::catalog::{CatalogOption, Niche, PostType, Tone};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub niches: Vec<CatalogOption>,
    pub post_types: Vec<CatalogOption>,
    pub tones: Vec<CatalogOption>,
}

/// GET /api/catalog
/// Select-box options for the UI.
pub async fn handle_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        niches: Niche::options(),
        post_types: PostType::options(),
        tones: Tone::options(),
    })
}

/// GET /
pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
