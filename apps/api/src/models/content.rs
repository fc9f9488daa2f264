use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Read-only reference data describing a niche and the keywords it tracks.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct NicheRow {
    pub id: String,
    pub name: String,
    /// JSON-serialized array of keyword strings.
    pub keywords: Option<String>,
}

impl NicheRow {
    /// Decoded keyword list. Missing or malformed JSON yields an empty list.
    pub fn keyword_list(&self) -> Vec<String> {
        decode_string_list(self.keywords.as_deref())
    }
}

/// A stored phrase template set for one (niche, post_type, tone) key.
/// The four phrase columns are JSON-serialized string arrays.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContentTemplateRow {
    pub id: Uuid,
    pub niche: String,
    pub post_type: String,
    pub tone: String,
    pub hooks: Option<String>,
    pub story_prompts: Option<String>,
    pub insight_formats: Option<String>,
    pub cta_templates: Option<String>,
    pub performance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HashtagAnalysisRow {
    pub id: Uuid,
    pub niche_id: String,
    pub hashtag: String,
    pub avg_likes: f64,
    pub connectivity: f64,
}

/// Decodes a JSON string array stored in a text column.
pub fn decode_string_list(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_list_decodes_json_array() {
        let niche = NicheRow {
            id: "technology".into(),
            name: "Technology".into(),
            keywords: Some(r#"["AI","Rust","cloud"]"#.into()),
        };
        assert_eq!(niche.keyword_list(), vec!["AI", "Rust", "cloud"]);
    }

    #[test]
    fn test_decode_string_list_tolerates_garbage() {
        assert!(decode_string_list(Some("not json")).is_empty());
        assert!(decode_string_list(Some(r#"{"a":1}"#)).is_empty());
        assert!(decode_string_list(None).is_empty());
    }
}
