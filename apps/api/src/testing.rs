//! Test doubles shared by the unit tests: an in-memory `Store` and a
//! scripted `CompletionService`.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::db::Store;
use crate::llm_client::{CompletionRequest, CompletionService, LlmError};
use crate::models::analytics::{OptimalTimingRow, PostRow};
use crate::models::content::{ContentTemplateRow, HashtagAnalysisRow, NicheRow};
use crate::state::AppState;

#[derive(Default)]
pub struct MemoryStore {
    pub templates: Vec<ContentTemplateRow>,
    pub hashtags: Vec<HashtagAnalysisRow>,
    pub posts: Vec<PostRow>,
    pub niches: Vec<NicheRow>,
    pub timings: Vec<OptimalTimingRow>,
    /// When set, every query fails as if the pool were exhausted.
    pub unavailable: bool,
}

impl MemoryStore {
    fn check(&self) -> Result<(), sqlx::Error> {
        if self.unavailable {
            Err(sqlx::Error::PoolTimedOut)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn best_template(
        &self,
        niche: &str,
        post_type: &str,
        tone: &str,
    ) -> Result<Option<ContentTemplateRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .templates
            .iter()
            .filter(|t| t.niche == niche && t.post_type == post_type && t.tone == tone)
            .max_by(|a, b| a.performance.total_cmp(&b.performance))
            .cloned())
    }

    async fn top_hashtags(&self, niche_id: &str, limit: i64) -> Result<Vec<String>, sqlx::Error> {
        self.check()?;
        let mut rows: Vec<&HashtagAnalysisRow> =
            self.hashtags.iter().filter(|h| h.niche_id == niche_id).collect();
        rows.sort_by(|a, b| {
            b.avg_likes
                .total_cmp(&a.avg_likes)
                .then(b.connectivity.total_cmp(&a.connectivity))
        });
        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|h| h.hashtag.clone())
            .collect())
    }

    async fn recent_posts(&self, niche_id: &str, limit: i64) -> Result<Vec<PostRow>, sqlx::Error> {
        self.check()?;
        let mut rows: Vec<PostRow> = self
            .posts
            .iter()
            .filter(|p| p.niche_id == niche_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        rows.truncate(limit as usize);
        Ok(rows)
    }

    async fn find_niche(&self, niche_id: &str) -> Result<Option<NicheRow>, sqlx::Error> {
        self.check()?;
        Ok(self.niches.iter().find(|n| n.id == niche_id).cloned())
    }

    async fn best_timing(&self, niche: &str) -> Result<Option<OptimalTimingRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .timings
            .iter()
            .filter(|t| t.niche == niche)
            .max_by(|a, b| a.avg_engagement.total_cmp(&b.avg_engagement))
            .cloned())
    }
}

type Reply = Box<dyn Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync>;

/// A `CompletionService` whose reply is computed from the request.
/// Every request is recorded for later assertions.
pub struct StubCompletion {
    reply: Reply,
    calls: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletion {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&CompletionRequest) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        Self {
            reply: Box::new(f),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        let text = text.to_string();
        Self::from_fn(move |_| Ok(text.clone()))
    }

    pub fn empty() -> Self {
        Self::from_fn(|_| Err(LlmError::EmptyContent))
    }

    pub fn failing() -> Self {
        Self::from_fn(|_| {
            Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            })
        })
    }

    pub fn calls(&self) -> Vec<CompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(request.clone());
        (self.reply)(request)
    }
}

pub fn app_state(store: MemoryStore, llm: Arc<StubCompletion>) -> AppState {
    AppState {
        store: Arc::new(store),
        llm,
    }
}

pub fn niche(id: &str, name: &str, keywords: &[&str]) -> NicheRow {
    NicheRow {
        id: id.to_string(),
        name: name.to_string(),
        keywords: Some(serde_json::to_string(keywords).unwrap()),
    }
}

/// A post in `niche_id`, `age_days` days before a fixed reference instant.
pub fn post(niche_id: &str, followers: i64, likes: i64, comments: i64, shares: i64, age_days: i64) -> PostRow {
    let reference = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    PostRow {
        id: Uuid::new_v4(),
        niche_id: niche_id.to_string(),
        author_followers: followers,
        likes,
        comments,
        shares,
        posted_at: reference - Duration::days(age_days),
    }
}

pub fn template(niche: &str, post_type: &str, tone: &str, performance: f64, hook: &str) -> ContentTemplateRow {
    ContentTemplateRow {
        id: Uuid::new_v4(),
        niche: niche.to_string(),
        post_type: post_type.to_string(),
        tone: tone.to_string(),
        hooks: Some(serde_json::to_string(&[hook]).unwrap()),
        story_prompts: None,
        insight_formats: Some("[]".to_string()),
        cta_templates: None,
        performance,
    }
}

pub fn hashtag(niche_id: &str, tag: &str, avg_likes: f64, connectivity: f64) -> HashtagAnalysisRow {
    HashtagAnalysisRow {
        id: Uuid::new_v4(),
        niche_id: niche_id.to_string(),
        hashtag: tag.to_string(),
        avg_likes,
        connectivity,
    }
}

pub fn timing(niche: &str, day_of_week: i16, hour: i16, avg_engagement: f64) -> OptimalTimingRow {
    OptimalTimingRow {
        id: Uuid::new_v4(),
        niche: niche.to_string(),
        day_of_week,
        hour,
        avg_engagement,
    }
}
