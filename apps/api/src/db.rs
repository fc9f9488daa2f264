use anyhow::Result;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::models::analytics::{OptimalTimingRow, PostRow};
use crate::models::content::{ContentTemplateRow, HashtagAnalysisRow, NicheRow};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Read access to the persisted reference and analytics tables.
///
/// Carried in `AppState` as `Arc<dyn Store>`. `PgStore` is the production
/// backend; tests use an in-memory implementation.
#[async_trait]
pub trait Store: Send + Sync {
    /// Highest-performance template for the exact (niche, post_type, tone) key.
    async fn best_template(
        &self,
        niche: &str,
        post_type: &str,
        tone: &str,
    ) -> Result<Option<ContentTemplateRow>, sqlx::Error>;

    /// Hashtags for a niche ordered by avg likes, then connectivity, descending.
    async fn top_hashtags(&self, niche_id: &str, limit: i64) -> Result<Vec<String>, sqlx::Error>;

    /// Most recent posts for a niche, newest first.
    async fn recent_posts(&self, niche_id: &str, limit: i64) -> Result<Vec<PostRow>, sqlx::Error>;

    async fn find_niche(&self, niche_id: &str) -> Result<Option<NicheRow>, sqlx::Error>;

    /// The timing slot with the highest average engagement for a niche.
    async fn best_timing(&self, niche: &str) -> Result<Option<OptimalTimingRow>, sqlx::Error>;
}

/// `Store` backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn best_template(
        &self,
        niche: &str,
        post_type: &str,
        tone: &str,
    ) -> Result<Option<ContentTemplateRow>, sqlx::Error> {
        sqlx::query_as::<_, ContentTemplateRow>(
            r#"
            SELECT id, niche, post_type, tone, hooks, story_prompts,
                   insight_formats, cta_templates, performance
            FROM content_templates
            WHERE niche = $1 AND post_type = $2 AND tone = $3
            ORDER BY performance DESC
            LIMIT 1
            "#,
        )
        .bind(niche)
        .bind(post_type)
        .bind(tone)
        .fetch_optional(&self.pool)
        .await
    }

    async fn top_hashtags(&self, niche_id: &str, limit: i64) -> Result<Vec<String>, sqlx::Error> {
        let rows = sqlx::query_as::<_, HashtagAnalysisRow>(
            r#"
            SELECT id, niche_id, hashtag, avg_likes, connectivity
            FROM hashtag_analysis
            WHERE niche_id = $1
            ORDER BY avg_likes DESC, connectivity DESC
            LIMIT $2
            "#,
        )
        .bind(niche_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.hashtag).collect())
    }

    async fn recent_posts(&self, niche_id: &str, limit: i64) -> Result<Vec<PostRow>, sqlx::Error> {
        sqlx::query_as::<_, PostRow>(
            r#"
            SELECT id, niche_id, author_followers, likes, comments, shares, posted_at
            FROM linkedin_posts
            WHERE niche_id = $1
            ORDER BY posted_at DESC
            LIMIT $2
            "#,
        )
        .bind(niche_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    async fn find_niche(&self, niche_id: &str) -> Result<Option<NicheRow>, sqlx::Error> {
        sqlx::query_as::<_, NicheRow>("SELECT id, name, keywords FROM niches WHERE id = $1")
            .bind(niche_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn best_timing(&self, niche: &str) -> Result<Option<OptimalTimingRow>, sqlx::Error> {
        sqlx::query_as::<_, OptimalTimingRow>(
            r#"
            SELECT id, niche, day_of_week, hour, avg_engagement
            FROM optimal_timing
            WHERE niche = $1
            ORDER BY avg_engagement DESC
            LIMIT 1
            "#,
        )
        .bind(niche)
        .fetch_optional(&self.pool)
        .await
    }
}
