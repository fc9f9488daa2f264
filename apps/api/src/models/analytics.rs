use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An ingested LinkedIn post with its engagement counters. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub niche_id: String,
    pub author_followers: i64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub posted_at: DateTime<Utc>,
}

/// Aggregated engagement for one (niche, weekday, hour) slot.
/// `day_of_week` is 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OptimalTimingRow {
    pub id: Uuid,
    pub niche: String,
    pub day_of_week: i16,
    pub hour: i16,
    pub avg_engagement: f64,
}
