//! Best posting slot for a niche.

use serde::Serialize;

use crate::db::Store;
use crate::errors::AppError;
use crate::models::analytics::OptimalTimingRow;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostingTime {
    pub day: String,
    pub hour: i16,
    pub engagement: f64,
}

impl PostingTime {
    /// Returned when nothing is stored for the niche.
    pub fn fallback() -> Self {
        Self {
            day: "Tuesday".to_string(),
            hour: 10,
            engagement: 2.5,
        }
    }

    /// `day_of_week` is Sunday-based and wraps modulo 7.
    pub fn from_row(row: &OptimalTimingRow) -> Self {
        let index = row.day_of_week.rem_euclid(7) as usize;
        Self {
            day: WEEKDAYS[index].to_string(),
            hour: row.hour,
            engagement: row.avg_engagement,
        }
    }
}

pub async fn optimal_timing(store: &dyn Store, niche: &str) -> Result<PostingTime, AppError> {
    Ok(store
        .best_timing(niche)
        .await?
        .map(|row| PostingTime::from_row(&row))
        .unwrap_or_else(PostingTime::fallback))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{timing, MemoryStore};

    #[tokio::test]
    async fn test_no_record_returns_tuesday_ten() {
        let store = MemoryStore::default();
        let t = optimal_timing(&store, "technology").await.unwrap();
        assert_eq!(t, PostingTime::fallback());
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            serde_json::json!({ "day": "Tuesday", "hour": 10, "engagement": 2.5 })
        );
    }

    #[tokio::test]
    async fn test_highest_engagement_slot_wins() {
        let store = MemoryStore {
            timings: vec![
                timing("technology", 1, 9, 3.1),
                timing("technology", 4, 17, 4.2),
                timing("marketing", 0, 8, 9.9),
            ],
            ..Default::default()
        };
        let t = optimal_timing(&store, "technology").await.unwrap();
        assert_eq!(t.day, "Thursday");
        assert_eq!(t.hour, 17);
        assert_eq!(t.engagement, 4.2);
    }

    #[test]
    fn test_day_index_is_sunday_based() {
        assert_eq!(PostingTime::from_row(&timing("x", 0, 0, 0.0)).day, "Sunday");
        assert_eq!(PostingTime::from_row(&timing("x", 6, 0, 0.0)).day, "Saturday");
    }
}
