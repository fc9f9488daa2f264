//! Analytics reader: engagement averages over a niche's recent posts.

use serde::Serialize;

use crate::db::Store;
use crate::errors::AppError;
use crate::models::analytics::PostRow;

/// Upper bound on posts aggregated per request.
pub const MAX_POSTS: i64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NicheAnalytics {
    pub avg_likes: f64,
    pub avg_comments: f64,
    pub avg_shares: f64,
    /// 100 × total interactions / total followers; 0 when no followers are recorded.
    pub avg_engagement_rate: f64,
    pub total_posts: usize,
}

/// Aggregates a set of posts. An empty set yields all zeros.
pub fn summarize_posts(posts: &[PostRow]) -> NicheAnalytics {
    if posts.is_empty() {
        return NicheAnalytics::default();
    }

    let total_likes: i64 = posts.iter().map(|p| p.likes).sum();
    let total_comments: i64 = posts.iter().map(|p| p.comments).sum();
    let total_shares: i64 = posts.iter().map(|p| p.shares).sum();
    let total_followers: i64 = posts.iter().map(|p| p.author_followers).sum();

    let count = posts.len() as f64;
    let interactions = (total_likes + total_comments + total_shares) as f64;

    let avg_engagement_rate = if total_followers > 0 {
        interactions * 100.0 / total_followers as f64
    } else {
        0.0
    };

    NicheAnalytics {
        avg_likes: total_likes as f64 / count,
        avg_comments: total_comments as f64 / count,
        avg_shares: total_shares as f64 / count,
        avg_engagement_rate,
        total_posts: posts.len(),
    }
}

pub async fn analyze_niche(store: &dyn Store, niche_id: &str) -> Result<NicheAnalytics, AppError> {
    let posts = store.recent_posts(niche_id, MAX_POSTS).await?;
    Ok(summarize_posts(&posts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{post, MemoryStore};

    #[test]
    fn test_empty_set_is_all_zero() {
        assert_eq!(
            summarize_posts(&[]),
            NicheAnalytics {
                avg_likes: 0.0,
                avg_comments: 0.0,
                avg_shares: 0.0,
                avg_engagement_rate: 0.0,
                total_posts: 0,
            }
        );
    }

    #[test]
    fn test_averages_and_engagement_rate() {
        let posts = vec![
            post("technology", 100, 10, 1, 0, 1),
            post("technology", 100, 20, 1, 2, 2),
        ];
        let a = summarize_posts(&posts);
        assert_eq!(a.avg_likes, 15.0);
        assert_eq!(a.avg_comments, 1.0);
        assert_eq!(a.avg_shares, 1.0);
        assert_eq!(a.avg_engagement_rate, 17.0);
        assert_eq!(a.total_posts, 2);
    }

    #[test]
    fn test_zero_followers_gives_zero_rate() {
        let posts = vec![post("technology", 0, 5, 5, 5, 1)];
        let a = summarize_posts(&posts);
        assert_eq!(a.avg_engagement_rate, 0.0);
        assert!(a.avg_engagement_rate.is_finite());
        assert_eq!(a.avg_likes, 5.0);
    }

    #[tokio::test]
    async fn test_analyze_niche_caps_at_most_recent_thousand() {
        let mut posts: Vec<_> = (0..1000)
            .map(|day| post("technology", 10, 1, 0, 0, day))
            .collect();
        // the oldest post would skew the average if it were included
        posts.push(post("technology", 10, 100_000, 0, 0, 5000));
        posts.push(post("finance", 10, 100_000, 0, 0, 0));

        let store = MemoryStore {
            posts,
            ..Default::default()
        };
        let a = analyze_niche(&store, "technology").await.unwrap();
        assert_eq!(a.total_posts, 1000);
        assert_eq!(a.avg_likes, 1.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(NicheAnalytics::default()).unwrap();
        for key in ["avgLikes", "avgComments", "avgShares", "avgEngagementRate", "totalPosts"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
