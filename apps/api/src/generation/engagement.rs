//! Engagement heuristic: a pure, additive score over surface features of the
//! post text. Not a trained model; no external calls.
//!
//! | feature                          | bonus |
//! |----------------------------------|-------|
//! | length in (500, 1500)            | +0.20 |
//! | else length in (300, 2000)       | +0.10 |
//! | contains `?`                     | +0.10 |
//! | contains an emoji                | +0.05 |
//! | hashtags in [3, 5]               | +0.15 |
//! | else hashtags in (0, 7]          | +0.10 |
//! | lines in (5, 15)                 | +0.10 |
//!
//! Base score 0.5, clamped to at most 1.0.

use std::ops::RangeInclusive;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

const BASE_SCORE: f64 = 0.5;
const MAX_SCORE: f64 = 1.0;

/// Emoticons, misc symbols & pictographs, transport & map, regional indicators.
const EMOJI_RANGES: [RangeInclusive<char>; 4] = [
    '\u{1F600}'..='\u{1F64F}',
    '\u{1F300}'..='\u{1F5FF}',
    '\u{1F680}'..='\u{1F6FF}',
    '\u{1F1E0}'..='\u{1F1FF}',
];

static HASHTAG_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngagementFeatures {
    /// Length in UTF-16 code units, so astral emoji count twice.
    pub length: usize,
    pub has_question: bool,
    pub has_emoji: bool,
    pub hashtag_count: usize,
    pub line_count: usize,
}

impl EngagementFeatures {
    pub fn extract(text: &str) -> Self {
        let hashtags = HASHTAG_REGEX
            .get_or_init(|| Regex::new(r"#[A-Za-z0-9_]+").expect("Invalid regex pattern"));

        Self {
            length: text.encode_utf16().count(),
            has_question: text.contains('?'),
            has_emoji: text
                .chars()
                .any(|c| EMOJI_RANGES.iter().any(|range| range.contains(&c))),
            hashtag_count: hashtags.find_iter(text).count(),
            line_count: text.split('\n').count(),
        }
    }

    pub fn score(&self) -> f64 {
        let mut score = BASE_SCORE;

        if self.length > 500 && self.length < 1500 {
            score += 0.2;
        } else if self.length > 300 && self.length < 2000 {
            score += 0.1;
        }

        if self.has_question {
            score += 0.1;
        }
        if self.has_emoji {
            score += 0.05;
        }

        if (3..=5).contains(&self.hashtag_count) {
            score += 0.15;
        } else if (1..=7).contains(&self.hashtag_count) {
            score += 0.1;
        }

        if self.line_count > 5 && self.line_count < 15 {
            score += 0.1;
        }

        score.min(MAX_SCORE)
    }
}

/// Predicted engagement in [0.5, 1.0].
pub fn predict_engagement(text: &str) -> f64 {
    EngagementFeatures::extract(text).score()
}
