use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's free-text review of a single game, at most one per game id.
/// Text is limited to 1000 characters, enforced before any write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserReview {
    pub game_id: i64,
    pub review_text: String,
    /// Set once on first review, immutable afterwards
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write, never earlier than created_at
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl UserReview {
    /// Creates a fresh record with both timestamps set to now
    pub fn new(game_id: i64, review_text: String) -> Self {
        let now = Utc::now();
        Self {
            game_id,
            review_text,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the review text in place, keeping created_at
    pub fn update(&mut self, review_text: String) {
        self.review_text = review_text;
        self.updated_at = Utc::now();
    }
}
