use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's star rating for a single game.
/// At most one record exists per game id; the store key is the game id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRating {
    pub game_id: i64,
    pub rating: u8,
    /// Set once on first rating, immutable afterwards
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Refreshed on every write, never earlier than created_at
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl UserRating {
    /// Creates a fresh record with both timestamps set to now
    pub fn new(game_id: i64, rating: u8) -> Self {
        let now = Utc::now();
        Self {
            game_id,
            rating,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a new rating value in place, keeping created_at
    pub fn update(&mut self, rating: u8) {
        self.rating = rating;
        self.updated_at = Utc::now();
    }
}
