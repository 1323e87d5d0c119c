use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which timeline an activity entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    Rating,
    Review,
}

/// One entry in the merged recent-activity feed.
/// Ephemeral: produced by the merger, never stored. Exactly one of
/// `rating` / `review_text` is set, depending on `activity_type`, and
/// `review_text` carries only a preview of the full review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub activity_type: ActivityType,
    pub game_id: i64,
    pub game_name: String,
    pub game_image: String,
    pub rating: Option<u8>,
    pub review_text: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub activity_date: DateTime<Utc>,
}
