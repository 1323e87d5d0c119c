use serde::{Deserialize, Serialize};

use crate::rating::models::UserRating;
use crate::review::models::UserReview;

/// A game joined with whatever rating and review the user has for it.
/// Assembled on demand from the two stores; never persisted. Both fields
/// are optional and may reflect slightly different points in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameWithUserData {
    pub game_id: i64,
    pub rating: Option<UserRating>,
    pub review: Option<UserReview>,
}

impl GameWithUserData {
    pub fn has_any_data(&self) -> bool {
        self.rating.is_some() || self.review.is_some()
    }
}
