use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::validation::{MAX_RATING, MIN_RATING};

/// Aggregate view over everything the user has rated and reviewed.
/// Recomputed from a full scan on every query, never cached, so it always
/// reflects the store at the moment of the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRatingStats {
    pub total_rated_games: usize,
    pub total_reviews: usize,
    pub average_rating: f64,
    /// Count of ratings per star value; all keys 1..=5 always present
    pub rating_distribution: HashMap<u8, usize>,
}

impl UserRatingStats {
    /// Stats for an empty store: zero totals, 0.0 average, zeroed histogram
    pub fn empty() -> Self {
        Self {
            total_rated_games: 0,
            total_reviews: 0,
            average_rating: 0.0,
            rating_distribution: (MIN_RATING..=MAX_RATING).map(|star| (star, 0)).collect(),
        }
    }
}

impl Default for UserRatingStats {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_have_all_five_histogram_keys() {
        let stats = UserRatingStats::empty();
        assert_eq!(stats.rating_distribution.len(), 5);
        for star in 1..=5u8 {
            assert_eq!(stats.rating_distribution.get(&star), Some(&0));
        }
        assert_eq!(stats.average_rating, 0.0);
    }
}
