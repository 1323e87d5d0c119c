use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::UserRatingStats;
use crate::rating::repository::RatingRepository;
use crate::review::repository::ReviewRepository;
use crate::shared::UserDataError;

/// Computes aggregate rating statistics on demand.
/// Always a full scan: the store is small and callers need numbers that are
/// consistent with the store contents at the moment of the call, so nothing
/// is cached or incrementally maintained.
pub struct StatsService {
    rating_repository: Arc<dyn RatingRepository + Send + Sync>,
    review_repository: Arc<dyn ReviewRepository + Send + Sync>,
}

impl StatsService {
    pub fn new(
        rating_repository: Arc<dyn RatingRepository + Send + Sync>,
        review_repository: Arc<dyn ReviewRepository + Send + Sync>,
    ) -> Self {
        Self {
            rating_repository,
            review_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn get_user_rating_stats(&self) -> Result<UserRatingStats, UserDataError> {
        let ratings = self
            .rating_repository
            .get_all_ratings()
            .await
            .map_err(UserDataError::normalize_store_error)?;
        let reviews = self
            .review_repository
            .get_all_reviews()
            .await
            .map_err(UserDataError::normalize_store_error)?;

        let mut stats = UserRatingStats::empty();
        stats.total_rated_games = ratings.len();
        stats.total_reviews = reviews.len();

        if !ratings.is_empty() {
            let sum: u64 = ratings.iter().map(|r| u64::from(r.rating)).sum();
            stats.average_rating = sum as f64 / ratings.len() as f64;
        }

        for rating in &ratings {
            if let Some(count) = stats.rating_distribution.get_mut(&rating.rating) {
                *count += 1;
            }
        }

        debug!(
            total_rated_games = stats.total_rated_games,
            total_reviews = stats.total_reviews,
            average_rating = stats.average_rating,
            "Computed rating stats"
        );

        Ok(stats)
    }
}
