use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::{ActivityType, RecentActivity};
use super::{DEFAULT_ACTIVITY_LIMIT, REVIEW_PREVIEW_LENGTH};
use crate::catalog::GameCatalog;
use crate::rating::repository::RatingRepository;
use crate::review::repository::ReviewRepository;
use crate::shared::UserDataError;
use crate::validation::validate_activity_limit;

/// Merges the rating and review timelines into one ranked feed.
pub struct ActivityService {
    rating_repository: Arc<dyn RatingRepository + Send + Sync>,
    review_repository: Arc<dyn ReviewRepository + Send + Sync>,
    catalog: Arc<dyn GameCatalog + Send + Sync>,
}

impl ActivityService {
    pub fn new(
        rating_repository: Arc<dyn RatingRepository + Send + Sync>,
        review_repository: Arc<dyn ReviewRepository + Send + Sync>,
        catalog: Arc<dyn GameCatalog + Send + Sync>,
    ) -> Self {
        Self {
            rating_repository,
            review_repository,
            catalog,
        }
    }

    /// `get_recent_user_activity` with the standard feed size
    pub async fn get_recent_user_activity_default(
        &self,
    ) -> Result<Vec<RecentActivity>, UserDataError> {
        self.get_recent_user_activity(DEFAULT_ACTIVITY_LIMIT).await
    }

    /// Returns the user's most recent rating and review events, newest first.
    ///
    /// Each timeline contributes at most `limit / 2` entries (integer
    /// division); the merged list is sorted by activity date descending and
    /// capped at `limit`. Review text is truncated to a 100-character
    /// preview; the feed never exposes full review bodies.
    ///
    /// For entries with an identical activity date, ratings sort before
    /// reviews and each timeline keeps its own recency order.
    #[instrument(skip(self))]
    pub async fn get_recent_user_activity(
        &self,
        limit: usize,
    ) -> Result<Vec<RecentActivity>, UserDataError> {
        validate_activity_limit(limit)?;

        let per_timeline = limit / 2;

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

        // get_all_* already sort by updated_at desc, so taking the head
        // gives the most recent entries of each timeline
        let mut feed = Vec::with_capacity(per_timeline * 2);

        for rating in ratings.into_iter().take(per_timeline) {
            let summary = self.catalog.get_game_summary(rating.game_id).await;
            feed.push(RecentActivity {
                activity_type: ActivityType::Rating,
                game_id: rating.game_id,
                game_name: summary.name,
                game_image: summary.image_url,
                rating: Some(rating.rating),
                review_text: None,
                activity_date: rating.updated_at,
            });
        }

        for review in reviews.into_iter().take(per_timeline) {
            let summary = self.catalog.get_game_summary(review.game_id).await;
            feed.push(RecentActivity {
                activity_type: ActivityType::Review,
                game_id: review.game_id,
                game_name: summary.name,
                game_image: summary.image_url,
                rating: None,
                review_text: Some(preview(&review.review_text)),
                activity_date: review.updated_at,
            });
        }

        // Stable sort keeps ratings ahead of reviews on equal dates because
        // ratings were pushed first
        feed.sort_by(|a, b| b.activity_date.cmp(&a.activity_date));
        feed.truncate(limit);

        debug!(entries = feed.len(), limit, "Merged recent activity feed");
        Ok(feed)
    }
}

/// First `REVIEW_PREVIEW_LENGTH` characters of the review text
fn preview(review_text: &str) -> String {
    review_text.chars().take(REVIEW_PREVIEW_LENGTH).collect()
}
