use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::models::UserReview;
use super::repository::ReviewRepository;
use crate::shared::UserDataError;
use crate::validation::{validate_game_id, validate_review_text};

/// Service for handling review business logic.
/// Mirror of RatingService: validate first, delegate, normalize errors.
pub struct ReviewService {
    repository: Arc<dyn ReviewRepository + Send + Sync>,
}

impl ReviewService {
    pub fn new(repository: Arc<dyn ReviewRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates or updates the user's review for a game
    #[instrument(skip(self, review_text))]
    pub async fn set_user_review(
        &self,
        game_id: i64,
        review_text: &str,
    ) -> Result<UserReview, UserDataError> {
        validate_game_id(game_id)?;
        validate_review_text(review_text)?;

        let record = self
            .repository
            .upsert_review(game_id, review_text)
            .await
            .map_err(UserDataError::normalize_store_error)?;

        info!(
            game_id = %game_id,
            length = review_text.chars().count(),
            "Review saved"
        );
        Ok(record)
    }

    /// Returns the user's review for a game, or None when none exists
    #[instrument(skip(self))]
    pub async fn get_user_review(&self, game_id: i64) -> Result<Option<UserReview>, UserDataError> {
        validate_game_id(game_id)?;
        self.repository
            .get_review(game_id)
            .await
            .map_err(UserDataError::normalize_store_error)
    }

    /// Removes the user's review for a game; succeeds even when none exists
    #[instrument(skip(self))]
    pub async fn delete_user_review(&self, game_id: i64) -> Result<(), UserDataError> {
        validate_game_id(game_id)?;

        self.repository
            .delete_review(game_id)
            .await
            .map_err(UserDataError::normalize_store_error)?;

        info!(game_id = %game_id, "Review deleted");
        Ok(())
    }

    /// All of the user's reviews, most recently updated first
    #[instrument(skip(self))]
    pub async fn get_all_user_reviews(&self) -> Result<Vec<UserReview>, UserDataError> {
        let reviews = self
            .repository
            .get_all_reviews()
            .await
            .map_err(UserDataError::normalize_store_error)?;
        debug!(count = reviews.len(), "Fetched all reviews");
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::repository::InMemoryReviewRepository;
    use crate::validation::MAX_REVIEW_LENGTH;

    fn service() -> (ReviewService, Arc<InMemoryReviewRepository>) {
        let repo = Arc::new(InMemoryReviewRepository::new());
        (ReviewService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn set_then_get_round_trips_text() {
        let (service, _) = service();
        let text = "Tight controls, generous checkpoints. 素晴らしい!";

        service.set_user_review(1, text).await.unwrap();

        let stored = service.get_user_review(1).await.unwrap().unwrap();
        assert_eq!(stored.review_text, text);
    }

    #[tokio::test]
    async fn empty_review_is_rejected_before_store() {
        let (service, repo) = service();

        let err = service.set_user_review(1, "").await.unwrap_err();
        assert_eq!(err, UserDataError::EmptyReview);

        assert!(repo.get_review(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn review_at_max_length_is_accepted() {
        let (service, _) = service();
        let text = "b".repeat(MAX_REVIEW_LENGTH);

        let stored = service.set_user_review(1, &text).await.unwrap();
        assert_eq!(stored.review_text.chars().count(), MAX_REVIEW_LENGTH);
    }

    #[tokio::test]
    async fn review_over_max_length_is_rejected() {
        let (service, repo) = service();
        let text = "b".repeat(MAX_REVIEW_LENGTH + 1);

        let err = service.set_user_review(1, &text).await.unwrap_err();
        assert_eq!(
            err,
            UserDataError::ReviewTooLong {
                length: 1001,
                max: 1000
            }
        );
        assert!(repo.get_review(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn non_positive_game_id_is_rejected() {
        let (service, _) = service();

        let err = service.set_user_review(0, "fine").await.unwrap_err();
        assert_eq!(err, UserDataError::InvalidGameId(0));

        let err = service.get_user_review(-3).await.unwrap_err();
        assert_eq!(err, UserDataError::InvalidGameId(-3));
    }

    #[tokio::test]
    async fn delete_of_never_set_game_succeeds() {
        let (service, _) = service();

        service.delete_user_review(7).await.unwrap();

        assert!(service.get_user_review(7).await.unwrap().is_none());
    }
}
