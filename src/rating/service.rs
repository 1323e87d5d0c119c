use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::models::UserRating;
use super::repository::RatingRepository;
use crate::shared::UserDataError;
use crate::validation::{validate_game_id, validate_rating};

/// Service for handling rating business logic.
/// Validates every input before touching the store, so invalid requests
/// never cause a partial write.
pub struct RatingService {
    repository: Arc<dyn RatingRepository + Send + Sync>,
}

impl RatingService {
    pub fn new(repository: Arc<dyn RatingRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates or updates the user's rating for a game
    #[instrument(skip(self))]
    pub async fn set_user_rating(
        &self,
        game_id: i64,
        rating: u8,
    ) -> Result<UserRating, UserDataError> {
        validate_game_id(game_id)?;
        validate_rating(rating)?;

        let record = self
            .repository
            .upsert_rating(game_id, rating)
            .await
            .map_err(UserDataError::normalize_store_error)?;

        info!(game_id = %game_id, rating = %rating, "Rating saved");
        Ok(record)
    }

    /// Returns the user's rating for a game, or None when the game is unrated
    #[instrument(skip(self))]
    pub async fn get_user_rating(&self, game_id: i64) -> Result<Option<UserRating>, UserDataError> {
        validate_game_id(game_id)?;
        self.repository
            .get_rating(game_id)
            .await
            .map_err(UserDataError::normalize_store_error)
    }

    /// Removes the user's rating for a game; succeeds even when none exists
    #[instrument(skip(self))]
    pub async fn delete_user_rating(&self, game_id: i64) -> Result<(), UserDataError> {
        validate_game_id(game_id)?;

        self.repository
            .delete_rating(game_id)
            .await
            .map_err(UserDataError::normalize_store_error)?;

        info!(game_id = %game_id, "Rating deleted");
        Ok(())
    }

    /// All of the user's ratings, most recently updated first
    #[instrument(skip(self))]
    pub async fn get_all_user_ratings(&self) -> Result<Vec<UserRating>, UserDataError> {
        let ratings = self
            .repository
            .get_all_ratings()
            .await
            .map_err(UserDataError::normalize_store_error)?;
        debug!(count = ratings.len(), "Fetched all ratings");
        Ok(ratings)
    }
}
