use std::sync::Arc;
use tracing::{debug, instrument};

use super::models::GameWithUserData;
use super::BATCH_SIZE;
use crate::rating::repository::RatingRepository;
use crate::review::repository::ReviewRepository;
use crate::shared::UserDataError;
use crate::validation::validate_game_id;

/// Joins lists of game ids against the rating and review stores.
pub struct LibraryService {
    rating_repository: Arc<dyn RatingRepository + Send + Sync>,
    review_repository: Arc<dyn ReviewRepository + Send + Sync>,
}

impl LibraryService {
    pub fn new(
        rating_repository: Arc<dyn RatingRepository + Send + Sync>,
        review_repository: Arc<dyn ReviewRepository + Send + Sync>,
    ) -> Self {
        Self {
            rating_repository,
            review_repository,
        }
    }

    /// Joins a single game against both stores.
    /// Returns None when the user has neither rated nor reviewed the game.
    #[instrument(skip(self))]
    pub async fn get_game_with_user_data(
        &self,
        game_id: i64,
    ) -> Result<Option<GameWithUserData>, UserDataError> {
        validate_game_id(game_id)?;

        let rating = self
            .rating_repository
            .get_rating(game_id)
            .await
            .map_err(UserDataError::normalize_store_error)?;
        let review = self
            .review_repository
            .get_review(game_id)
            .await
            .map_err(UserDataError::normalize_store_error)?;

        let combined = GameWithUserData {
            game_id,
            rating,
            review,
        };
        Ok(combined.has_any_data().then_some(combined))
    }

    /// Joins every requested game against both stores, in input order.
    ///
    /// Output cardinality always equals input cardinality: games with
    /// neither rating nor review still get an entry with both fields None.
    /// Any non-positive id fails the whole request up front, and requests
    /// larger than `BATCH_SIZE` are resolved chunk by chunk, with the first
    /// failing chunk aborting the rest; no partial results either way.
    #[instrument(skip(self, game_ids), fields(requested = game_ids.len()))]
    pub async fn get_games_with_user_data(
        &self,
        game_ids: &[i64],
    ) -> Result<Vec<GameWithUserData>, UserDataError> {
        if game_ids.is_empty() {
            return Ok(Vec::new());
        }

        for &game_id in game_ids {
            validate_game_id(game_id)?;
        }

        let mut results = Vec::with_capacity(game_ids.len());
        for chunk in game_ids.chunks(BATCH_SIZE) {
            let ratings = self
                .rating_repository
                .get_ratings_for_games(chunk)
                .await
                .map_err(UserDataError::normalize_store_error)?;
            let reviews = self
                .review_repository
                .get_reviews_for_games(chunk)
                .await
                .map_err(UserDataError::normalize_store_error)?;

            for &game_id in chunk {
                results.push(GameWithUserData {
                    game_id,
                    rating: ratings.get(&game_id).cloned(),
                    review: reviews.get(&game_id).cloned(),
                });
            }
        }

        debug!(returned = results.len(), "Joined games with user data");
        Ok(results)
    }
}
