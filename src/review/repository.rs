use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::UserReview;
use crate::shared::UserDataError;

/// Trait for review persistence operations
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Atomically creates or updates the review for a game.
    /// Same upsert contract as ratings: creation stamps both timestamps,
    /// an update keeps created_at and refreshes text + updated_at under
    /// one critical section.
    async fn upsert_review(
        &self,
        game_id: i64,
        review_text: &str,
    ) -> Result<UserReview, UserDataError>;

    async fn get_review(&self, game_id: i64) -> Result<Option<UserReview>, UserDataError>;

    /// Deleting a review that does not exist is a silent no-op
    async fn delete_review(&self, game_id: i64) -> Result<(), UserDataError>;

    /// All reviews sorted by updated_at descending
    async fn get_all_reviews(&self) -> Result<Vec<UserReview>, UserDataError>;

    /// Multi-get for batch joins; absent ids are simply missing from the map
    async fn get_reviews_for_games(
        &self,
        game_ids: &[i64],
    ) -> Result<HashMap<i64, UserReview>, UserDataError>;
}

/// In-memory implementation of ReviewRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryReviewRepository {
    reviews: Arc<RwLock<HashMap<i64, UserReview>>>,
}

impl InMemoryReviewRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    #[instrument(skip(self, review_text))]
    async fn upsert_review(
        &self,
        game_id: i64,
        review_text: &str,
    ) -> Result<UserReview, UserDataError> {
        let mut reviews = self.reviews.write().await;

        let record = match reviews.get_mut(&game_id) {
            Some(existing) => {
                existing.update(review_text.to_string());
                debug!(game_id = %game_id, "Updated existing review");
                existing.clone()
            }
            None => {
                let created = UserReview::new(game_id, review_text.to_string());
                reviews.insert(game_id, created.clone());
                debug!(game_id = %game_id, "Created new review");
                created
            }
        };

        Ok(record)
    }

    #[instrument(skip(self))]
    async fn get_review(&self, game_id: i64) -> Result<Option<UserReview>, UserDataError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.get(&game_id).cloned())
    }

    #[instrument(skip(self))]
    async fn delete_review(&self, game_id: i64) -> Result<(), UserDataError> {
        let mut reviews = self.reviews.write().await;
        if reviews.remove(&game_id).is_some() {
            debug!(game_id = %game_id, "Deleted review");
        } else {
            debug!(game_id = %game_id, "No review to delete");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_all_reviews(&self) -> Result<Vec<UserReview>, UserDataError> {
        let reviews = self.reviews.read().await;
        let mut all: Vec<UserReview> = reviews.values().cloned().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    #[instrument(skip(self, game_ids))]
    async fn get_reviews_for_games(
        &self,
        game_ids: &[i64],
    ) -> Result<HashMap<i64, UserReview>, UserDataError> {
        let reviews = self.reviews.read().await;
        let found = game_ids
            .iter()
            .filter_map(|id| reviews.get(id).map(|r| (*id, r.clone())))
            .collect();
        Ok(found)
    }
}
