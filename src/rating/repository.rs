use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::models::UserRating;
use crate::shared::UserDataError;

/// Trait for rating persistence operations
#[async_trait]
pub trait RatingRepository: Send + Sync {
    /// Atomically creates or updates the rating for a game.
    /// Creation sets created_at = updated_at = now; an update keeps the
    /// original created_at and refreshes rating + updated_at in a single
    /// critical section so concurrent writers for the same game serialize.
    async fn upsert_rating(&self, game_id: i64, rating: u8) -> Result<UserRating, UserDataError>;

    async fn get_rating(&self, game_id: i64) -> Result<Option<UserRating>, UserDataError>;

    /// Deleting a rating that does not exist is a silent no-op
    async fn delete_rating(&self, game_id: i64) -> Result<(), UserDataError>;

    /// All ratings sorted by updated_at descending
    async fn get_all_ratings(&self) -> Result<Vec<UserRating>, UserDataError>;

    /// Multi-get for batch joins; absent ids are simply missing from the map
    async fn get_ratings_for_games(
        &self,
        game_ids: &[i64],
    ) -> Result<HashMap<i64, UserRating>, UserDataError>;
}

/// In-memory implementation of RatingRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryRatingRepository {
    ratings: Arc<RwLock<HashMap<i64, UserRating>>>,
}

impl InMemoryRatingRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            ratings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    #[instrument(skip(self))]
    async fn upsert_rating(&self, game_id: i64, rating: u8) -> Result<UserRating, UserDataError> {
        let mut ratings = self.ratings.write().await;

        let record = match ratings.get_mut(&game_id) {
            Some(existing) => {
                existing.update(rating);
                debug!(game_id = %game_id, rating = %rating, "Updated existing rating");
                existing.clone()
            }
            None => {
                let created = UserRating::new(game_id, rating);
                ratings.insert(game_id, created.clone());
                debug!(game_id = %game_id, rating = %rating, "Created new rating");
                created
            }
        };

        Ok(record)
    }

    #[instrument(skip(self))]
    async fn get_rating(&self, game_id: i64) -> Result<Option<UserRating>, UserDataError> {
        let ratings = self.ratings.read().await;
        Ok(ratings.get(&game_id).cloned())
    }

    #[instrument(skip(self))]
    async fn delete_rating(&self, game_id: i64) -> Result<(), UserDataError> {
        let mut ratings = self.ratings.write().await;
        if ratings.remove(&game_id).is_some() {
            debug!(game_id = %game_id, "Deleted rating");
        } else {
            debug!(game_id = %game_id, "No rating to delete");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_all_ratings(&self) -> Result<Vec<UserRating>, UserDataError> {
        let ratings = self.ratings.read().await;
        let mut all: Vec<UserRating> = ratings.values().cloned().collect();
        all.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(all)
    }

    #[instrument(skip(self, game_ids))]
    async fn get_ratings_for_games(
        &self,
        game_ids: &[i64],
    ) -> Result<HashMap<i64, UserRating>, UserDataError> {
        let ratings = self.ratings.read().await;
        let found = game_ids
            .iter()
            .filter_map(|id| ratings.get(id).map(|r| (*id, r.clone())))
            .collect();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upsert_and_get_rating() {
        let repo = InMemoryRatingRepository::new();

        repo.upsert_rating(1, 4).await.unwrap();

        let rating = repo.get_rating(1).await.unwrap().unwrap();
        assert_eq!(rating.game_id, 1);
        assert_eq!(rating.rating, 4);
        assert_eq!(rating.created_at, rating.updated_at);
    }

    #[tokio::test]
    async fn get_missing_rating_returns_none() {
        let repo = InMemoryRatingRepository::new();
        assert!(repo.get_rating(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_preserves_created_at() {
        let repo = InMemoryRatingRepository::new();

        let first = repo.upsert_rating(1, 2).await.unwrap();
        let second = repo.upsert_rating(1, 5).await.unwrap();

        assert_eq!(second.created_at, first.created_at);
        assert_eq!(second.rating, 5);
        assert!(second.updated_at >= first.updated_at);

        // Still exactly one record for the game
        let all = repo.get_all_ratings().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn upserting_same_value_still_refreshes_updated_at() {
        let repo = InMemoryRatingRepository::new();

        let first = repo.upsert_rating(1, 3).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        let second = repo.upsert_rating(1, 3).await.unwrap();

        assert_eq!(second.rating, 3);
        assert!(second.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn delete_missing_rating_is_a_noop() {
        let repo = InMemoryRatingRepository::new();
        repo.delete_rating(42).await.unwrap();
        assert!(repo.get_rating(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_removes_rating() {
        let repo = InMemoryRatingRepository::new();
        repo.upsert_rating(1, 5).await.unwrap();

        repo.delete_rating(1).await.unwrap();

        assert!(repo.get_rating(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_ratings_sorted_by_updated_at_desc() {
        let repo = InMemoryRatingRepository::new();
        for game_id in 1..=3 {
            repo.upsert_rating(game_id, 4).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }
        // Touch game 1 so it becomes the most recent
        repo.upsert_rating(1, 5).await.unwrap();

        let all = repo.get_all_ratings().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].game_id, 1);
        assert!(all.windows(2).all(|w| w[0].updated_at >= w[1].updated_at));
    }

    #[tokio::test]
    async fn multi_get_skips_missing_ids() {
        let repo = InMemoryRatingRepository::new();
        repo.upsert_rating(1, 3).await.unwrap();
        repo.upsert_rating(3, 4).await.unwrap();

        let found = repo.get_ratings_for_games(&[1, 2, 3]).await.unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.contains_key(&1));
        assert!(!found.contains_key(&2));
        assert!(found.contains_key(&3));
    }

    #[tokio::test]
    async fn concurrent_upserts_for_different_games_do_not_interfere() {
        let repo = Arc::new(InMemoryRatingRepository::new());

        let mut handles = Vec::new();
        for game_id in 1..=20 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.upsert_rating(game_id, 5).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let all = repo.get_all_ratings().await.unwrap();
        assert_eq!(all.len(), 20);
    }
}
