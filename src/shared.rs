use std::sync::Arc;
use thiserror::Error;

use crate::activity::ActivityService;
use crate::catalog::{GameCatalog, PlaceholderCatalog};
use crate::library::LibraryService;
use crate::rating::repository::{InMemoryRatingRepository, RatingRepository};
use crate::rating::RatingService;
use crate::review::repository::{InMemoryReviewRepository, ReviewRepository};
use crate::review::ReviewService;
use crate::stats::StatsService;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub rating_repository: Arc<dyn RatingRepository + Send + Sync>,
    pub review_repository: Arc<dyn ReviewRepository + Send + Sync>,
    pub catalog: Arc<dyn GameCatalog + Send + Sync>,
    pub rating_service: Arc<RatingService>,
    pub review_service: Arc<ReviewService>,
    pub stats_service: Arc<StatsService>,
    pub activity_service: Arc<ActivityService>,
    pub library_service: Arc<LibraryService>,
}

impl AppState {
    pub fn new(
        rating_repository: Arc<dyn RatingRepository + Send + Sync>,
        review_repository: Arc<dyn ReviewRepository + Send + Sync>,
        catalog: Arc<dyn GameCatalog + Send + Sync>,
    ) -> Self {
        let rating_service = Arc::new(RatingService::new(rating_repository.clone()));
        let review_service = Arc::new(ReviewService::new(review_repository.clone()));
        let stats_service = Arc::new(StatsService::new(
            rating_repository.clone(),
            review_repository.clone(),
        ));
        let activity_service = Arc::new(ActivityService::new(
            rating_repository.clone(),
            review_repository.clone(),
            catalog.clone(),
        ));
        let library_service = Arc::new(LibraryService::new(
            rating_repository.clone(),
            review_repository.clone(),
        ));

        Self {
            rating_repository,
            review_repository,
            catalog,
            rating_service,
            review_service,
            stats_service,
            activity_service,
            library_service,
        }
    }

    /// Wires the bundled in-memory store and placeholder catalog.
    /// Production callers inject durable implementations instead.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRatingRepository::new()),
            Arc::new(InMemoryReviewRepository::new()),
            Arc::new(PlaceholderCatalog),
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UserDataError {
    #[error("Invalid game id: {0}")]
    InvalidGameId(i64),

    #[error("Invalid rating: {0} (must be between 1 and 5)")]
    InvalidRating(u8),

    #[error("Review text cannot be empty")]
    EmptyReview,

    #[error("Review is too long: {length} characters (max {max})")]
    ReviewTooLong { length: usize, max: usize },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("No rating found for game {0}")]
    RatingNotFound(i64),

    #[error("No review found for game {0}")]
    ReviewNotFound(i64),

    #[error("Game not found: {0}")]
    GameNotFound(i64),

    #[error("A rating already exists for game {0}")]
    RatingAlreadyExists(i64),

    #[error("A review already exists for game {0}")]
    ReviewAlreadyExists(i64),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl UserDataError {
    /// Short message suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        match self {
            UserDataError::InvalidGameId(_) => "That game could not be identified.".to_string(),
            UserDataError::InvalidRating(_) => "Ratings must be between 1 and 5 stars.".to_string(),
            UserDataError::EmptyReview => "Your review cannot be empty.".to_string(),
            UserDataError::ReviewTooLong { max, .. } => {
                format!("Your review is too long (max {max} characters).")
            }
            UserDataError::Validation(msg) => msg.clone(),
            UserDataError::RatingNotFound(_) => "You haven't rated this game yet.".to_string(),
            UserDataError::ReviewNotFound(_) => "You haven't reviewed this game yet.".to_string(),
            UserDataError::GameNotFound(_) => "This game could not be found.".to_string(),
            UserDataError::RatingAlreadyExists(_) => {
                "You have already rated this game.".to_string()
            }
            UserDataError::ReviewAlreadyExists(_) => {
                "You have already reviewed this game.".to_string()
            }
            UserDataError::Database(_) | UserDataError::Unknown(_) => {
                "Something went wrong. Please try again.".to_string()
            }
            UserDataError::Network(_) => {
                "Connection problem. Check your network and try again.".to_string()
            }
        }
    }

    /// Whether the presentation layer should offer a retry action.
    /// Validation and not-found outcomes are terminal; only infrastructure
    /// failures are worth retrying.
    pub fn can_retry(&self) -> bool {
        matches!(
            self,
            UserDataError::Database(_) | UserDataError::Network(_) | UserDataError::Unknown(_)
        )
    }

    /// Suggested corrective action for the user.
    pub fn suggested_action(&self) -> &'static str {
        match self {
            UserDataError::InvalidGameId(_) | UserDataError::GameNotFound(_) => {
                "Pick a game from your library and try again."
            }
            UserDataError::InvalidRating(_) => "Choose a star rating between 1 and 5.",
            UserDataError::EmptyReview => "Write something before submitting.",
            UserDataError::ReviewTooLong { .. } => "Shorten your review and resubmit.",
            UserDataError::Validation(_) => "Correct the highlighted input and try again.",
            UserDataError::RatingNotFound(_) => "Rate the game first.",
            UserDataError::ReviewNotFound(_) => "Review the game first.",
            UserDataError::RatingAlreadyExists(_) | UserDataError::ReviewAlreadyExists(_) => {
                "Edit your existing entry instead."
            }
            UserDataError::Database(_) | UserDataError::Unknown(_) => "Try again in a moment.",
            UserDataError::Network(_) => "Check your connection and retry.",
        }
    }

    /// Normalizes errors crossing the service boundary: infrastructure
    /// variants pass through, anything else coming out of a store is a
    /// programmer error and gets wrapped as Unknown with its cause.
    pub(crate) fn normalize_store_error(self) -> UserDataError {
        match self {
            err @ (UserDataError::Database(_)
            | UserDataError::Network(_)
            | UserDataError::Unknown(_)) => err,
            other => UserDataError::Unknown(other.to_string()),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_not_retryable() {
        assert!(!UserDataError::InvalidGameId(-1).can_retry());
        assert!(!UserDataError::InvalidRating(6).can_retry());
        assert!(!UserDataError::EmptyReview.can_retry());
        assert!(!UserDataError::ReviewTooLong {
            length: 1001,
            max: 1000
        }
        .can_retry());
    }

    #[test]
    fn infrastructure_errors_are_retryable() {
        assert!(UserDataError::Database("connection reset".to_string()).can_retry());
        assert!(UserDataError::Network("timeout".to_string()).can_retry());
        assert!(UserDataError::Unknown("boom".to_string()).can_retry());
    }

    #[test]
    fn every_error_carries_a_user_message_and_action() {
        let errors = vec![
            UserDataError::InvalidGameId(0),
            UserDataError::InvalidRating(0),
            UserDataError::EmptyReview,
            UserDataError::ReviewTooLong {
                length: 1200,
                max: 1000,
            },
            UserDataError::Validation("limit must be positive".to_string()),
            UserDataError::RatingNotFound(1),
            UserDataError::ReviewNotFound(1),
            UserDataError::GameNotFound(1),
            UserDataError::RatingAlreadyExists(1),
            UserDataError::ReviewAlreadyExists(1),
            UserDataError::Database("down".to_string()),
            UserDataError::Network("offline".to_string()),
            UserDataError::Unknown("?".to_string()),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty());
            assert!(!err.suggested_action().is_empty());
        }
    }

    #[test]
    fn normalize_store_error_wraps_non_infrastructure_variants() {
        let wrapped = UserDataError::InvalidRating(9).normalize_store_error();
        assert!(matches!(wrapped, UserDataError::Unknown(_)));

        let passthrough = UserDataError::Database("down".to_string()).normalize_store_error();
        assert_eq!(passthrough, UserDataError::Database("down".to_string()));
    }
}
