// Library crate for the user ratings/reviews core of a game tracking app
// This file exposes the public API for integration tests and consumers

pub mod activity;
pub mod catalog;
pub mod library;
pub mod rating;
pub mod review;
pub mod shared;
pub mod stats;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use activity::{ActivityService, ActivityType, RecentActivity};
pub use catalog::{GameCatalog, GameSummary, PlaceholderCatalog};
pub use library::{GameWithUserData, LibraryService};
pub use rating::{InMemoryRatingRepository, RatingRepository, RatingService, UserRating};
pub use review::{InMemoryReviewRepository, ReviewRepository, ReviewService, UserReview};
pub use shared::{AppState, UserDataError};
pub use stats::{StatsService, UserRatingStats};
