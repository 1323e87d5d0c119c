pub mod models;
pub mod repository;
pub mod service;

pub use models::UserRating;
pub use repository::{InMemoryRatingRepository, RatingRepository};
pub use service::RatingService;
