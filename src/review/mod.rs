pub mod models;
pub mod repository;
pub mod service;

pub use models::UserReview;
pub use repository::{InMemoryReviewRepository, ReviewRepository};
pub use service::ReviewService;
