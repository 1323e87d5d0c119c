pub mod models;
pub mod service;

pub use models::UserRatingStats;
pub use service::StatsService;
