pub mod models;
pub mod service;

pub use models::{ActivityType, RecentActivity};
pub use service::ActivityService;

/// Feed size used when the caller does not specify one
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// Review bodies in the feed are cut down to this many characters;
/// the full text stays behind `get_user_review`
pub const REVIEW_PREVIEW_LENGTH: usize = 100;
