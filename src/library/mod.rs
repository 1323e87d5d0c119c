pub mod models;
pub mod service;

pub use models::GameWithUserData;
pub use service::LibraryService;

/// Maximum ids resolved per store round-trip; larger requests are chunked
pub const BATCH_SIZE: usize = 100;
