use async_trait::async_trait;

/// Display data for a game as resolved by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub name: String,
    pub image_url: String,
}

/// Seam to the game catalog collaborator.
/// The core never validates game ids against the catalog; it only asks for
/// display data when assembling the activity feed. Real deployments inject a
/// catalog-backed implementation here.
#[async_trait]
pub trait GameCatalog: Send + Sync {
    async fn get_game_summary(&self, game_id: i64) -> GameSummary;
}

/// Synthesizes placeholder display data from the game id alone.
/// Used by the in-memory wiring and in tests.
pub struct PlaceholderCatalog;

#[async_trait]
impl GameCatalog for PlaceholderCatalog {
    async fn get_game_summary(&self, game_id: i64) -> GameSummary {
        GameSummary {
            name: format!("Game {game_id}"),
            image_url: String::new(),
        }
    }
}
