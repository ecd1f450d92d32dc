use std::sync::Arc;
use tokio::sync::Mutex;

use crate::models::game::GameState;

/// Shared handle to the one game session. Owned by the composition root and
/// cloned into whatever drives the game; operations stay methods on
/// [`GameState`], serialized by the mutex.
#[derive(Clone, Default)]
pub struct AppState {
    pub game: Arc<Mutex<GameState>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            game: Arc::new(Mutex::new(GameState::new())),
        }
    }

    /// Point-in-time copy of the session, for rendering or serialization.
    pub async fn snapshot(&self) -> GameState {
        self.game.lock().await.clone()
    }
}
