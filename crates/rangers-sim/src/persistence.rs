//! Save states: the whole session as one JSON document.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rangers_core::events::BattleInfo;
use rangers_core::mailbox::Mailbox;
use rangers_core::world::World;

use crate::choice::Choice;
use crate::engine::SimConfig;
use crate::pending::PendingEvent;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save state serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything needed to resume a session exactly where it stopped,
/// including the generator state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveState {
    pub config: SimConfig,
    pub world: World,
    pub rng: ChaCha8Rng,
    pub pending_event: Mailbox<PendingEvent>,
    pub active_battle: Option<BattleInfo>,
    pub choices: Option<Vec<Choice>>,
    pub note: Option<String>,
}

pub fn encode(state: &SaveState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(state)?)
}

pub fn decode(data: &str) -> Result<SaveState, PersistenceError> {
    Ok(serde_json::from_str(data)?)
}
