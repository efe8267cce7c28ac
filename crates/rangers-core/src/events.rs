//! Events emitted by the simulation for the game shell.

use serde::{Deserialize, Serialize};

use crate::enums::Mode;
use crate::vessel::VesselDesign;

/// Everything the battle collaborator needs to stage a fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleInfo {
    pub player: VesselDesign,
    pub enemy: VesselDesign,
    pub player_hp: f64,
}

/// Outcome reported back by the battle collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleResults {
    pub victory: bool,
    /// Remaining hull as a fraction of max HP.
    pub hp: f64,
}

/// Notifications for the game shell, drained after each call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A choice was resolved and the player entered a new mode.
    ChoiceResolved { mode: Mode },
    /// A real-time battle has to be played out.
    BattleStarted { battle: Box<BattleInfo> },
    GameOver { victory: bool },
}
