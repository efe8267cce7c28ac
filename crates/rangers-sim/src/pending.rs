//! Queued one-off interactions that pre-empt the normal choice menu.

use serde::{Deserialize, Serialize};

use rangers_core::vessel::VesselDesign;

/// A special interaction waiting for the next choice generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PendingEvent {
    /// A hostile vessel engages the player. `interrupt` is set when the
    /// encounter cut a time advance short.
    Battle {
        enemy: Box<VesselDesign>,
        interrupt: bool,
    },
    FuelScavenge,
    MineralsHunt,
    ScanArea,
    TakeQuest,
    CompleteQuest,
    News,
    BuyFuel,
    UpgradeLab,
    WeaponShop,
    Workshop,
    Shipyard,
    SellMinerals,
}
