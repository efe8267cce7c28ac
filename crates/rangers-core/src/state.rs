//! Status snapshot for the presentation layer's status panels.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, Mode, Relation};

/// Read-only view of the world shown next to the choice list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub day: u32,
    pub hour: u32,
    pub credits: u32,
    pub fuel: u32,
    pub max_fuel: u32,
    pub cargo: u32,
    pub max_cargo: u32,
    /// Hull integrity in whole percent.
    pub hull_percent: u32,
    pub experience: u32,
    pub rank: u32,
    pub faction: Faction,
    pub planet: String,
    pub mode: Mode,
    pub squads_in_transit: usize,
    pub planets: Vec<PlanetView>,
    pub news: Vec<NewsView>,
}

/// A planet on the galactic map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetView {
    pub name: String,
    pub controller: Faction,
    pub relation: Relation,
    pub player_here: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsView {
    /// Formatted as "Day D, HH:00".
    pub time: String,
    pub text: String,
}
