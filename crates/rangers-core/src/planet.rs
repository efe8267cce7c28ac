//! Planets: static catalog data plus per-game dynamic state.

use std::borrow::Cow;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{Faction, Relation};
use crate::types::PlanetId;

/// Immutable reference data about a planet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetInfo {
    pub name: Cow<'static, str>,
    /// Real-world name of the body.
    pub alias: Cow<'static, str>,
    pub gas_giant: bool,
    /// Position on the galactic map.
    pub map_offset: DVec2,
}

impl PlanetInfo {
    pub const fn new(
        name: &'static str,
        alias: &'static str,
        gas_giant: bool,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            alias: Cow::Borrowed(alias),
            gas_giant,
            map_offset: DVec2::new(x, y),
        }
    }
}

/// The star system's planets, outermost first.
pub static PLANETS: [PlanetInfo; 8] = [
    PlanetInfo::new("Planet VIII", "Neptune", true, 14.0, 37.0),
    PlanetInfo::new("Planet VII", "Uranus", true, 34.0, 19.0),
    PlanetInfo::new("Planet VI", "Saturn", true, 39.0, 125.0),
    PlanetInfo::new("Planet V", "Jupiter", true, 38.0, 80.0),
    PlanetInfo::new("Planet IV", "Mars", false, 95.0, 30.0),
    PlanetInfo::new("Planet III", "Earth", false, 80.0, 67.0),
    PlanetInfo::new("Planet II", "Venus", false, 97.0, 94.0),
    PlanetInfo::new("Planet I", "Mercury", false, 125.0, 102.0),
];

/// Countdown timers of a planet, in hours. They stop at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetTimers {
    pub resource_gen: f64,
    pub weapons_reroll: f64,
    pub shop_swap: f64,
    pub minerals: f64,
    pub attack: f64,
    pub capture: f64,
}

impl PlanetTimers {
    pub fn tick(&mut self, delta: f64) {
        for timer in [
            &mut self.resource_gen,
            &mut self.weapons_reroll,
            &mut self.shop_swap,
            &mut self.minerals,
            &mut self.attack,
            &mut self.capture,
        ] {
            *timer = (*timer - delta).max(0.0);
        }
    }
}

/// Planet areas the player already visited during the current docking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitStatus {
    pub minerals_market: bool,
    pub news: bool,
    pub quest_board: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub info: PlanetInfo,
    /// Controlling faction, `Faction::None` while unclaimed.
    pub faction: Faction,
    /// Vessels stationed here, per faction slot.
    pub garrison: [u32; Faction::COUNT],
    /// Progress towards claiming the planet; only grows while it is unclaimed.
    pub influence: [f64; Faction::COUNT],
    pub garrison_limit: u32,
    pub mineral_deposit: u32,
    pub timers: PlanetTimers,
    /// Remaining hours of the vessel being built, if any.
    pub vessel_production: Option<f64>,
    /// Whether the local shop sells weapons rather than workshop upgrades.
    pub shop_mode_weapons: bool,
    pub weapons_available: Vec<String>,
    pub visited: VisitStatus,
}

impl Planet {
    pub fn new(id: PlanetId, info: PlanetInfo) -> Self {
        Self {
            id,
            info,
            faction: Faction::None,
            garrison: [0; Faction::COUNT],
            influence: [0.0; Faction::COUNT],
            garrison_limit: 0,
            mineral_deposit: 0,
            timers: PlanetTimers::default(),
            vessel_production: None,
            shop_mode_weapons: false,
            weapons_available: Vec::new(),
            visited: VisitStatus::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn position(&self) -> DVec2 {
        self.info.map_offset
    }

    pub fn distance_to(&self, other: &Planet) -> f64 {
        self.position().distance(other.position())
    }

    pub fn is_controlled(&self) -> bool {
        self.faction.is_some()
    }

    pub fn vessels(&self, faction: Faction) -> u32 {
        self.garrison[faction.index()]
    }

    pub fn total_vessels(&self) -> u32 {
        self.garrison.iter().sum()
    }

    /// Factions with at least one vessel stationed here.
    pub fn present_factions(&self) -> impl Iterator<Item = Faction> + '_ {
        Faction::ALL
            .into_iter()
            .filter(|f| self.garrison[f.index()] > 0)
    }

    /// The faction holding the planet alone, if exactly one is present.
    pub fn sole_presence(&self) -> Option<Faction> {
        let mut present = self.present_factions();
        match (present.next(), present.next()) {
            (Some(f), None) => Some(f),
            _ => None,
        }
    }

    pub fn relation_to(&self, faction: Faction) -> Relation {
        if !self.is_controlled() {
            Relation::Unclaimed
        } else if self.faction == faction {
            Relation::Allied
        } else {
            Relation::Hostile
        }
    }
}
