//! The player: vessel, resources and progression.
//!
//! Every resource mutation goes through a clamping method so that fuel,
//! cargo and hull stay within their bounds.

use serde::{Deserialize, Serialize};

use crate::enums::{Artifact, Faction, Mode, VesselSystem};
use crate::mailbox::Mailbox;
use crate::rank;
use crate::types::PlanetId;
use crate::vessel::VesselDesign;

/// Workshop upgrade levels. Each starts at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeLevels {
    pub armor: u32,
    pub energy: u32,
    pub speed: u32,
    pub acceleration: u32,
    pub rotation: u32,
}

impl Default for UpgradeLevels {
    fn default() -> Self {
        Self {
            armor: 1,
            energy: 1,
            speed: 1,
            acceleration: 1,
            rotation: 1,
        }
    }
}

impl UpgradeLevels {
    pub fn level(&self, system: VesselSystem) -> u32 {
        match system {
            VesselSystem::Armor => self.armor,
            VesselSystem::Energy => self.energy,
            VesselSystem::Speed => self.speed,
            VesselSystem::Acceleration => self.acceleration,
            VesselSystem::Rotation => self.rotation,
        }
    }

    pub fn level_mut(&mut self, system: VesselSystem) -> &mut u32 {
        match system {
            VesselSystem::Armor => &mut self.armor,
            VesselSystem::Energy => &mut self.energy,
            VesselSystem::Speed => &mut self.speed,
            VesselSystem::Acceleration => &mut self.acceleration,
            VesselSystem::Rotation => &mut self.rotation,
        }
    }

    /// Credits needed for the next upgrade of `system`.
    pub fn cost(&self, system: VesselSystem) -> u32 {
        let (base, step) = system.cost_curve();
        base + step * self.level(system).saturating_sub(1)
    }
}

/// Loot collected after a battle, waiting for the player to accept it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleRewards {
    pub victory: bool,
    pub experience: u32,
    pub credits: u32,
    pub cargo: u32,
    pub fuel: u32,
    pub artifact: Option<Artifact>,
    /// The defeated vessel was the planet's last defender.
    pub system_liberated: bool,
}

/// Jump drive parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelParams {
    /// Map units travelled per hour.
    pub jump_speed: f64,
    pub max_jump_dist: f64,
    /// Fuel burned per map unit.
    pub fuel_usage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub planet: PlanetId,
    pub faction: Faction,
    pub mode: Mode,

    pub design: VesselDesign,
    pub improved_hull: bool,
    /// Hull integrity as a fraction of max HP.
    pub vessel_hp: f64,
    pub upgrades: UpgradeLevels,
    pub travel: TravelParams,

    pub credits: u32,
    pub fuel: u32,
    pub max_fuel: u32,
    pub cargo: u32,
    pub max_cargo: u32,

    pub experience: u32,
    pub battles: u32,
    /// Daily bonus earned by liberating planets.
    pub extra_salary: u32,

    pub battle_rewards: Mailbox<BattleRewards>,
}

impl Player {
    pub fn rank(&self) -> u32 {
        rank::rank(self.experience)
    }

    pub fn salary(&self) -> u32 {
        rank::salary(self.experience) + self.extra_salary
    }

    pub fn free_cargo_space(&self) -> u32 {
        self.max_cargo.saturating_sub(self.cargo)
    }

    /// Load minerals into the hold and return how much fit.
    pub fn load_cargo(&mut self, amount: u32) -> u32 {
        let loaded = amount.min(self.free_cargo_space());
        self.cargo += loaded;
        loaded
    }

    /// Add fuel up to the tank capacity and return how much fit.
    pub fn add_fuel(&mut self, amount: u32) -> u32 {
        let added = amount.min(self.max_fuel.saturating_sub(self.fuel));
        self.fuel += added;
        added
    }

    pub fn spend_fuel(&mut self, amount: u32) {
        self.fuel = self.fuel.saturating_sub(amount);
    }

    pub fn spend_credits(&mut self, amount: u32) {
        self.credits = self.credits.saturating_sub(amount);
    }

    pub fn damage_hull(&mut self, amount: f64) {
        self.vessel_hp = (self.vessel_hp - amount).clamp(0.0, 1.0);
    }

    pub fn repair_hull(&mut self, amount: f64) {
        self.vessel_hp = (self.vessel_hp + amount).clamp(0.0, 1.0);
    }

    pub fn set_hull(&mut self, hp: f64) {
        self.vessel_hp = hp.clamp(0.0, 1.0);
    }

    pub fn set_max_fuel(&mut self, max_fuel: u32) {
        self.max_fuel = max_fuel;
        self.fuel = self.fuel.min(max_fuel);
    }

    pub fn set_max_cargo(&mut self, max_cargo: u32) {
        self.max_cargo = max_cargo;
        self.cargo = self.cargo.min(max_cargo);
    }
}
