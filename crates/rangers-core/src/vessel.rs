//! Vessel designs.

use serde::{Deserialize, Serialize};

use crate::enums::{Faction, VesselImage};
use crate::weapons::{weapon_ref, WeaponDesign};

/// Stats and loadout of a vessel.
///
/// Enemy designs are fixed once rolled; the player's design is upgraded in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselDesign {
    pub faction: Faction,
    pub image: VesselImage,

    pub max_hp: f64,
    pub max_energy: f64,
    /// Energy restored per second.
    pub energy_regen: f64,
    pub max_speed: f64,
    pub acceleration: f64,
    /// Radians per second.
    pub rotation_speed: f64,

    #[serde(with = "weapon_ref")]
    pub main_weapon: Option<&'static WeaponDesign>,
    #[serde(with = "weapon_ref")]
    pub secondary_weapon: Option<&'static WeaponDesign>,

    /// Difficulty tier 0-3, used for reward scaling.
    pub challenge: u8,
    pub elite: bool,
    /// Set when the vessel is the last of its faction guarding a controlled planet.
    pub last_defender: bool,
}

impl VesselDesign {
    /// Whether the weapon is fitted in either slot.
    pub fn has_weapon(&self, weapon: &WeaponDesign) -> bool {
        self.main_weapon.is_some_and(|w| w.name == weapon.name)
            || self.secondary_weapon.is_some_and(|w| w.name == weapon.name)
    }

    /// Fit a weapon into the slot matching its kind, replacing what was there.
    pub fn fit_weapon(&mut self, weapon: &'static WeaponDesign) {
        if weapon.primary {
            self.main_weapon = Some(weapon);
        } else {
            self.secondary_weapon = Some(weapon);
        }
    }

    pub fn is_pirate(&self) -> bool {
        self.image == VesselImage::Pirate
    }
}
