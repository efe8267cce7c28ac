//! Procedural enemy vessel designs.
//!
//! The player's battle count acts as the difficulty knob: it drives the
//! challenge tier, which scales energy, hull and the weapon tables.

use rangers_core::enums::{Faction, VesselImage};
use rangers_core::rng::RandomSource;
use rangers_core::vessel::VesselDesign;
use rangers_core::weapons::{find_weapon, WeaponDesign};

type Loadout = (Option<&'static WeaponDesign>, Option<&'static WeaponDesign>);

/// Roll the challenge tier (0-3) for the next battle.
///
/// More battles make higher tiers likelier, but lower tiers always keep
/// some probability.
pub fn battle_challenge<R: RandomSource>(rng: &mut R, battles: u32) -> u8 {
    match battles {
        0..=2 => 0,
        3..=4 => {
            if rng.chance(0.6) {
                1
            } else {
                0
            }
        }
        5..=8 => {
            if rng.chance(0.6) {
                2
            } else if rng.chance(0.6) {
                1
            } else {
                0
            }
        }
        9..=14 => {
            if rng.chance(0.4) {
                3
            } else if rng.chance(0.6) {
                2
            } else if rng.chance(0.6) {
                1
            } else {
                0
            }
        }
        _ => {
            if rng.chance(0.7) {
                3
            } else if rng.chance(0.6) {
                2
            } else if rng.chance(0.8) {
                1
            } else {
                0
            }
        }
    }
}

/// Roll an enemy vessel of `faction` for a player with `battles` fights behind them.
///
/// # Panics
///
/// Panics for factions without a vessel line (`None` and `Alpha`).
pub fn create_vessel_design<R: RandomSource>(
    rng: &mut R,
    battles: u32,
    faction: Faction,
) -> VesselDesign {
    let challenge = battle_challenge(rng, battles);
    let elite = challenge >= 1 && rng.chance(0.2);
    let tier = f64::from(challenge);

    let max_energy = f64::from(75 + rng.int_range(5, 50)) + tier * 15.0;
    let energy_regen = 1.25 + rng.float_range(0.1, 0.3) + tier * 0.2;
    let (main_weapon, secondary_weapon) = roll_loadout(rng, challenge);

    let mut design = VesselDesign {
        faction,
        image: VesselImage::default(),
        max_hp: 0.0,
        max_energy,
        energy_regen,
        max_speed: 0.0,
        acceleration: 0.0,
        rotation_speed: 0.0,
        main_weapon,
        secondary_weapon,
        challenge,
        elite,
        last_defender: false,
    };

    match faction {
        Faction::Beta => {
            design.max_hp = f64::from(rng.int_range(70, 110)) + tier * 25.0;
            design.max_speed = f64::from(rng.int_range(180, 240));
            design.acceleration = f64::from(rng.int_range(40, 50));
            design.rotation_speed = rng.float_range(1.4, 2.0);
            if elite {
                design.rotation_speed -= rng.float_range(0.2, 0.6);
                design.max_speed -= f64::from(rng.int_range(20, 40));
                design.max_hp += f64::from(rng.int_range(40, 80));
                design.image = VesselImage::BetaBig;
            } else {
                design.image = VesselImage::BetaSmall;
            }
        }
        Faction::Gamma => {
            design.max_hp = f64::from(rng.int_range(110, 140)) + tier * 35.0;
            design.max_speed = f64::from(rng.int_range(90, 120));
            design.acceleration = f64::from(rng.int_range(100, 140));
            design.rotation_speed = rng.float_range(2.2, 2.8);
            if elite {
                design.rotation_speed -= rng.float_range(0.2, 0.6);
                design.max_speed -= f64::from(rng.int_range(20, 40));
                design.max_hp += f64::from(rng.int_range(70, 120));
                design.image = VesselImage::GammaBig;
            } else {
                design.image = VesselImage::GammaSmall;
            }
        }
        Faction::None | Faction::Alpha => panic!("unexpected faction {faction:?}"),
    }

    tracing::debug!(
        faction = faction.name(),
        challenge,
        elite,
        main = main_weapon.map(|w| w.name),
        secondary = secondary_weapon.map(|w| w.name),
        "rolled vessel design"
    );
    design
}

/// Pirate raider. Each raid in the sequence gets tougher.
pub fn pirate_design<R: RandomSource>(rng: &mut R, raid_seq: u32) -> VesselDesign {
    let seq = f64::from(raid_seq);
    let main = if rng.chance(0.8) {
        "Scatter Gun"
    } else {
        "Trident"
    };
    VesselDesign {
        faction: Faction::None,
        image: VesselImage::Pirate,
        max_hp: f64::from(rng.int_range(120, 150)) + seq * 50.0,
        max_energy: f64::from(rng.int_range(200, 300)) + seq * 30.0,
        energy_regen: 2.0,
        max_speed: 200.0,
        acceleration: 80.0,
        rotation_speed: 0.5,
        main_weapon: Some(find_weapon(main)),
        secondary_weapon: None,
        challenge: 2,
        elite: false,
        last_defender: false,
    }
}

/// Fixed training opponent.
pub fn marauder_design() -> VesselDesign {
    VesselDesign {
        faction: Faction::None,
        image: VesselImage::Marauder,
        max_hp: 150.0,
        max_energy: 120.0,
        energy_regen: 3.0,
        max_speed: 180.0,
        acceleration: 90.0,
        rotation_speed: 2.5,
        main_weapon: Some(find_weapon("Pulse Laser")),
        secondary_weapon: Some(find_weapon("Homing Missile Launcher")),
        challenge: 0,
        elite: false,
        last_defender: false,
    }
}

/// The vessel a new ranger starts with.
pub fn starter_design(faction: Faction) -> VesselDesign {
    VesselDesign {
        faction,
        image: VesselImage::Player,
        max_hp: 100.0,
        max_energy: 100.0,
        energy_regen: 2.0,
        max_speed: 180.0,
        acceleration: 90.0,
        rotation_speed: 2.2,
        main_weapon: Some(find_weapon("Ion Cannon")),
        secondary_weapon: None,
        challenge: 0,
        elite: false,
        last_defender: false,
    }
}

fn roll_loadout<R: RandomSource>(rng: &mut R, challenge: u8) -> Loadout {
    match challenge {
        0 => tier0_loadout(rng),
        1 => {
            if rng.chance(0.2) {
                tier0_loadout(rng)
            } else {
                tier1_loadout(rng)
            }
        }
        2 => {
            let roll = rng.float();
            if roll <= 0.1 {
                tier0_loadout(rng)
            } else if roll < 0.3 {
                tier1_loadout(rng)
            } else {
                tier2_loadout(rng)
            }
        }
        _ => {
            let roll = rng.float();
            if roll <= 0.1 {
                tier1_loadout(rng)
            } else if roll < 0.3 {
                tier2_loadout(rng)
            } else {
                tier3_loadout(rng)
            }
        }
    }
}

/// Rookies carry a single weapon.
fn tier0_loadout<R: RandomSource>(rng: &mut R) -> Loadout {
    if rng.chance(0.7) {
        let roll = rng.float();
        let name = if roll <= 0.6 {
            "Ion Cannon"
        } else if roll <= 0.9 {
            "Pulse Laser"
        } else {
            "Photon Cannon"
        };
        (Some(find_weapon(name)), None)
    } else {
        let name = if rng.chance(0.6) {
            "Missile Launcher"
        } else {
            "Homing Missile Launcher"
        };
        (None, Some(find_weapon(name)))
    }
}

fn tier1_loadout<R: RandomSource>(rng: &mut R) -> Loadout {
    let roll = rng.float();
    let main = if roll <= 0.4 {
        "Ion Cannon"
    } else if roll <= 0.7 {
        "Pulse Laser"
    } else if roll <= 0.85 {
        "Scatter Gun"
    } else {
        "Assault Laser"
    };
    let secondary = if rng.chance(0.6) {
        "Homing Missile Launcher"
    } else {
        "Missile Launcher"
    };
    (Some(find_weapon(main)), Some(find_weapon(secondary)))
}

fn tier2_loadout<R: RandomSource>(rng: &mut R) -> Loadout {
    let roll = rng.float();
    let main = if roll <= 0.4 {
        "Assault Laser"
    } else if roll <= 0.7 {
        "Scatter Gun"
    } else {
        "Trident"
    };
    let roll = rng.float();
    let secondary = if roll <= 0.4 {
        "Homing Missile Launcher"
    } else if roll <= 0.6 {
        "Missile Launcher"
    } else if roll <= 0.95 {
        "Torpedo Launcher"
    } else {
        "Firestorm"
    };
    (Some(find_weapon(main)), Some(find_weapon(secondary)))
}

fn tier3_loadout<R: RandomSource>(rng: &mut R) -> Loadout {
    let roll = rng.float();
    let main = if roll <= 0.3 {
        "Assault Laser"
    } else if roll <= 0.5 {
        "Scatter Gun"
    } else if roll <= 0.9 {
        "Trident"
    } else {
        "Lance"
    };
    let roll = rng.float();
    let secondary = if roll <= 0.4 {
        "Torpedo Launcher"
    } else if roll <= 0.7 {
        "Firestorm"
    } else {
        "Homing Missile Launcher"
    };
    (Some(find_weapon(main)), Some(find_weapon(secondary)))
}
