//! Static weapon catalog.
//!
//! Weapon designs are never mutated at runtime. Vessels refer to them by
//! `&'static WeaponDesign`, and persist them by catalog name.

use glam::DVec2;

/// A weapon blueprint.
#[derive(Debug, PartialEq)]
pub struct WeaponDesign {
    pub name: &'static str,
    /// Shop price in credits.
    pub cost: u32,

    // --- Damage ---
    pub damage: f64,
    /// Seconds between shots.
    pub reload: f64,
    /// Energy spent per shot. Secondary weapons use none.
    pub energy_cost: f64,
    /// Damage converted into the target's energy drain.
    pub energy_conversion: f64,
    /// Whether shields can block the projectile.
    pub blockable: bool,
    pub primary: bool,

    // --- Projectile ---
    pub max_range: f64,
    pub projectile_speed: f64,
    pub projectile_size: f64,
    /// Homing turn rate; zero for unguided projectiles.
    pub homing: f64,

    // --- Burst ---
    pub burst: usize,
    /// Launch point of each projectile in a burst, relative to the muzzle.
    pub fire_offsets: &'static [DVec2],
    /// Heading change of each projectile in a burst.
    pub rotation_deltas: &'static [f64],

    // --- Assets ---
    pub projectile_image: &'static str,
    pub fire_sound: &'static str,
    pub explosion: Option<&'static str>,
    pub explosion_sound: Option<&'static str>,
}

const SINGLE_OFFSET: &[DVec2] = &[DVec2::ZERO];
const SINGLE_DELTA: &[f64] = &[0.0];

/// Every weapon in the game.
pub static WEAPONS: [WeaponDesign; 11] = [
    WeaponDesign {
        name: "Photon Cannon",
        cost: 100,
        damage: 12.0,
        reload: 0.9,
        energy_cost: 6.0,
        energy_conversion: 3.0,
        blockable: true,
        primary: true,
        max_range: 1600.0,
        projectile_speed: 500.0,
        projectile_size: 10.0,
        homing: 0.0,
        burst: 1,
        fire_offsets: SINGLE_OFFSET,
        rotation_deltas: SINGLE_DELTA,
        projectile_image: "projectile_photon",
        fire_sound: "photon_shot",
        explosion: Some("photon_cannon_impact"),
        explosion_sound: None,
    },
    WeaponDesign {
        name: "Pulse Laser",
        cost: 210,
        damage: 8.0,
        reload: 0.2,
        energy_cost: 5.0,
        energy_conversion: 2.0,
        blockable: true,
        primary: true,
        max_range: 350.0,
        projectile_speed: 280.0,
        projectile_size: 6.0,
        homing: 0.0,
        burst: 1,
        fire_offsets: SINGLE_OFFSET,
        rotation_deltas: SINGLE_DELTA,
        projectile_image: "projectile_pulse_laser",
        fire_sound: "laser_shot",
        explosion: None,
        explosion_sound: None,
    },
    WeaponDesign {
        name: "Ion Cannon",
        cost: 150,
        damage: 10.0,
        reload: 0.4,
        energy_cost: 4.0,
        energy_conversion: 0.5,
        blockable: true,
        primary: true,
        max_range: 450.0,
        projectile_speed: 320.0,
        projectile_size: 8.0,
        homing: 0.0,
        burst: 1,
        fire_offsets: SINGLE_OFFSET,
        rotation_deltas: SINGLE_DELTA,
        projectile_image: "projectile_ion",
        fire_sound: "ion_shot",
        explosion: Some("ion_cannon_impact"),
        explosion_sound: Some("ion_cannon_impact"),
    },
    WeaponDesign {
        name: "Assault Laser",
        cost: 440,
        damage: 6.0,
        reload: 0.2,
        energy_cost: 4.0,
        energy_conversion: 2.5,
        blockable: true,
        primary: true,
        max_range: 260.0,
        projectile_speed: 400.0,
        projectile_size: 6.0,
        homing: 0.0,
        burst: 2,
        fire_offsets: &[DVec2::new(0.0, -6.0), DVec2::new(0.0, 6.0)],
        rotation_deltas: &[0.0, 0.0],
        projectile_image: "projectile_assault_laser",
        fire_sound: "laser_shot",
        explosion: Some("assault_laser_impact"),
        explosion_sound: None,
    },
    WeaponDesign {
        name: "Scatter Gun",
        cost: 520,
        damage: 8.0,
        reload: 0.4,
        energy_cost: 9.0,
        energy_conversion: 1.2,
        blockable: true,
        primary: true,
        max_range: 350.0,
        projectile_speed: 450.0,
        projectile_size: 6.0,
        homing: 0.0,
        burst: 7,
        fire_offsets: &[
            DVec2::new(0.0, -9.0),
            DVec2::new(0.0, -6.0),
            DVec2::new(0.0, -3.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 3.0),
            DVec2::new(0.0, 6.0),
            DVec2::new(0.0, 9.0),
        ],
        rotation_deltas: &[-0.45, -0.3, -0.15, 0.0, 0.15, 0.3, 0.45],
        projectile_image: "projectile_scatter",
        fire_sound: "scatter_shot",
        explosion: Some("scatter_gun_impact"),
        explosion_sound: None,
    },
    WeaponDesign {
        name: "Trident",
        cost: 650,
        damage: 14.0,
        reload: 0.5,
        energy_cost: 14.0,
        energy_conversion: 1.8,
        blockable: true,
        primary: true,
        max_range: 380.0,
        projectile_speed: 350.0,
        projectile_size: 8.0,
        homing: 0.0,
        burst: 3,
        fire_offsets: &[
            DVec2::new(0.0, -25.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 25.0),
        ],
        rotation_deltas: &[0.025, 0.0, -0.025],
        projectile_image: "projectile_trident",
        fire_sound: "trident_shot",
        explosion: Some("trident_impact"),
        explosion_sound: None,
    },
    WeaponDesign {
        name: "Lance",
        cost: 900,
        damage: 35.0,
        reload: 0.7,
        energy_cost: 12.0,
        energy_conversion: 2.5,
        blockable: true,
        primary: true,
        max_range: 2600.0,
        projectile_speed: 550.0,
        projectile_size: 12.0,
        homing: 0.0,
        burst: 1,
        fire_offsets: SINGLE_OFFSET,
        rotation_deltas: SINGLE_DELTA,
        projectile_image: "projectile_lance",
        fire_sound: "lance_shot",
        explosion: Some("lance_impact"),
        explosion_sound: None,
    },
    WeaponDesign {
        name: "Missile Launcher",
        cost: 200,
        damage: 20.0,
        reload: 3.5,
        energy_cost: 0.0,
        energy_conversion: 0.0,
        blockable: false,
        primary: false,
        max_range: 700.0,
        projectile_speed: 250.0,
        projectile_size: 10.0,
        homing: 0.0,
        burst: 3,
        fire_offsets: &[
            DVec2::new(0.0, -8.0),
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 8.0),
        ],
        rotation_deltas: &[-0.25, 0.0, 0.25],
        projectile_image: "projectile_missile",
        fire_sound: "missile_launch",
        explosion: Some("explosion_small"),
        explosion_sound: Some("explosion"),
    },
    WeaponDesign {
        name: "Homing Missile Launcher",
        cost: 280,
        damage: 15.0,
        reload: 4.0,
        energy_cost: 0.0,
        energy_conversion: 0.0,
        blockable: false,
        primary: false,
        max_range: 600.0,
        projectile_speed: 230.0,
        projectile_size: 10.0,
        homing: 90.0,
        burst: 2,
        fire_offsets: &[DVec2::new(0.0, -8.0), DVec2::new(0.0, 8.0)],
        rotation_deltas: &[-0.3, 0.3],
        projectile_image: "projectile_homing_missile",
        fire_sound: "missile_launch",
        explosion: Some("explosion_small"),
        explosion_sound: Some("explosion"),
    },
    WeaponDesign {
        name: "Torpedo Launcher",
        cost: 400,
        damage: 40.0,
        reload: 6.0,
        energy_cost: 0.0,
        energy_conversion: 0.0,
        blockable: false,
        primary: false,
        max_range: 1900.0,
        projectile_speed: 185.0,
        projectile_size: 10.0,
        homing: 125.0,
        burst: 1,
        fire_offsets: SINGLE_OFFSET,
        rotation_deltas: SINGLE_DELTA,
        projectile_image: "projectile_torpedo",
        fire_sound: "torpedo_launch",
        explosion: Some("explosion_big"),
        explosion_sound: Some("explosion_heavy"),
    },
    WeaponDesign {
        name: "Firestorm",
        cost: 550,
        damage: 8.0,
        reload: 5.0,
        energy_cost: 0.0,
        energy_conversion: 0.0,
        blockable: false,
        primary: false,
        max_range: 800.0,
        projectile_speed: 200.0,
        projectile_size: 10.0,
        homing: 80.0,
        burst: 8,
        fire_offsets: &[
            DVec2::new(0.0, -17.0),
            DVec2::new(0.0, -14.0),
            DVec2::new(0.0, -11.0),
            DVec2::new(0.0, -8.0),
            DVec2::new(0.0, 8.0),
            DVec2::new(0.0, 11.0),
            DVec2::new(0.0, 14.0),
            DVec2::new(0.0, 17.0),
        ],
        rotation_deltas: &[-0.4, -0.35, -0.3, -0.25, 0.25, 0.3, 0.35, 0.4],
        projectile_image: "projectile_firestorm",
        fire_sound: "missile_launch",
        explosion: Some("explosion_small"),
        explosion_sound: Some("explosion"),
    },
];

/// Look up a weapon by name, returning `None` for unknown names.
pub fn try_find_weapon(name: &str) -> Option<&'static WeaponDesign> {
    WEAPONS.iter().find(|w| w.name == name)
}

/// Look up a weapon by name.
///
/// # Panics
///
/// Panics when the name is not in the catalog. Callers pass catalog
/// constants, so a miss is a data error.
pub fn find_weapon(name: &str) -> &'static WeaponDesign {
    match try_find_weapon(name) {
        Some(w) => w,
        None => panic!("weapon {name:?} not found"),
    }
}

/// Serde adapter storing an optional weapon reference as its catalog name.
pub mod weapon_ref {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{try_find_weapon, WeaponDesign};

    pub fn serialize<S: Serializer>(
        weapon: &Option<&'static WeaponDesign>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        weapon.map(|w| w.name).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<&'static WeaponDesign>, D::Error> {
        let name: Option<String> = Option::deserialize(deserializer)?;
        name.map(|n| {
            try_find_weapon(&n).ok_or_else(|| D::Error::custom(format!("unknown weapon {n:?}")))
        })
        .transpose()
    }
}
