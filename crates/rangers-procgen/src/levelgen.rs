//! New game generation.

use rangers_core::enums::{Faction, LabUpgrade, Mode};
use rangers_core::mailbox::Mailbox;
use rangers_core::planet::{Planet, PlanetInfo, PLANETS};
use rangers_core::player::{Player, TravelParams, UpgradeLevels};
use rangers_core::rng::RandomSource;
use rangers_core::types::PlanetId;
use rangers_core::world::World;

use crate::shop::roll_weapon_selection;
use crate::vesselgen::starter_design;

/// Home planets of each faction, by catalog index.
const HOMEWORLDS: [(usize, Faction); 3] = [(0, Faction::Alpha), (2, Faction::Beta), (7, Faction::Gamma)];

/// Chance that an unclaimed planet starts with a small staging group.
const STAGING_GROUP_CHANCE: f64 = 0.3;

/// Build a fresh world from the planet catalog.
pub fn new_world<R: RandomSource>(rng: &mut R) -> World {
    let mut world = world_from_catalog(rng, PLANETS.to_vec());

    for (index, faction) in HOMEWORLDS {
        let planet = &mut world.planets[index];
        planet.faction = faction;
        planet.garrison[faction.index()] = rng.int_range(10, 16);
    }
    for planet in world.planets.iter_mut().filter(|p| !p.is_controlled()) {
        if rng.chance(STAGING_GROUP_CHANCE) {
            let faction = if rng.coin_flip() {
                Faction::Beta
            } else {
                Faction::Gamma
            };
            planet.garrison[faction.index()] = rng.int_range(1, 3);
        }
    }

    tracing::info!(planets = world.planets.len(), "generated new world");
    world
}

/// Build a world over arbitrary planets, with every planet unclaimed and
/// the player allied to Alpha at the first planet.
pub fn world_from_catalog<R: RandomSource>(rng: &mut R, infos: Vec<PlanetInfo>) -> World {
    let planets = infos
        .into_iter()
        .enumerate()
        .map(|(i, info)| {
            let mut planet = Planet::new(PlanetId(i), info);
            planet.garrison_limit = rng.int_range(15, 30);
            planet.mineral_deposit = rng.int_range(20, 120);
            planet.timers.resource_gen = rng.float_range(0.0, 30.0);
            planet.timers.shop_swap = rng.float_range(10.0, 15.0);
            planet.timers.weapons_reroll = rng.float_range(28.0, 40.0);
            planet.timers.attack = rng.float_range(20.0, 100.0);
            planet.timers.capture = rng.float_range(20.0, 100.0);
            planet.shop_mode_weapons = rng.coin_flip();
            planet.weapons_available = roll_weapon_selection(rng);
            planet
        })
        .collect();

    let mut world = World::new(new_player(Faction::Alpha, PlanetId(0)), planets);
    world.timers.pirate = rng.float_range(200.0, 500.0);
    world.timers.quest_reroll = rng.float_range(10.0, 30.0);
    world.upgrade_available = LabUpgrade::default();
    world
}

fn new_player(faction: Faction, planet: PlanetId) -> Player {
    Player {
        planet,
        faction,
        mode: Mode::Orbiting,
        design: starter_design(faction),
        improved_hull: false,
        vessel_hp: 1.0,
        upgrades: UpgradeLevels::default(),
        travel: TravelParams {
            jump_speed: 10.0,
            max_jump_dist: 60.0,
            fuel_usage: 1.0,
        },
        credits: 150,
        fuel: 75,
        max_fuel: 100,
        cargo: 0,
        max_cargo: 40,
        experience: 0,
        battles: 0,
        extra_salary: 0,
        battle_rewards: Mailbox::new(),
    }
}
