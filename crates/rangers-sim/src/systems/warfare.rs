//! Faction warfare: squad dispatch, squad transit and planetary skirmishes.
//!
//! Every garrison loss, whether from a skirmish or from a battle the player
//! won, goes through [`destroy_vessel`].

use rangers_core::constants::{LARGE_SQUAD_CHANCE, LARGE_SQUAD_MIN_TIME, SKIRMISH_CHANCE};
use rangers_core::enums::Faction;
use rangers_core::rng::{rand_iterate_index, RandomSource};
use rangers_core::types::PlanetId;
use rangers_core::world::{Squad, World};

/// Result of an attempt to send a squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Dispatched,
    /// The garrison is too small to spare a squad.
    NotEnoughVessels,
    /// No planet in range qualifies as a target.
    NoTarget,
}

/// Remove one of `faction`'s vessels from the planet.
///
/// Returns `true` when this was the controlling faction's last vessel and
/// the planet became unclaimed. Production on such a planet is cancelled.
pub fn destroy_vessel(world: &mut World, planet: PlanetId, faction: Faction) -> bool {
    let p = world.planet_mut(planet);
    let slot = &mut p.garrison[faction.index()];
    if *slot == 0 {
        return false;
    }
    *slot -= 1;
    let lost_control = *slot == 0 && p.faction == faction;
    if lost_control {
        p.faction = Faction::None;
        p.vessel_production = None;
        tracing::info!(planet = %p.info.name, faction = faction.name(), "planet lost its last defender");
    }
    world.stats.vessels_lost[faction.index()] += 1;
    lost_control
}

/// Move squads along and land the ones that arrived.
pub fn update_squads(world: &mut World, delta: f64) {
    let mut arrived = Vec::new();
    world.squads.retain_mut(|squad| {
        squad.dist -= squad.speed * delta;
        if squad.dist <= 0.0 {
            arrived.push((squad.destination, squad.faction, squad.vessels));
            false
        } else {
            true
        }
    });

    // Arrivals land regardless of who holds the planet now.
    for (destination, faction, vessels) in arrived {
        let planet = world.planet_mut(destination);
        planet.garrison[faction.index()] += vessels;
        tracing::debug!(
            planet = %planet.info.name,
            faction = faction.name(),
            vessels,
            "squad arrived"
        );
    }
}

/// Fight one round of skirmishes on every contested planet.
pub fn resolve_skirmishes<R: RandomSource>(world: &mut World, rng: &mut R) {
    for i in 0..world.planets.len() {
        let id = PlanetId(i);
        let mut present: Vec<Faction> = world.planet(id).present_factions().collect();
        if present.len() < 2 || !rng.chance(SKIRMISH_CHANCE) {
            continue;
        }
        rng.shuffle(&mut present);
        let (loser, winner) = if rng.coin_flip() {
            (present[0], present[1])
        } else {
            (present[1], present[0])
        };
        if !destroy_vessel(world, id, loser) {
            continue;
        }

        let name = world.planet(id).info.name.clone();
        let player_faction = world.player.faction;
        let text = if loser == player_faction {
            format!("We lost control over {name}")
        } else if winner == player_faction {
            format!("{name} is liberated from the enemy forces")
        } else {
            format!("{} lost {name} to {}", loser.name(), winner.name())
        };
        world.push_event(text);
    }
}

/// Decide whether a controlled planet launches an attack or capture squad.
pub fn schedule_actions<R: RandomSource>(world: &mut World, id: PlanetId, rng: &mut R) {
    let planet = world.planet(id);
    let vessels = planet.vessels(planet.faction);
    let attack_ready = planet.timers.attack == 0.0;
    let capture_ready = planet.timers.capture == 0.0;

    if attack_ready {
        let delay = if vessels < 10 && rng.chance(0.8) {
            rng.float_range(60.0, 100.0)
        } else if vessels < 20 && rng.chance(0.5) {
            rng.float_range(20.0, 150.0)
        } else {
            match try_attack(world, id, rng) {
                DispatchOutcome::Dispatched => rng.float_range(70.0, 300.0),
                DispatchOutcome::NotEnoughVessels => rng.float_range(60.0, 100.0),
                DispatchOutcome::NoTarget => rng.float_range(20.0, 40.0),
            }
        };
        world.planet_mut(id).timers.attack = delay;
        return;
    }

    if capture_ready {
        let delay = if vessels < 10 && rng.chance(0.9) {
            rng.float_range(60.0, 100.0)
        } else {
            match try_capture(world, id, rng) {
                DispatchOutcome::Dispatched => rng.float_range(150.0, 400.0),
                DispatchOutcome::NotEnoughVessels => rng.float_range(60.0, 100.0),
                DispatchOutcome::NoTarget => rng.float_range(40.0, 80.0),
            }
        };
        world.planet_mut(id).timers.capture = delay;
    }
}

/// Send a squad against a planet held by another faction.
pub fn try_attack<R: RandomSource>(world: &mut World, source: PlanetId, rng: &mut R) -> DispatchOutcome {
    let src = world.planet(source);
    let faction = src.faction;
    let garrison = src.vessels(faction);
    let origin = src.position();

    if garrison <= rng.int_range(5, 15) {
        return DispatchOutcome::NotEnoughVessels;
    }

    let mut size = rng.int_range(3, 6);
    let large = rng.chance(LARGE_SQUAD_CHANCE) && world.game_time.hours() > LARGE_SQUAD_MIN_TIME;
    if large {
        size *= 2;
    }
    if size > garrison {
        size = garrison.saturating_sub(rng.int_range(2, 4));
    }
    if size == 0 {
        return DispatchOutcome::NotEnoughVessels;
    }

    let planets = &world.planets;
    let target = rand_iterate_index(rng, planets.len(), |rng, i| {
        let p = &planets[i];
        if !p.is_controlled() || p.faction == faction {
            return false;
        }
        origin.distance(p.position()) <= rng.float_range(50.0, 100.0)
    });
    let Some(target) = target.map(PlanetId) else {
        return DispatchOutcome::NoTarget;
    };

    let mut speed = rng.float_range(5.0, 9.0);
    if large {
        speed /= 2.0;
    }

    let source_name = world.planet(source).info.name.clone();
    let target_name = world.planet(target).info.name.clone();
    if faction == world.player.faction {
        world.push_event(format!("Allies start an attack operation on {target_name}"));
    } else if large {
        world.push_event(format!(
            "{source_name} (controlled by {}) dispatched a large group of vessels",
            faction.name()
        ));
    }

    dispatch(world, source, target, size, speed);
    world.stats.attack_squads += 1;
    DispatchOutcome::Dispatched
}

/// Send a squad to claim an unclaimed planet.
pub fn try_capture<R: RandomSource>(world: &mut World, source: PlanetId, rng: &mut R) -> DispatchOutcome {
    let src = world.planet(source);
    let garrison = src.vessels(src.faction);
    let origin = src.position();

    if garrison <= rng.int_range(5, 10) {
        return DispatchOutcome::NotEnoughVessels;
    }
    let size = rng.int_range(1, 3).min(garrison);

    let planets = &world.planets;
    let target = rand_iterate_index(rng, planets.len(), |rng, i| {
        let p = &planets[i];
        if p.is_controlled() || p.id == source {
            return false;
        }
        origin.distance(p.position()) <= rng.float_range(70.0, 110.0)
    });
    let Some(target) = target.map(PlanetId) else {
        return DispatchOutcome::NoTarget;
    };

    let speed = rng.float_range(6.0, 11.0);
    dispatch(world, source, target, size, speed);
    world.stats.capture_squads += 1;
    DispatchOutcome::Dispatched
}

fn dispatch(world: &mut World, source: PlanetId, target: PlanetId, vessels: u32, speed: f64) {
    let dist = world.planet(source).distance_to(world.planet(target));
    let src = world.planet_mut(source);
    let faction = src.faction;
    src.garrison[faction.index()] -= vessels;

    tracing::debug!(
        faction = faction.name(),
        source = source.0,
        target = target.0,
        vessels,
        dist,
        "squad dispatched"
    );
    world.squads.push(Squad {
        faction,
        vessels,
        speed,
        dist,
        destination: target,
    });
}
