//! Hostile encounters and scripted pirate raids.

use rangers_core::constants::{
    ALLIED_ENCOUNTER_FACTOR, MAX_PIRATE_RAIDS, PIRATE_MIN_BATTLES, PIRATE_MIN_HULL,
    UNCLAIMED_ENCOUNTER_FACTOR,
};
use rangers_core::enums::{Faction, Relation};
use rangers_core::rng::{rand_iterate, RandomSource};
use rangers_core::vessel::VesselDesign;
use rangers_core::world::World;
use rangers_procgen::vesselgen::{create_vessel_design, pirate_design};

/// Roll this hour's encounter. Returns the vessel that intercepts the player.
pub fn run<R: RandomSource>(world: &mut World, rng: &mut R) -> Option<VesselDesign> {
    if let Some(pirate) = pirate_raid(world, rng) {
        return Some(pirate);
    }

    let player = &world.player;
    let planet = world.current_planet();
    let chance = player.mode.encounter_chance()
        * match planet.relation_to(player.faction) {
            Relation::Allied => ALLIED_ENCOUNTER_FACTOR,
            Relation::Unclaimed => UNCLAIMED_ENCOUNTER_FACTOR,
            Relation::Hostile => 1.0,
        };
    if !rng.chance(chance) {
        return None;
    }

    let hostile: Vec<Faction> = planet
        .present_factions()
        .filter(|&f| f.is_some() && f != player.faction)
        .collect();
    let faction = *rand_iterate(rng, &hostile, |_, _| true)?;

    tracing::debug!(
        planet = %planet.info.name,
        faction = faction.name(),
        mode = ?player.mode,
        "hostile encounter"
    );
    Some(create_vessel_design(rng, player.battles, faction))
}

/// Pirates strike once their countdown runs out, but only when the player
/// is healthy and experienced enough; otherwise the countdown restarts short.
fn pirate_raid<R: RandomSource>(world: &mut World, rng: &mut R) -> Option<VesselDesign> {
    if world.timers.pirate > 0.0 || world.pirate_seq >= MAX_PIRATE_RAIDS {
        return None;
    }

    let player = &world.player;
    if player.vessel_hp >= PIRATE_MIN_HULL && player.battles >= PIRATE_MIN_BATTLES {
        world.timers.pirate = rng.float_range(200.0, 500.0);
        tracing::debug!(raid = world.pirate_seq, "pirate raid");
        return Some(pirate_design(rng, world.pirate_seq));
    }

    world.timers.pirate = rng.float_range(20.0, 40.0);
    None
}
