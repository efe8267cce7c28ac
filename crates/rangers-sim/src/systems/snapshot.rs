//! Snapshot system: builds the read-only StatusSnapshot for status panels.
//!
//! This system never modifies the world.

use rangers_core::state::{NewsView, PlanetView, StatusSnapshot};
use rangers_core::world::World;

/// Build a complete StatusSnapshot from the current world state.
pub fn build_snapshot(world: &World) -> StatusSnapshot {
    let player = &world.player;

    StatusSnapshot {
        day: world.game_time.day(),
        hour: world.game_time.hour(),
        credits: player.credits,
        fuel: player.fuel,
        max_fuel: player.max_fuel,
        cargo: player.cargo,
        max_cargo: player.max_cargo,
        hull_percent: (player.vessel_hp * 100.0).round() as u32,
        experience: player.experience,
        rank: player.rank(),
        faction: player.faction,
        planet: world.current_planet().name().to_string(),
        mode: player.mode,
        squads_in_transit: world.squads.len(),
        planets: build_planets(world),
        news: build_news(world),
    }
}

fn build_planets(world: &World) -> Vec<PlanetView> {
    world
        .planets
        .iter()
        .map(|planet| PlanetView {
            name: planet.name().to_string(),
            controller: planet.faction,
            relation: planet.relation_to(world.player.faction),
            player_here: planet.id == world.player.planet,
        })
        .collect()
}

fn build_news(world: &World) -> Vec<NewsView> {
    world
        .recent_events()
        .map(|event| NewsView {
            time: event.time.to_string(),
            text: event.text.clone(),
        })
        .collect()
}
