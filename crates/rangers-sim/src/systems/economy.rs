//! Planet economy and territory: timers, shop stock, minerals, influence
//! and vessel production.

use rangers_core::constants::{
    INFLUENCE_CAPTURE_THRESHOLD, NPC_MINERAL_BONUS, NPC_MINERAL_BONUS_CHANCE,
    PRODUCTION_MIN_MINERALS,
};
use rangers_core::enums::Faction;
use rangers_core::planet::Planet;
use rangers_core::rng::RandomSource;
use rangers_core::types::PlanetId;
use rangers_core::world::World;
use rangers_procgen::shop::roll_weapon_selection;

/// Mineral yield multiplier of each faction's mining operations.
fn mining_multiplier(faction: Faction) -> u32 {
    match faction {
        Faction::Beta => 2,
        Faction::Gamma => 3,
        Faction::Alpha | Faction::None => 1,
    }
}

/// Advance a planet's timers, territory and market by `delta` hours.
pub fn update_planet<R: RandomSource>(world: &mut World, id: PlanetId, rng: &mut R, delta: f64) {
    let player_faction = world.player.faction;
    let planet = world.planet_mut(id);
    planet.timers.tick(delta);

    let claimed_by = if planet.is_controlled() {
        None
    } else {
        accrue_influence(planet, delta)
    };
    if claimed_by.is_some() {
        planet.timers.attack = rng.float_range(100.0, 500.0);
        planet.timers.capture = rng.float_range(400.0, 600.0);
    }

    if planet.timers.weapons_reroll == 0.0 {
        planet.timers.weapons_reroll = rng.float_range(28.0, 40.0);
        planet.weapons_available = roll_weapon_selection(rng);
    }

    if planet.timers.shop_swap == 0.0 {
        planet.timers.shop_swap = rng.float_range(10.0, 15.0);
        planet.shop_mode_weapons = rng.coin_flip();
    }

    if planet.timers.resource_gen == 0.0 {
        let mut delay = rng.float_range(30.0, 50.0);
        if planet.info.gas_giant {
            delay *= 2.0;
        }
        planet.timers.resource_gen = delay;
        if planet.is_controlled() {
            let mut minerals = rng.int_range(1, 4) * mining_multiplier(planet.faction);
            if planet.faction != player_faction && rng.chance(NPC_MINERAL_BONUS_CHANCE) {
                minerals += NPC_MINERAL_BONUS;
            }
            planet.mineral_deposit += minerals;
        }
    }

    if let Some(faction) = claimed_by {
        let name = planet.info.name.clone();
        tracing::info!(planet = %name, faction = faction.name(), "planet claimed");
        world.push_event(format!("{} established control over {name}", faction.name()));
    }
}

/// Grow the influence of a lone faction on an unclaimed planet.
///
/// Returns the faction that claimed the planet, if any.
fn accrue_influence(planet: &mut Planet, delta: f64) -> Option<Faction> {
    let sole = planet.sole_presence().filter(|f| f.is_some());
    for faction in Faction::ALL {
        if Some(faction) != sole {
            let influence = &mut planet.influence[faction.index()];
            *influence = (*influence - delta).max(0.0);
        }
    }

    let faction = sole?;
    let vessels = f64::from(planet.vessels(faction));
    let influence = &mut planet.influence[faction.index()];
    *influence += (vessels.ln() + 1.0) * delta;
    if *influence <= INFLUENCE_CAPTURE_THRESHOLD {
        return None;
    }

    planet.influence = [0.0; Faction::COUNT];
    planet.faction = faction;
    Some(faction)
}

/// Advance the vessel production of a controlled planet.
pub fn update_production<R: RandomSource>(world: &mut World, id: PlanetId, rng: &mut R, delta: f64) {
    let planet = world.planet_mut(id);
    let faction = planet.faction;
    if !faction.is_some() {
        return;
    }

    match planet.vessel_production {
        Some(remaining) => {
            let remaining = (remaining - delta).max(0.0);
            if remaining == 0.0 {
                planet.vessel_production = None;
                planet.garrison[faction.index()] += 1;
                world.stats.vessels_produced[faction.index()] += 1;
            } else {
                planet.vessel_production = Some(remaining);
            }
        }
        None => {
            if planet.mineral_deposit >= PRODUCTION_MIN_MINERALS
                && planet.vessels(faction) < planet.garrison_limit
            {
                let cost = rng.int_range(20, 50);
                planet.mineral_deposit = planet.mineral_deposit.saturating_sub(cost);
                planet.vessel_production = Some(f64::from(rng.int_range(40, 100)));
            }
        }
    }
}

/// Demand multiplier and label for selling minerals on a planet holding `deposit`.
pub fn mineral_demand(deposit: u32) -> (f64, &'static str) {
    match deposit {
        0..=49 => (1.8, "high demand"),
        50..=100 => (1.5, "in demand"),
        101..=200 => (1.0, "normal price"),
        201..=300 => (0.75, "low demand"),
        301..=500 => (0.5, "very low demand"),
        _ => (0.2, "no demand"),
    }
}
