//! World clock: the only place simulated time moves forward.

use rangers_core::constants::{
    FUEL_GENERATOR_CHANCE, REPAIR_BOTS_AMOUNT, REPAIR_BOTS_CHANCE, SUBSTEPS_PER_HOUR, SUBSTEP_HOURS,
};
use rangers_core::enums::{Artifact, GameOutcome};
use rangers_core::events::SimEvent;
use rangers_core::mailbox::Mailbox;
use rangers_core::rng::RandomSource;
use rangers_core::types::PlanetId;
use rangers_core::world::World;

use crate::pending::PendingEvent;
use crate::systems::{economy, encounters, offers, warfare};

/// Simulate `hours` whole hours.
///
/// Returns `false` when the advance stopped early, either because an
/// encounter was posted to `pending` or because the game ended. Hours
/// already simulated stay applied.
pub fn advance_time<R: RandomSource>(
    world: &mut World,
    rng: &mut R,
    hours: u32,
    pending: &mut Mailbox<PendingEvent>,
    events: &mut Vec<SimEvent>,
) -> bool {
    if world.outcome.is_some() {
        return false;
    }
    let passive = world.player.mode.is_passive();

    for _ in 0..hours {
        world.game_time.advance();

        if world.player_faction_won() {
            world.outcome = Some(GameOutcome::Victory);
            tracing::info!(game_time = world.game_time.hours(), "player faction controls the system");
            events.push(SimEvent::GameOver { victory: true });
            return false;
        }

        if world.game_time.is_day_boundary() {
            let salary = world.player.salary();
            world.player.credits = world.player.credits.saturating_add(salary);
        }

        if passive {
            apply_artifacts(world, rng);
        }

        if let Some(enemy) = encounters::run(world, rng) {
            pending.post(PendingEvent::Battle {
                enemy: Box::new(enemy),
                interrupt: true,
            });
            return false;
        }

        for _ in 0..SUBSTEPS_PER_HOUR {
            update_world(world, rng, SUBSTEP_HOURS);
        }
        warfare::resolve_skirmishes(world, rng);
    }
    true
}

/// One sub-step of world simulation.
pub fn update_world<R: RandomSource>(world: &mut World, rng: &mut R, delta: f64) {
    offers::update(world, rng, delta);
    warfare::update_squads(world, delta);

    for i in 0..world.planets.len() {
        let id = PlanetId(i);
        economy::update_planet(world, id, rng, delta);
        if world.planet(id).is_controlled() {
            warfare::schedule_actions(world, id, rng);
            economy::update_production(world, id, rng, delta);
        }
    }
}

fn apply_artifacts<R: RandomSource>(world: &mut World, rng: &mut R) {
    if world.has_artifact(Artifact::FuelGenerator) && rng.chance(FUEL_GENERATOR_CHANCE) {
        world.player.add_fuel(1);
    }
    if world.has_artifact(Artifact::RepairBots) && rng.chance(REPAIR_BOTS_CHANCE) {
        world.player.repair_hull(REPAIR_BOTS_AMOUNT);
    }
}
