//! Global offers: the upgrade lab's stock and delivery quests.

use rangers_core::enums::LabUpgrade;
use rangers_core::rng::RandomSource;
use rangers_core::types::PlanetId;
use rangers_core::world::{Quest, World};

/// Tick the global timers and reroll whatever came due.
pub fn update<R: RandomSource>(world: &mut World, rng: &mut R, delta: f64) {
    world.timers.tick(delta);

    if world.timers.upgrade_reroll == 0.0 {
        world.timers.upgrade_reroll = f64::from(rng.int_range(5, 15));
        world.upgrade_available = rng
            .pick(&LabUpgrade::ALL)
            .copied()
            .unwrap_or_default();
        tracing::debug!(upgrade = ?world.upgrade_available, "upgrade offer rerolled");
    }

    check_quest(world);

    if world.timers.quest_reroll == 0.0 {
        world.timers.quest_reroll = f64::from(rng.int_range(60, 130));
        if world.current_quest.as_ref().is_some_and(|q| !q.active) {
            world.current_quest = None;
        }
        if world.current_quest.is_none() {
            world.current_quest = roll_quest(world, rng);
        }
    }
}

/// Cancel the quest once either endpoint leaves the player's faction.
fn check_quest(world: &mut World) {
    let Some(quest) = &world.current_quest else {
        return;
    };
    let faction = world.player.faction;
    if world.planet(quest.giver).faction == faction && world.planet(quest.receiver).faction == faction {
        return;
    }

    if quest.active {
        let text = format!(
            "Quest failed: the delivery from {} to {} was called off",
            world.planet(quest.giver).info.name,
            world.planet(quest.receiver).info.name,
        );
        world.push_event(text);
    }
    world.current_quest = None;
}

/// Offer a delivery between two random allied planets.
pub fn roll_quest<R: RandomSource>(world: &World, rng: &mut R) -> Option<Quest> {
    let mut allied: Vec<PlanetId> = world
        .planets
        .iter()
        .filter(|p| p.faction == world.player.faction)
        .map(|p| p.id)
        .collect();
    if allied.len() < 2 {
        return None;
    }
    rng.shuffle(&mut allied);

    let quest = Quest {
        giver: allied[0],
        receiver: allied[1],
        credits: rng.int_range(20, 200),
        experience: rng.int_range(10, 60),
        active: false,
    };
    tracing::debug!(giver = quest.giver.0, receiver = quest.receiver.0, "quest rolled");
    Some(quest)
}
