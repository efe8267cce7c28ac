//! Battle handoff: staging a fight and folding its result back into the world.

use rangers_core::enums::{Artifact, Mode};
use rangers_core::events::{BattleInfo, BattleResults};
use rangers_core::player::BattleRewards;
use rangers_core::rng::RandomSource;
use rangers_core::vessel::VesselDesign;
use rangers_core::world::World;

use crate::systems::warfare;

/// Loot odds of one challenge tier.
struct RewardTier {
    experience: (u32, u32),
    credits_chance: f64,
    credits: (u32, u32),
    cargo_chance: f64,
    cargo: (u32, u32),
}

const REWARD_TIERS: [RewardTier; 4] = [
    RewardTier {
        experience: (5, 10),
        credits_chance: 0.0,
        credits: (0, 0),
        cargo_chance: 0.3,
        cargo: (2, 6),
    },
    RewardTier {
        experience: (15, 25),
        credits_chance: 0.2,
        credits: (5, 10),
        cargo_chance: 0.4,
        cargo: (2, 10),
    },
    RewardTier {
        experience: (40, 60),
        credits_chance: 0.4,
        credits: (15, 30),
        cargo_chance: 0.5,
        cargo: (2, 16),
    },
    RewardTier {
        experience: (100, 150),
        credits_chance: 0.7,
        credits: (25, 50),
        cargo_chance: 0.6,
        cargo: (3, 25),
    },
];

const ARTIFACT_DROP_CHANCE: f64 = 0.15;

/// Everything the combat collaborator needs for the fight against `enemy`.
pub fn stage(world: &World, enemy: VesselDesign) -> BattleInfo {
    BattleInfo {
        player: world.player.design.clone(),
        enemy,
        player_hp: world.player.vessel_hp,
    }
}

/// Roll the loot for a battle outcome. A lost battle yields nothing.
pub fn roll_rewards<R: RandomSource>(
    rng: &mut R,
    world: &World,
    enemy: &VesselDesign,
    results: BattleResults,
) -> BattleRewards {
    if !results.victory {
        return BattleRewards::default();
    }

    let tier_index = usize::from(enemy.challenge).min(REWARD_TIERS.len() - 1);
    let tier = &REWARD_TIERS[tier_index];

    let mut experience = rng.int_range(tier.experience.0, tier.experience.1);
    if enemy.elite {
        experience *= 2;
    }
    let credits = if tier.credits_chance > 0.0 && rng.chance(tier.credits_chance) {
        rng.int_range(tier.credits.0, tier.credits.1)
    } else {
        0
    };
    let cargo = if rng.chance(tier.cargo_chance) {
        rng.int_range(tier.cargo.0, tier.cargo.1)
    } else {
        0
    };
    let fuel = if credits == 0 && cargo == 0 && world.player.fuel < 70 && rng.chance(0.6) {
        rng.int_range(2, 10)
    } else {
        0
    };

    let artifact = if tier_index >= 2 && rng.chance(ARTIFACT_DROP_CHANCE) {
        let missing: Vec<Artifact> = Artifact::ALL
            .into_iter()
            .filter(|&a| !world.has_artifact(a))
            .collect();
        rng.pick(&missing).copied()
    } else {
        None
    };

    BattleRewards {
        victory: true,
        experience,
        credits,
        cargo,
        fuel,
        artifact,
        system_liberated: enemy.last_defender,
    }
}

/// Apply a finished battle to the world and stage its rewards.
///
/// A victory over a faction vessel removes it from the local garrison.
pub fn resolve<R: RandomSource>(
    world: &mut World,
    rng: &mut R,
    battle: &BattleInfo,
    results: BattleResults,
) -> BattleRewards {
    let rewards = roll_rewards(rng, world, &battle.enemy, results);

    world.player.set_hull(results.hp);
    world.player.battles += 1;

    let faction = battle.enemy.faction;
    if results.victory && faction.is_some() {
        let planet = world.player.planet;
        if warfare::destroy_vessel(world, planet, faction) {
            let name = world.planet(planet).info.name.clone();
            world.push_event(format!("{} lost control over {name}", faction.name()));
        }
    }

    tracing::info!(
        victory = results.victory,
        hp = results.hp,
        challenge = battle.enemy.challenge,
        "battle finished"
    );
    world.player.battle_rewards.post(rewards.clone());
    world.player.mode = Mode::AfterCombat;
    rewards
}
