//! Single dispatch point for resolved choices.

use rangers_core::constants::{EXTRA_SALARY_CAP, RETREAT_FUEL_COST, SHIPYARD_PRICE};
use rangers_core::enums::{GameOutcome, LabUpgrade, Mode, VesselImage, VesselSystem};
use rangers_core::planet::VisitStatus;
use rangers_core::player::BattleRewards;
use rangers_core::rng::RandomSource;
use rangers_core::vessel::VesselDesign;
use rangers_core::weapons::find_weapon;
use rangers_core::world::World;

use crate::choice::ChoiceAction;
use crate::pending::PendingEvent;

/// Result of applying a [`ChoiceAction`].
#[derive(Debug, Clone, PartialEq)]
pub struct ActionEffect {
    pub next_mode: Mode,
    /// Interaction to show on the next choice generation.
    pub follow_up: Option<PendingEvent>,
    /// Battle to hand off to the combat collaborator.
    pub battle: Option<VesselDesign>,
    pub outcome: Option<GameOutcome>,
    /// Short remark prepended to the next narration.
    pub note: Option<String>,
}

impl ActionEffect {
    fn to(next_mode: Mode) -> Self {
        Self {
            next_mode,
            follow_up: None,
            battle: None,
            outcome: None,
            note: None,
        }
    }
}

/// Apply a resolved choice to the world.
pub fn apply<R: RandomSource>(world: &mut World, rng: &mut R, action: ChoiceAction) -> ActionEffect {
    match action {
        ChoiceAction::EnterDocks => {
            world.current_planet_mut().visited = VisitStatus::default();
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::TakeOff | ChoiceAction::LayLow => ActionEffect::to(Mode::Orbiting),
        ChoiceAction::Jump { destination, fuel } => {
            world.player.spend_fuel(fuel);
            world.player.planet = destination;
            tracing::debug!(destination = destination.0, fuel, "jump completed");
            ActionEffect::to(Mode::JustEntered)
        }
        ChoiceAction::HuntEnemies => ActionEffect {
            note: Some("No enemy vessels found.".to_string()),
            ..ActionEffect::to(Mode::Orbiting)
        },
        ChoiceAction::Repair { price } => {
            world.player.spend_credits(price);
            world.player.set_hull(1.0);
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::Open { event, next } => {
            let visited = &mut world.current_planet_mut().visited;
            match &event {
                PendingEvent::SellMinerals => visited.minerals_market = true,
                PendingEvent::News => visited.news = true,
                PendingEvent::TakeQuest => visited.quest_board = true,
                _ => {}
            }
            ActionEffect {
                follow_up: Some(event),
                ..ActionEffect::to(next)
            }
        }

        ChoiceAction::CollectFuel { fuel } => {
            world.player.add_fuel(fuel);
            ActionEffect::to(Mode::Orbiting)
        }
        ChoiceAction::CollectMinerals { found, fuel, damaged } => {
            if rng.chance(0.9) {
                let mut delay = rng.float_range(15.0, 55.0);
                if rng.chance(0.35) {
                    delay *= 2.0;
                }
                world.current_planet_mut().timers.minerals = delay;
            }
            if damaged {
                let damage = rng.float_range(0.1, 0.2);
                world.player.damage_hull(damage);
            }
            world.player.add_fuel(fuel);
            world.player.load_cargo(found);
            ActionEffect::to(Mode::Orbiting)
        }
        ChoiceAction::SellMinerals { credits } => {
            let cargo = std::mem::take(&mut world.player.cargo);
            world.current_planet_mut().mineral_deposit += cargo;
            world.player.credits = world.player.credits.saturating_add(credits);
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::BuyFuel { fuel, cost } => {
            world.player.spend_credits(cost);
            world.player.add_fuel(fuel);
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::AcceptQuest => {
            if let Some(quest) = &mut world.current_quest {
                quest.active = true;
            }
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::DeclineQuest => ActionEffect::to(Mode::Docked),
        ChoiceAction::CompleteQuest { credits, experience } => {
            world.timers.quest_reroll = f64::from(rng.int_range(60, 90));
            world.player.credits = world.player.credits.saturating_add(credits);
            world.player.experience += experience;
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::BuyLabUpgrade(upgrade) => {
            buy_lab_upgrade(world, rng, upgrade);
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::LeaveLab => {
            world.timers.next_upgrade = rng.float_range(2.0, 5.0);
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::BuyWeapon { name } => {
            let weapon = find_weapon(&name);
            world.current_planet_mut().weapons_available.retain(|w| *w != name);
            world.player.spend_credits(weapon.cost);
            world.player.design.fit_weapon(weapon);
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::UpgradeSystem(system) => {
            upgrade_system(world, rng, system);
            ActionEffect::to(Mode::Docked)
        }
        ChoiceAction::BuyImprovedHull => {
            let player = &mut world.player;
            player.spend_credits(SHIPYARD_PRICE);
            player.improved_hull = true;
            player.set_max_cargo(player.max_cargo + 20);
            player.design.image = VesselImage::PlayerElite;
            player.design.max_energy += 20.0;
            player.design.max_hp += 50.0;
            player.design.rotation_speed -= 0.8;
            ActionEffect::to(Mode::Docked)
        }

        ChoiceAction::Fight { enemy } => {
            if enemy.is_pirate() {
                world.pirate_seq += 1;
            }
            ActionEffect {
                battle: Some(*enemy),
                ..ActionEffect::to(Mode::Combat)
            }
        }
        ChoiceAction::Retreat => {
            world.player.spend_fuel(RETREAT_FUEL_COST);
            ActionEffect::to(Mode::Orbiting)
        }
        ChoiceAction::CollectRewards(rewards) => {
            collect_rewards(world, rewards);
            ActionEffect::to(Mode::Orbiting)
        }
        ChoiceAction::Perish => ActionEffect {
            outcome: Some(GameOutcome::Defeat),
            ..ActionEffect::to(world.player.mode)
        },
        ChoiceAction::Done { next } => ActionEffect::to(next),
    }
}

fn buy_lab_upgrade<R: RandomSource>(world: &mut World, rng: &mut R, upgrade: LabUpgrade) {
    world.timers.upgrade_reroll = 0.0;
    world.timers.next_upgrade = rng.float_range(30.0, 45.0);

    let player = &mut world.player;
    player.spend_credits(upgrade.price());
    let (min, max) = upgrade.bonus_range();
    let bonus = rng.int_range(min, max);
    match upgrade {
        LabUpgrade::JumpMaxDistance => player.travel.max_jump_dist += f64::from(bonus),
        LabUpgrade::MaxFuel => player.set_max_fuel(player.max_fuel + bonus),
        LabUpgrade::MaxCargo => player.set_max_cargo(player.max_cargo + bonus),
        LabUpgrade::JumpSpeed => player.travel.jump_speed += f64::from(bonus),
    }
}

fn upgrade_system<R: RandomSource>(world: &mut World, rng: &mut R, system: VesselSystem) {
    let player = &mut world.player;
    let cost = player.upgrades.cost(system);
    player.spend_credits(cost);
    let level = player.upgrades.level(system) + 1;
    *player.upgrades.level_mut(system) = level;

    let design = &mut player.design;
    match system {
        VesselSystem::Armor => {
            design.max_hp += f64::from(rng.int_range(10, 20) + 3 * level);
        }
        VesselSystem::Energy => {
            design.max_energy += f64::from(rng.int_range(10, 20) + 2 * level);
            design.energy_regen += rng.float_range(0.1, 0.2);
        }
        VesselSystem::Speed => design.max_speed += f64::from(rng.int_range(20, 35)),
        VesselSystem::Acceleration => design.acceleration += f64::from(rng.int_range(30, 40)),
        VesselSystem::Rotation => design.rotation_speed += rng.float_range(0.25, 0.4),
    }
}

fn collect_rewards(world: &mut World, rewards: BattleRewards) {
    if let Some(artifact) = rewards.artifact {
        if !world.has_artifact(artifact) {
            world.artifacts.push(artifact);
        }
    }

    let player = &mut world.player;
    player.experience += rewards.experience;
    player.credits = player.credits.saturating_add(rewards.credits);
    player.load_cargo(rewards.cargo);
    player.add_fuel(rewards.fuel);
    if rewards.system_liberated {
        if player.extra_salary < EXTRA_SALARY_CAP {
            player.extra_salary += 3;
        } else {
            player.credits = player.credits.saturating_add(30);
        }
    }
}
