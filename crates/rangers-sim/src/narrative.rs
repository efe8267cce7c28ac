//! Event resolver: narration and follow-up choices for pending interactions.
//!
//! Narration uses the short color tags understood by
//! [`crate::flavortext::colorize`].

use rangers_core::constants::{
    EXTRA_SALARY_CAP, FUEL_PRICE, MAX_FUEL_SPEND, RETREAT_FUEL_COST, SHIPYARD_PRICE, TUTORIAL_BATTLES,
};
use rangers_core::enums::{Artifact, Faction, LabUpgrade, Mode, VesselSystem};
use rangers_core::player::BattleRewards;
use rangers_core::rng::RandomSource;
use rangers_core::vessel::VesselDesign;
use rangers_core::weapons::{find_weapon, WeaponDesign};
use rangers_core::world::World;

use crate::choice::{Choice, ChoiceAction, GeneratedChoices};
use crate::pending::PendingEvent;
use crate::systems::economy::mineral_demand;

/// Narrate a pending interaction and offer its follow-up choices.
pub fn describe<R: RandomSource>(world: &mut World, rng: &mut R, event: PendingEvent) -> GeneratedChoices {
    match event {
        PendingEvent::Battle { enemy, interrupt } => battle(world, *enemy, interrupt),
        PendingEvent::FuelScavenge => fuel_scavenge(rng),
        PendingEvent::MineralsHunt => minerals_hunt(world, rng),
        PendingEvent::ScanArea => scan_area(world),
        PendingEvent::TakeQuest => take_quest(world),
        PendingEvent::CompleteQuest => complete_quest(world),
        PendingEvent::News => news(world),
        PendingEvent::BuyFuel => buy_fuel(world),
        PendingEvent::UpgradeLab => upgrade_lab(world),
        PendingEvent::WeaponShop => weapon_shop(world),
        PendingEvent::Workshop => workshop(world),
        PendingEvent::Shipyard => shipyard(world),
        PendingEvent::SellMinerals => sell_minerals(world, rng),
    }
}

fn done(next: Mode) -> Choice {
    Choice::new("Done", ChoiceAction::Done { next })
}

fn narration(lines: Vec<String>, choices: Vec<Choice>) -> GeneratedChoices {
    GeneratedChoices {
        text: lines.join("\n"),
        choices,
    }
}

/// Narrate the outcome of the last battle.
pub fn after_battle(world: &World, rewards: BattleRewards) -> GeneratedChoices {
    if !rewards.victory {
        return narration(
            vec!["Your vessel was destroyed in battle.".to_string()],
            vec![Choice::new(
                "The great ranger's life has come to an end",
                ChoiceAction::Perish,
            )],
        );
    }

    let player = &world.player;
    let mut lines = vec!["You are victorious!".to_string(), String::new()];
    lines.push(format!("Earned <y>{}</> combat experience.", rewards.experience));
    if rewards.credits != 0 {
        lines.push(format!("Found <y>{}</> credits equivalent.", rewards.credits));
    }
    let loaded = rewards.cargo.min(player.free_cargo_space());
    if loaded != 0 {
        lines.push(format!("Scavenged <y>{loaded}</> resource units."));
    }
    if rewards.fuel != 0 {
        lines.push(format!("Recovered <y>{}</> fuel units.", rewards.fuel));
    }
    if let Some(artifact) = rewards.artifact {
        lines.push(format!(
            "Acquired <g>{}</> artifact ({}).",
            artifact.name(),
            artifact.description()
        ));
    }
    if rewards.system_liberated {
        lines.push(String::new());
        if player.extra_salary < EXTRA_SALARY_CAP {
            lines.push("System liberation bonus: <y>+3</> salary.".to_string());
        } else {
            lines.push("System liberation bonus: <y>30</> credits.".to_string());
        }
    }

    narration(lines, vec![Choice::new("Done", ChoiceAction::CollectRewards(rewards))])
}

fn battle(world: &World, mut enemy: VesselDesign, interrupt: bool) -> GeneratedChoices {
    let planet = world.current_planet();
    let player = &world.player;
    enemy.last_defender = enemy.faction.is_some()
        && planet.faction == enemy.faction
        && planet.vessels(enemy.faction) == 1;
    let pirate = enemy.is_pirate();

    let mut lines = Vec::new();
    let mut choices = Vec::new();
    if player.mode == Mode::Attack {
        lines.push("Enemy spotted!".to_string());
    } else if interrupt {
        if pirate {
            lines.push("An <r>unidentified vessel</> opens fire at you.".to_string());
        } else {
            lines.push("Your actions were interrupted by a <r>hostile vessel</>. Prepare for battle.".to_string());
        }
    }
    if player.battles < TUTORIAL_BATTLES {
        lines.extend([
            String::new(),
            "--- <p>Tutorial</> ---".to_string(),
            "Your shield blocks <y>75%</> primary weapon damage and <p>consumes energy</>.".to_string(),
            "Blocking is the most efficient way to recover energy mid-battle.".to_string(),
        ]);
    }

    let retreat = interrupt && pirate && player.fuel >= RETREAT_FUEL_COST;
    choices.push(
        Choice::new("Fight!", ChoiceAction::Fight { enemy: Box::new(enemy) }).with_mode(Mode::Combat),
    );
    if retreat {
        choices.push(Choice::new(
            format!("Retreat [{RETREAT_FUEL_COST} fuel]"),
            ChoiceAction::Retreat,
        ));
    }
    narration(lines, choices)
}

fn fuel_scavenge<R: RandomSource>(rng: &mut R) -> GeneratedChoices {
    let fuel = rng.int_range(3, 12);
    let line = if rng.coin_flip() {
        format!("<y>{fuel}</> fuel units acquired.")
    } else {
        format!("Scavenged <y>{fuel}</> fuel units.")
    };
    narration(vec![line], vec![Choice::new("Done", ChoiceAction::CollectFuel { fuel })])
}

fn minerals_hunt<R: RandomSource>(world: &World, rng: &mut R) -> GeneratedChoices {
    let mut found = rng.int_range(20, 40);
    if rng.chance(0.3) {
        found *= 2;
    }
    if world.has_artifact(Artifact::LuckyCharm) {
        found += rng.int_range(4, 14);
    } else if rng.chance(0.06) {
        found = 0;
    }
    let loaded = found.min(world.player.free_cargo_space());
    let fuel = if rng.chance(0.2) { rng.int_range(4, 8) } else { 0 };
    let damaged = rng.chance(0.4);

    let mut lines = Vec::new();
    if found == 0 {
        lines.push("No valuable minerals found.".to_string());
    } else if loaded < found {
        lines.push(format!("Found <y>{found}</> minerals, but could only collect <y>{loaded}</>."));
    } else {
        lines.push(format!("Collected <y>{loaded}</> minerals."));
    }
    if fuel > 0 {
        lines.push(String::new());
        lines.push(format!(
            "While flying near asteroids, you discovered a shipwreck site. \
             You found recyclable objects worth <y>{fuel}</> fuel units."
        ));
    }
    if damaged {
        lines.push(String::new());
        lines.push("Your vessel hull was damaged during the act.".to_string());
    }

    narration(
        lines,
        vec![Choice::new(
            "Done",
            ChoiceAction::CollectMinerals { found, fuel, damaged },
        )],
    )
}

fn scan_area(world: &World) -> GeneratedChoices {
    let planet = world.current_planet();
    let mut lines = vec!["Scanning area...".to_string(), String::new()];
    let mut detected = false;
    for faction in Faction::ALL {
        let count = planet.vessels(faction);
        if count == 0 {
            continue;
        }
        detected = true;
        let color = if faction == world.player.faction { "g" } else { "r" };
        lines.push(format!("<{color}>{}</> vessels: <y>{count}</>", faction.name()));
    }
    if !detected {
        lines.push("No vessels detected.".to_string());
    }
    narration(lines, vec![done(Mode::Orbiting)])
}

fn take_quest(world: &World) -> GeneratedChoices {
    let Some(quest) = &world.current_quest else {
        return narration(
            vec!["The quest board is empty.".to_string()],
            vec![done(Mode::Docked)],
        );
    };
    let lines = vec![
        format!(
            "This quest requires you to deliver this very important object to <p>{}</>.",
            world.planet(quest.receiver).name()
        ),
        String::new(),
        format!(
            "Reward: <y>{}</> credits and <y>{}</> experience points.",
            quest.credits, quest.experience
        ),
    ];
    narration(
        lines,
        vec![
            Choice::new("Accept quest", ChoiceAction::AcceptQuest),
            Choice::new("Decline quest", ChoiceAction::DeclineQuest),
        ],
    )
}

fn complete_quest(world: &mut World) -> GeneratedChoices {
    let Some(quest) = world.current_quest.take() else {
        return narration(
            vec!["Nobody is waiting for a delivery here.".to_string()],
            vec![done(Mode::Docked)],
        );
    };
    tracing::info!(credits = quest.credits, experience = quest.experience, "quest completed");
    narration(
        vec![
            "Quest completed!".to_string(),
            String::new(),
            format!(
                "Received <y>{}</> credits and <y>{}</> experience points.",
                quest.credits, quest.experience
            ),
        ],
        vec![Choice::new(
            "Done",
            ChoiceAction::CompleteQuest {
                credits: quest.credits,
                experience: quest.experience,
            },
        )],
    )
}

fn news(world: &World) -> GeneratedChoices {
    let mut lines = vec!["The latest system-wide news:".to_string(), String::new()];
    lines.extend(
        world
            .recent_events()
            .map(|e| format!("* [{}] {}", e.time, e.text)),
    );
    narration(lines, vec![done(Mode::Docked)])
}

fn buy_fuel(world: &World) -> GeneratedChoices {
    let player = &world.player;
    let budget = f64::from(MAX_FUEL_SPEND.min(player.credits));
    let free_tank = player.max_fuel.saturating_sub(player.fuel);
    let fuel = ((budget / FUEL_PRICE).floor() as u32).min(free_tank);
    let cost = (f64::from(fuel) * FUEL_PRICE).ceil() as u32;

    narration(
        vec![format!("Buy <y>{fuel}</> fuel units for <y>{cost}</> credits?")],
        vec![
            Choice::new("Accept deal", ChoiceAction::BuyFuel { fuel, cost }),
            Choice::new("Decline deal", ChoiceAction::Done { next: Mode::Docked }),
        ],
    )
}

fn upgrade_lab(world: &World) -> GeneratedChoices {
    let upgrade = world.upgrade_available;
    let pitch = match upgrade {
        LabUpgrade::JumpMaxDistance => "A jump engine booster that increases its <g>max jump distance</>.",
        LabUpgrade::MaxFuel => "A special fuel tank extender to increase its <g>max capacity</>.",
        LabUpgrade::MaxCargo => "A better storage compactor, it will <g>increase max cargo</> of your vessel.",
        LabUpgrade::JumpSpeed => {
            "A jump engine cooling system that allows you to <g>travel between the planets faster</>."
        }
    };
    let price = upgrade.price();

    let mut choices = Vec::new();
    if world.player.credits >= price {
        choices.push(Choice::new("Buy this upgrade", ChoiceAction::BuyLabUpgrade(upgrade)));
    }
    choices.push(Choice::new("Leave lab", ChoiceAction::LeaveLab));

    narration(
        vec![
            "You visited an experimental research lab. A person in white coat approaches you.".to_string(),
            String::new(),
            format!(
                "After a quick discussion, one particular upgrade caught your attention: {}. {pitch}",
                upgrade.title()
            ),
            String::new(),
            format!("It will cost you <y>{price}</> credits."),
        ],
        choices,
    )
}

fn weapon_label(weapon: &WeaponDesign) -> String {
    if weapon.primary {
        format!("{} (<g>primary</>)", weapon.name)
    } else {
        format!("{} (<p>secondary</>)", weapon.name)
    }
}

fn weapon_shop(world: &World) -> GeneratedChoices {
    let planet = world.current_planet();
    let player = &world.player;
    let mut lines = Vec::new();
    let mut choices = Vec::new();

    if planet.weapons_available.is_empty() {
        lines.push("This weapon shop is empty at the moment. Come again later.".to_string());
    } else {
        lines.push("The weapon selection includes:".to_string());
        for name in &planet.weapons_available {
            let weapon = find_weapon(name);
            lines.push(format!("* {} - <y>{}</> credits", weapon_label(weapon), weapon.cost));
            if player.credits >= weapon.cost && !player.design.has_weapon(weapon) {
                choices.push(Choice::new(
                    format!("Buy {} [{} cr]", weapon.name, weapon.cost),
                    ChoiceAction::BuyWeapon { name: name.clone() },
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push("Your current weapons:".to_string());
    for weapon in [player.design.main_weapon, player.design.secondary_weapon]
        .into_iter()
        .flatten()
    {
        lines.push(format!("* {}", weapon_label(weapon)));
    }

    choices.push(Choice::new("Leave the weapon shop", ChoiceAction::Done { next: Mode::Docked }));
    narration(lines, choices)
}

fn workshop(world: &World) -> GeneratedChoices {
    let player = &world.player;
    let mut lines = vec![
        "You can improve your vessel combat stats here.".to_string(),
        String::new(),
        "Your vessel stats:".to_string(),
    ];
    let mut choices = Vec::new();

    for system in VesselSystem::ALL {
        let level = player.upgrades.level(system);
        let cost = player.upgrades.cost(system);
        lines.push(format!(
            "* {} (level <g>{level}</>) - <y>{cost}</> credits to increase",
            system.title()
        ));
        if player.credits >= cost {
            choices.push(
                Choice::new(
                    format!("Increase {} level", system.title()),
                    ChoiceAction::UpgradeSystem(system),
                )
                .with_time(system.install_hours())
                .with_mode(Mode::Docked),
            );
        }
    }

    choices.push(Choice::new("Leave the workshop", ChoiceAction::Done { next: Mode::Docked }));
    narration(lines, choices)
}

fn shipyard(world: &World) -> GeneratedChoices {
    let lines = vec![
        "A new, improved vessel is available for the veterans.".to_string(),
        String::new(),
        "In comparison with your current vessel:".to_string(),
        "<g>+50</> health".to_string(),
        "<g>+20</> max energy".to_string(),
        "<g>+20</> cargo space".to_string(),
        "<r>-0.8</> rotation speed".to_string(),
        String::new(),
        format!("It costs <y>{SHIPYARD_PRICE}</> credits."),
    ];
    let mut choices = Vec::new();
    if world.player.credits >= SHIPYARD_PRICE {
        choices.push(Choice::new("Buy new vessel", ChoiceAction::BuyImprovedHull));
    }
    choices.push(Choice::new("Leave shipyard", ChoiceAction::Done { next: Mode::Docked }));
    narration(lines, choices)
}

fn sell_minerals<R: RandomSource>(world: &World, rng: &mut R) -> GeneratedChoices {
    let cargo = world.player.cargo;
    let (demand, label) = mineral_demand(world.current_planet().mineral_deposit);
    let price = rng.float_range(0.8, 1.6);
    let credits = (f64::from(cargo) * price * demand).ceil() as u32;

    narration(
        vec![
            format!("Local mineral market: <y>{label}</>."),
            String::new(),
            format!("Sell <y>{cargo}</> minerals for <y>{credits}</> credits?"),
        ],
        vec![
            Choice::new("Accept deal", ChoiceAction::SellMinerals { credits }),
            Choice::new("Decline deal", ChoiceAction::Done { next: Mode::Docked }),
        ],
    )
}
