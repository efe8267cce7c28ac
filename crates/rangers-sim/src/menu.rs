//! The normal choice menu, built in fixed priority order.

use rangers_core::constants::{MAX_CHOICES, MINERALS_HUNT_MIN_HULL, SHIPYARD_MIN_RANK};
use rangers_core::enums::{Faction, Mode};
use rangers_core::rng::RandomSource;
use rangers_core::types::PlanetId;
use rangers_core::world::World;
use rangers_procgen::vesselgen::marauder_design;

use crate::choice::{Choice, ChoiceAction, ChoiceList, GeneratedChoices};
use crate::engine::SimConfig;
use crate::flavortext::mode_text;
use crate::pending::PendingEvent;

struct JumpOption {
    destination: PlanetId,
    fuel: u32,
    hours: u32,
}

fn open(text: &str, hours: u32, mode: Mode, event: PendingEvent, next: Mode) -> Choice {
    Choice::new(text, ChoiceAction::Open { event, next })
        .with_time(hours)
        .with_mode(mode)
}

/// Build the regular menu for the player's mode and location.
pub fn normal_choices<R: RandomSource>(world: &World, rng: &mut R, config: &SimConfig) -> GeneratedChoices {
    let text = mode_text(rng, world);
    let player = &world.player;
    let planet = world.current_planet();
    let mode = player.mode;
    let docked = mode == Mode::Docked;
    let in_orbit = mode.is_in_orbit();

    let mut list = ChoiceList::new(MAX_CHOICES);
    if docked {
        list.reserve(1);
    }

    if in_orbit && planet.faction == player.faction {
        let (label, hours) = if planet.info.gas_giant {
            ("Dock the station", 1)
        } else {
            ("Enter the planetary docks", 3)
        };
        list.push(
            Choice::new(label, ChoiceAction::EnterDocks)
                .with_time(hours)
                .with_mode(Mode::Orbiting),
        );
    }

    if docked {
        docked_choices(world, rng, &mut list);
    }

    let has_fuel = if docked { false } else { jump_choices(world, rng, &mut list) };

    if docked {
        list.release();
        list.push(
            Choice::new("Take off", ChoiceAction::TakeOff)
                .with_time(4)
                .with_mode(Mode::Docked),
        );
    }

    if !docked && config.combat_test_choice && list.has_room() {
        let enemy = Box::new(marauder_design());
        list.push(open(
            "Combat test",
            1,
            Mode::Combat,
            PendingEvent::Battle { enemy, interrupt: false },
            Mode::Combat,
        ));
    }

    if in_orbit {
        if hostile_factions(world).next().is_some() {
            list.push(
                Choice::new("Hunt for enemies", ChoiceAction::HuntEnemies)
                    .with_time(4)
                    .with_mode(Mode::Attack),
            );
        }

        if list.has_room()
            && player.cargo < player.max_cargo
            && player.vessel_hp > MINERALS_HUNT_MIN_HULL
            && planet.timers.minerals == 0.0
            && rng.chance(0.7)
        {
            list.push(open(
                "Hunt asteroids for minerals",
                7,
                Mode::Scavenging,
                PendingEvent::MineralsHunt,
                Mode::Scavenging,
            ));
        }

        if list.has_room() && (!has_fuel || (player.fuel < player.max_fuel && rng.chance(0.4))) {
            list.push(open(
                "Scavenge for fuel",
                8,
                Mode::Scavenging,
                PendingEvent::FuelScavenge,
                Mode::Scavenging,
            ));
        }

        list.push(open(
            "Scan the area",
            3,
            Mode::Scavenging,
            PendingEvent::ScanArea,
            Mode::Scavenging,
        ));
    }

    if !docked {
        list.push(
            Choice::new("Lay low", ChoiceAction::LayLow)
                .with_time(12)
                .with_mode(Mode::Sneaking),
        );
    }

    GeneratedChoices {
        text,
        choices: list.into_vec(),
    }
}

fn docked_choices<R: RandomSource>(world: &World, rng: &mut R, list: &mut ChoiceList) {
    let player = &world.player;
    let planet = world.current_planet();

    if list.has_room() && player.vessel_hp < 1.0 {
        let damage = 1.0 - player.vessel_hp;
        let factor = rng.float_range(0.3, 0.5);
        let price = (100.0 * damage * factor).ceil() as u32;
        if player.credits > price {
            let hours = (damage * 20.0).ceil() as u32;
            list.push(
                Choice::new("Repair vessel", ChoiceAction::Repair { price })
                    .with_time(hours)
                    .with_mode(Mode::Docked),
            );
        }
    }

    if player.credits > 0 && player.fuel < player.max_fuel {
        list.push(open("Buy fuel", 2, Mode::Docked, PendingEvent::BuyFuel, Mode::Docked));
    }

    if let Some(quest) = &world.current_quest {
        if quest.active && quest.receiver == planet.id {
            list.push(open(
                "Deliver the quest cargo",
                1,
                Mode::Docked,
                PendingEvent::CompleteQuest,
                Mode::Docked,
            ));
        } else if !quest.active && quest.giver == planet.id && !planet.visited.quest_board {
            list.push(open(
                "Check the quest board",
                1,
                Mode::Docked,
                PendingEvent::TakeQuest,
                Mode::Docked,
            ));
        }
    }

    if world.recent_events().len() > 0 && !planet.visited.news {
        list.push(open("Read the news", 1, Mode::Docked, PendingEvent::News, Mode::Docked));
    }

    if planet.shop_mode_weapons {
        list.push(open(
            "Visit the weapon shop",
            1,
            Mode::Docked,
            PendingEvent::WeaponShop,
            Mode::Docked,
        ));
    } else {
        list.push(open(
            "Visit the workshop",
            1,
            Mode::Docked,
            PendingEvent::Workshop,
            Mode::Docked,
        ));
    }

    if !player.improved_hull && player.rank() >= SHIPYARD_MIN_RANK && !planet.info.gas_giant {
        list.push(open(
            "Visit the shipyard",
            1,
            Mode::Docked,
            PendingEvent::Shipyard,
            Mode::Docked,
        ));
    }

    if world.timers.next_upgrade == 0.0 {
        list.push(open(
            "Visit upgrade lab",
            1,
            Mode::Docked,
            PendingEvent::UpgradeLab,
            Mode::Docked,
        ));
    }

    if list.has_room() && !planet.visited.minerals_market && player.cargo > 0 && rng.chance(0.9) {
        list.push(open(
            "Sell minerals",
            2,
            Mode::Docked,
            PendingEvent::SellMinerals,
            Mode::Docked,
        ));
    }
}

/// Offer jumps to planets in range. Returns whether any planet at all is
/// affordable, in range or not.
fn jump_choices<R: RandomSource>(world: &World, rng: &mut R, list: &mut ChoiceList) -> bool {
    let player = &world.player;
    let here = world.current_planet();

    let mut has_fuel = false;
    let mut options = Vec::new();
    for planet in &world.planets {
        if planet.id == here.id {
            continue;
        }
        let dist = here.distance_to(planet);
        let fuel = ((dist * player.travel.fuel_usage) as u32).max(1);
        if player.fuel < fuel {
            continue;
        }
        has_fuel = true;
        if dist > player.travel.max_jump_dist {
            continue;
        }
        options.push(JumpOption {
            destination: planet.id,
            fuel,
            hours: (dist / player.travel.jump_speed).ceil() as u32,
        });
    }

    rng.shuffle(&mut options);
    while list.has_room() {
        let Some(jump) = options.pop() else {
            break;
        };
        let name = world.planet(jump.destination).name();
        list.push(
            Choice::new(
                format!("Jump to {name} [{} fuel]", jump.fuel),
                ChoiceAction::Jump {
                    destination: jump.destination,
                    fuel: jump.fuel,
                },
            )
            .with_time(jump.hours)
            .with_mode(Mode::Jump),
        );
    }
    has_fuel
}

/// Factions other than the player's with vessels at the current planet.
fn hostile_factions(world: &World) -> impl Iterator<Item = Faction> + '_ {
    let own = world.player.faction;
    world
        .current_planet()
        .present_factions()
        .filter(move |&f| f.is_some() && f != own)
}
