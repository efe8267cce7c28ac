//! Narration helpers: color markup and mode flavor lines.

use rangers_core::enums::{Mode, Relation};
use rangers_core::rng::RandomSource;
use rangers_core::world::World;

const COLOR_TAGS: [(&str, &str); 5] = [
    ("</>", "[/color]"),
    ("<g>", "[color=7AE168]"),
    ("<p>", "[color=B392FF]"),
    ("<r>", "[color=FF6363]"),
    ("<y>", "[color=FFF163]"),
];

/// Rewrite the short color tags into presentation markup.
pub fn colorize(text: &str) -> String {
    COLOR_TAGS
        .iter()
        .fold(text.to_string(), |acc, (tag, markup)| acc.replace(tag, markup))
}

/// A line describing what the player is up to right now.
pub fn mode_text<R: RandomSource>(rng: &mut R, world: &World) -> String {
    let options = match world.player.mode {
        Mode::Docked => docked_lines(world),
        Mode::JustEntered => just_entered_lines(world),
        Mode::Orbiting => orbiting_lines(world),
        _ => return "You drift through space.".to_string(),
    };
    rng.pick_weighted(&options)
        .cloned()
        .unwrap_or_default()
}

fn docked_lines(world: &World) -> Vec<(String, f64)> {
    let planet = world.current_planet();
    if planet.info.gas_giant {
        vec![
            ("Exploring the station hallways.".to_string(), 1.2),
            ("Admiring the gas giant from the station windows.".to_string(), 1.0),
            ("Spent some time doing nothing on this station.".to_string(), 0.7),
        ]
    } else {
        vec![
            ("Spending some time on the streets.".to_string(), 1.1),
            ("Exploring the space decks.".to_string(), 1.0),
            ("Walking through the local market.".to_string(), 0.9),
            (format!("Spent some time doing nothing on {}.", planet.name()), 0.7),
        ]
    }
}

fn just_entered_lines(world: &World) -> Vec<(String, f64)> {
    let planet = world.current_planet();
    let name = planet.name();
    match (planet.relation_to(world.player.faction), planet.info.gas_giant) {
        (Relation::Allied, true) => vec![(format!("Entering the allied {name} station orbit."), 1.5)],
        (Relation::Allied, false) => vec![(format!("Entering the allied {name} orbit."), 1.5)],
        (Relation::Unclaimed, true) => vec![(format!("Entering the {name} gas giant vicinity."), 1.5)],
        (Relation::Unclaimed, false) => vec![(format!("Entering the {name} orbit."), 1.5)],
        (Relation::Hostile, _) => vec![
            (format!("Approaching {name}. <r>Danger</>: enemies detected."), 1.5),
            (format!("Entering the hostile {name} orbit."), 1.4),
            (format!("Getting in range of a hostile {name}."), 1.2),
        ],
    }
}

fn orbiting_lines(world: &World) -> Vec<(String, f64)> {
    let planet = world.current_planet();
    let name = planet.name();
    match (planet.relation_to(world.player.faction), planet.info.gas_giant) {
        (Relation::Allied, true) => vec![(format!("Flying around the allied station near {name}."), 1.5)],
        (Relation::Allied, false) => vec![(format!("Orbiting around allied {name}."), 1.5)],
        (Relation::Unclaimed, true) => vec![(format!("Navigating around the {name} gas giant."), 1.5)],
        (Relation::Unclaimed, false) => vec![(format!("Orbiting around neutral {name}."), 1.5)],
        (Relation::Hostile, _) => vec![
            (format!("Hiding from the hostile fleet of {name}."), 1.5),
            (format!("Observing the hostile {name}."), 1.2),
            (format!("Spying on {name}."), 1.1),
        ],
    }
}
