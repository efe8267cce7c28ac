//! Simulation constants and tuning parameters.

// --- Clock ---

/// Number of world sub-steps simulated per hour.
pub const SUBSTEPS_PER_HOUR: u32 = 5;

/// Simulated hours covered by one world sub-step.
pub const SUBSTEP_HOURS: f64 = 0.2;

/// Hours in a game day. Salary is paid on every day boundary.
pub const HOURS_PER_DAY: u32 = 24;

// --- Limits ---

/// Maximum number of choices offered at once.
pub const MAX_CHOICES: usize = 6;

/// Maximum number of entries kept in the recent events log.
pub const MAX_RECENT_EVENTS: usize = 6;

// --- Territory ---

/// Influence a lone faction needs to claim an unclaimed planet.
pub const INFLUENCE_CAPTURE_THRESHOLD: f64 = 30.0;

/// Chance per hour that two factions sharing a planet skirmish.
pub const SKIRMISH_CHANCE: f64 = 0.45;

/// Minerals a planet must hold before it starts building a vessel.
pub const PRODUCTION_MIN_MINERALS: u32 = 50;

/// Bonus minerals an NPC-controlled planet may receive per generation cycle.
pub const NPC_MINERAL_BONUS: u32 = 10;

/// Chance to apply [`NPC_MINERAL_BONUS`].
pub const NPC_MINERAL_BONUS_CHANCE: f64 = 0.3;

/// Game time after which factions may dispatch large squads (hours).
pub const LARGE_SQUAD_MIN_TIME: u32 = 5 * HOURS_PER_DAY;

/// Chance that an attack squad is doubled into a large squad.
pub const LARGE_SQUAD_CHANCE: f64 = 0.4;

// --- Encounters ---

/// Maximum number of pirate raids per game.
pub const MAX_PIRATE_RAIDS: u32 = 3;

/// Hull fraction the player needs before a pirate raid is forced.
pub const PIRATE_MIN_HULL: f64 = 0.8;

/// Battles the player needs before a pirate raid is forced.
pub const PIRATE_MIN_BATTLES: u32 = 2;

/// Encounter multiplier on a planet controlled by the player's faction.
pub const ALLIED_ENCOUNTER_FACTOR: f64 = 0.25;

/// Encounter multiplier on an unclaimed planet.
pub const UNCLAIMED_ENCOUNTER_FACTOR: f64 = 0.65;

// --- Player economy ---

/// Credits per unit of fuel.
pub const FUEL_PRICE: f64 = 0.5;

/// Most credits a single fuel purchase spends.
pub const MAX_FUEL_SPEND: u32 = 90;

/// Price of the improved hull at the shipyard.
pub const SHIPYARD_PRICE: u32 = 350;

/// Rank needed before the shipyard sells the improved hull.
pub const SHIPYARD_MIN_RANK: u32 = 4;

/// Fuel spent when retreating from a pirate raid.
pub const RETREAT_FUEL_COST: u32 = 5;

/// Extra salary threshold. Liberations below it raise the salary, above it pay credits.
pub const EXTRA_SALARY_CAP: u32 = 20;

/// Hull fraction required to go hunting for minerals.
pub const MINERALS_HUNT_MIN_HULL: f64 = 0.3;

/// Battles under which combat narration includes a tutorial hint.
pub const TUTORIAL_BATTLES: u32 = 5;

// --- Passive artifacts ---

/// Chance per hour that the Fuel Generator produces one unit of fuel.
pub const FUEL_GENERATOR_CHANCE: f64 = 0.6;

/// Chance per hour that Repair Bots patch the hull.
pub const REPAIR_BOTS_CHANCE: f64 = 0.8;

/// Hull fraction restored by Repair Bots.
pub const REPAIR_BOTS_AMOUNT: f64 = 0.02;
