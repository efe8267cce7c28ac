//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Galactic faction. `None` marks unclaimed planets and pirates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    #[default]
    None,
    Alpha,
    Beta,
    Gamma,
}

impl Faction {
    /// Number of faction slots, including `None`.
    pub const COUNT: usize = 4;

    /// All factions in slot order.
    pub const ALL: [Faction; Faction::COUNT] =
        [Faction::None, Faction::Alpha, Faction::Beta, Faction::Gamma];

    /// Slot of this faction in per-faction arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Faction {
        Faction::ALL.get(index).copied().unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Faction::Alpha => "Alpha",
            Faction::Beta => "Beta",
            Faction::Gamma => "Gamma",
            Faction::None => "Unknown",
        }
    }

    /// Whether this is a real faction rather than the unclaimed slot.
    pub fn is_some(self) -> bool {
        self != Faction::None
    }
}

/// The player's current activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Unknown,
    Jump,
    Orbiting,
    Combat,
    AfterCombat,
    Scavenging,
    Attack,
    Sneaking,
    JustEntered,
    Docked,
}

impl Mode {
    /// Modes in which the vessel idles and passive artifacts work.
    pub fn is_passive(self) -> bool {
        matches!(
            self,
            Mode::JustEntered | Mode::Orbiting | Mode::Scavenging | Mode::Sneaking
        )
    }

    /// Modes in which the player hangs around a planet's orbit.
    pub fn is_in_orbit(self) -> bool {
        matches!(self, Mode::JustEntered | Mode::Orbiting)
    }

    /// Base chance per hour of running into a hostile vessel.
    pub fn encounter_chance(self) -> f64 {
        match self {
            Mode::Sneaking => 0.01,
            Mode::JustEntered => 0.05,
            Mode::Orbiting => 0.1,
            Mode::Scavenging => 0.2,
            Mode::Attack => 1.0,
            _ => 0.0,
        }
    }
}

/// How a planet relates to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    Allied,
    Hostile,
    Unclaimed,
}

/// How the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Victory,
    Defeat,
}

/// Travel upgrades offered by the upgrade lab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabUpgrade {
    #[default]
    JumpMaxDistance,
    MaxFuel,
    MaxCargo,
    JumpSpeed,
}

impl LabUpgrade {
    pub const ALL: [LabUpgrade; 4] = [
        LabUpgrade::JumpMaxDistance,
        LabUpgrade::MaxFuel,
        LabUpgrade::MaxCargo,
        LabUpgrade::JumpSpeed,
    ];

    pub fn price(self) -> u32 {
        match self {
            LabUpgrade::JumpMaxDistance => 30,
            LabUpgrade::MaxFuel => 60,
            LabUpgrade::MaxCargo => 70,
            LabUpgrade::JumpSpeed => 25,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LabUpgrade::JumpMaxDistance => "Extended jump drive",
            LabUpgrade::MaxFuel => "Auxiliary fuel tank",
            LabUpgrade::MaxCargo => "Cargo bay extension",
            LabUpgrade::JumpSpeed => "Jump drive accelerator",
        }
    }

    /// Inclusive range of the improvement roll.
    pub fn bonus_range(self) -> (u32, u32) {
        match self {
            LabUpgrade::JumpMaxDistance => (3, 6),
            LabUpgrade::MaxFuel => (5, 15),
            LabUpgrade::MaxCargo => (5, 20),
            LabUpgrade::JumpSpeed => (15, 30),
        }
    }
}

/// Vessel systems that the workshop can improve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselSystem {
    Armor,
    Energy,
    Speed,
    Acceleration,
    Rotation,
}

impl VesselSystem {
    pub const ALL: [VesselSystem; 5] = [
        VesselSystem::Armor,
        VesselSystem::Energy,
        VesselSystem::Speed,
        VesselSystem::Acceleration,
        VesselSystem::Rotation,
    ];

    /// Cost of the first upgrade and the increment per level.
    pub fn cost_curve(self) -> (u32, u32) {
        match self {
            VesselSystem::Armor => (30, 10),
            VesselSystem::Energy => (25, 10),
            VesselSystem::Speed => (15, 5),
            VesselSystem::Acceleration => (15, 5),
            VesselSystem::Rotation => (25, 10),
        }
    }

    /// Hours the workshop needs to install the upgrade.
    pub fn install_hours(self) -> u32 {
        match self {
            VesselSystem::Armor => 20,
            VesselSystem::Energy => 15,
            VesselSystem::Speed => 10,
            VesselSystem::Acceleration => 5,
            VesselSystem::Rotation => 20,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            VesselSystem::Armor => "armor",
            VesselSystem::Energy => "energy",
            VesselSystem::Speed => "speed",
            VesselSystem::Acceleration => "acceleration",
            VesselSystem::Rotation => "rotation",
        }
    }
}

/// Permanent passive bonuses the player can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Artifact {
    FuelGenerator,
    RepairBots,
    Scantide,
    LuckyCharm,
    Jumper,
}

impl Artifact {
    pub const ALL: [Artifact; 5] = [
        Artifact::FuelGenerator,
        Artifact::RepairBots,
        Artifact::Scantide,
        Artifact::LuckyCharm,
        Artifact::Jumper,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Artifact::FuelGenerator => "Fuel Generator",
            Artifact::RepairBots => "Repair Bots",
            Artifact::Scantide => "Scantide",
            Artifact::LuckyCharm => "Lucky Charm",
            Artifact::Jumper => "Jumper",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Artifact::FuelGenerator => "slowly generates fuel while idling",
            Artifact::RepairBots => "slowly repairs the vessel while idling",
            Artifact::Scantide => "makes area scanning faster",
            Artifact::LuckyCharm => "increases the minerals yield",
            Artifact::Jumper => "reduces the jump fuel consumption",
        }
    }
}

/// Visual asset family of a vessel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VesselImage {
    #[default]
    Player,
    PlayerElite,
    BetaSmall,
    BetaBig,
    GammaSmall,
    GammaBig,
    Pirate,
    Marauder,
}
