//! The world aggregate and its smaller entities.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_RECENT_EVENTS;
use crate::enums::{Artifact, Faction, GameOutcome, LabUpgrade};
use crate::planet::Planet;
use crate::player::Player;
use crate::types::{GameTime, PlanetId, WorldEvent};

/// A group of vessels travelling between planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Squad {
    pub faction: Faction,
    pub vessels: u32,
    /// Map units per hour.
    pub speed: f64,
    /// Remaining map distance.
    pub dist: f64,
    pub destination: PlanetId,
}

/// A delivery job between two allied planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quest {
    pub giver: PlanetId,
    pub receiver: PlanetId,
    pub credits: u32,
    pub experience: u32,
    /// `false` while the quest is only offered.
    pub active: bool,
}

/// Global countdown timers, in hours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldTimers {
    pub pirate: f64,
    pub quest_reroll: f64,
    pub upgrade_reroll: f64,
    /// Upgrade lab stays closed until this reaches zero.
    pub next_upgrade: f64,
}

impl WorldTimers {
    pub fn tick(&mut self, delta: f64) {
        for timer in [
            &mut self.pirate,
            &mut self.quest_reroll,
            &mut self.upgrade_reroll,
            &mut self.next_upgrade,
        ] {
            *timer = (*timer - delta).max(0.0);
        }
    }
}

/// Fleet bookkeeping per faction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldStats {
    pub vessels_produced: [u32; Faction::COUNT],
    pub vessels_lost: [u32; Faction::COUNT],
    pub attack_squads: u32,
    pub capture_squads: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: Player,
    pub planets: Vec<Planet>,
    pub game_time: GameTime,
    recent_events: VecDeque<WorldEvent>,
    pub squads: Vec<Squad>,
    pub timers: WorldTimers,
    /// Pirate raids fought so far.
    pub pirate_seq: u32,
    pub upgrade_available: LabUpgrade,
    pub current_quest: Option<Quest>,
    pub artifacts: Vec<Artifact>,
    pub stats: WorldStats,
    pub outcome: Option<GameOutcome>,
}

impl World {
    pub fn new(player: Player, planets: Vec<Planet>) -> Self {
        Self {
            player,
            planets,
            game_time: GameTime::default(),
            recent_events: VecDeque::with_capacity(MAX_RECENT_EVENTS),
            squads: Vec::new(),
            timers: WorldTimers::default(),
            pirate_seq: 0,
            upgrade_available: LabUpgrade::default(),
            current_quest: None,
            artifacts: Vec::new(),
            stats: WorldStats::default(),
            outcome: None,
        }
    }

    pub fn planet(&self, id: PlanetId) -> &Planet {
        &self.planets[id.0]
    }

    pub fn planet_mut(&mut self, id: PlanetId) -> &mut Planet {
        &mut self.planets[id.0]
    }

    /// The planet the player is currently at.
    pub fn current_planet(&self) -> &Planet {
        self.planet(self.player.planet)
    }

    pub fn current_planet_mut(&mut self) -> &mut Planet {
        let id = self.player.planet;
        self.planet_mut(id)
    }

    /// Log a news line, evicting the oldest one when the log is full.
    pub fn push_event(&mut self, text: impl Into<String>) {
        if self.recent_events.len() >= MAX_RECENT_EVENTS {
            self.recent_events.pop_front();
        }
        self.recent_events.push_back(WorldEvent {
            time: self.game_time,
            text: text.into(),
        });
    }

    /// News lines, oldest first.
    pub fn recent_events(&self) -> impl ExactSizeIterator<Item = &WorldEvent> {
        self.recent_events.iter()
    }

    pub fn has_artifact(&self, artifact: Artifact) -> bool {
        self.artifacts.contains(&artifact)
    }

    /// Vessels a faction owns, stationed or in transit.
    pub fn fleet_size(&self, faction: Faction) -> u32 {
        let stationed: u32 = self.planets.iter().map(|p| p.vessels(faction)).sum();
        let travelling: u32 = self
            .squads
            .iter()
            .filter(|s| s.faction == faction)
            .map(|s| s.vessels)
            .sum();
        stationed + travelling
    }

    /// Whether the player's faction is the only one left on any planet.
    pub fn player_faction_won(&self) -> bool {
        let own = self.player.faction;
        self.planets.iter().all(|p| {
            let foreign_control = p.faction.is_some() && p.faction != own;
            let foreign_vessels = Faction::ALL
                .into_iter()
                .filter(|&f| f.is_some() && f != own)
                .any(|f| p.vessels(f) > 0);
            !foreign_control && !foreign_vessels
        })
    }
}
