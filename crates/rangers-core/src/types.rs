//! Basic value types: identifiers and game time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::HOURS_PER_DAY;

/// Stable index of a planet in the world's planet table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlanetId(pub usize);

/// Game time in whole hours since the start of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameTime(pub u32);

impl GameTime {
    /// Advance by one hour.
    pub fn advance(&mut self) {
        self.0 += 1;
    }

    pub fn hours(self) -> u32 {
        self.0
    }

    /// Day number, starting from day 1.
    pub fn day(self) -> u32 {
        self.0 / HOURS_PER_DAY + 1
    }

    /// Hour of the current day (0-23).
    pub fn hour(self) -> u32 {
        self.0 % HOURS_PER_DAY
    }

    /// Whether the clock sits exactly on a day boundary.
    pub fn is_day_boundary(self) -> bool {
        self.0 % HOURS_PER_DAY == 0
    }
}

impl fmt::Display for GameTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}, {:02}:00", self.day(), self.hour())
    }
}

/// A line of galactic news.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldEvent {
    pub time: GameTime,
    pub text: String,
}
