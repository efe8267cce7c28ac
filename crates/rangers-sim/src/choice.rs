//! Player choices and the actions they resolve to.

use serde::{Deserialize, Serialize};

use rangers_core::constants::HOURS_PER_DAY;
use rangers_core::enums::{LabUpgrade, Mode, VesselSystem};
use rangers_core::player::BattleRewards;
use rangers_core::types::PlanetId;
use rangers_core::vessel::VesselDesign;

use crate::pending::PendingEvent;

/// What happens once a choice is resolved. Every variant is handled by
/// [`crate::actions::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChoiceAction {
    EnterDocks,
    TakeOff,
    Jump { destination: PlanetId, fuel: u32 },
    HuntEnemies,
    LayLow,
    Repair { price: u32 },
    /// Queue an interaction and switch to `next` while it is shown.
    Open { event: PendingEvent, next: Mode },

    CollectFuel { fuel: u32 },
    CollectMinerals { found: u32, fuel: u32, damaged: bool },
    SellMinerals { credits: u32 },
    BuyFuel { fuel: u32, cost: u32 },
    AcceptQuest,
    DeclineQuest,
    CompleteQuest { credits: u32, experience: u32 },
    BuyLabUpgrade(LabUpgrade),
    LeaveLab,
    BuyWeapon { name: String },
    UpgradeSystem(VesselSystem),
    BuyImprovedHull,

    Fight { enemy: Box<VesselDesign> },
    Retreat,
    CollectRewards(BattleRewards),
    Perish,
    /// Nothing to apply; just move on to `next`.
    Done { next: Mode },
}

/// A single entry of the choice menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub text: String,
    /// Hours that pass before the action resolves.
    pub time: u32,
    /// Mode held while the time passes.
    pub mode: Option<Mode>,
    pub action: ChoiceAction,
}

impl Choice {
    pub fn new(text: impl Into<String>, action: ChoiceAction) -> Self {
        Self {
            text: text.into(),
            time: 0,
            mode: None,
            action,
        }
    }

    pub fn with_time(mut self, hours: u32) -> Self {
        self.time = hours;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Time cost formatted as "7h" or "1d 4h"; empty for instant choices.
    pub fn time_label(&self) -> String {
        let days = self.time / HOURS_PER_DAY;
        let hours = self.time % HOURS_PER_DAY;
        match (days, hours) {
            (0, 0) => String::new(),
            (0, h) => format!("{h}h"),
            (d, h) => format!("{d}d {h}h"),
        }
    }
}

/// Narration plus the choices offered this turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedChoices {
    pub text: String,
    pub choices: Vec<Choice>,
}

/// Choice accumulator that silently drops entries past its limit.
///
/// Earlier entries are never evicted, so insertion order is priority.
#[derive(Debug)]
pub struct ChoiceList {
    choices: Vec<Choice>,
    limit: usize,
    reserved: usize,
}

impl ChoiceList {
    pub fn new(limit: usize) -> Self {
        Self {
            choices: Vec::with_capacity(limit),
            limit,
            reserved: 0,
        }
    }

    /// Hold back `slots` entries for a later [`ChoiceList::release`].
    pub fn reserve(&mut self, slots: usize) {
        self.reserved = slots;
    }

    pub fn release(&mut self) {
        self.reserved = 0;
    }

    pub fn has_room(&self) -> bool {
        self.choices.len() + self.reserved < self.limit
    }

    /// Append a choice; returns `false` if it was dropped.
    pub fn push(&mut self, choice: Choice) -> bool {
        if !self.has_room() {
            return false;
        }
        self.choices.push(choice);
        true
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn into_vec(self) -> Vec<Choice> {
        self.choices
    }
}
