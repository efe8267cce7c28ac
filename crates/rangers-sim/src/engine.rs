//! Simulation runner: the entry point the game shell talks to.
//!
//! `Runner` owns the world and the seeded generator, generates the choice
//! menu each turn, resolves selections, and hands battles off to the
//! combat collaborator. Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use rangers_core::enums::{GameOutcome, Mode};
use rangers_core::events::{BattleInfo, BattleResults, SimEvent};
use rangers_core::mailbox::Mailbox;
use rangers_core::player::BattleRewards;
use rangers_core::state::StatusSnapshot;
use rangers_core::vessel::VesselDesign;
use rangers_core::world::World;
use rangers_procgen::levelgen;

use crate::actions;
use crate::battle;
use crate::choice::{Choice, GeneratedChoices};
use crate::flavortext::colorize;
use crate::menu;
use crate::narrative;
use crate::pending::PendingEvent;
use crate::persistence::{self, PersistenceError, SaveState};
use crate::systems;

/// Configuration for starting a new game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same game.
    pub seed: u64,
    /// Offer the debug "Combat test" choice outside the docks.
    pub combat_test_choice: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            combat_test_choice: false,
        }
    }
}

/// Misuse of the runner by the game shell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("choice {index} does not exist ({available} available)")]
    NoSuchChoice { index: usize, available: usize },
    #[error("the game is over")]
    GameOver,
    #[error("a battle is in progress")]
    BattleInProgress,
    #[error("no battle is in progress")]
    NoBattleInProgress,
}

/// What happened to a selected choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceOutcome {
    /// The action was applied and the player is now in `mode`.
    Resolved { mode: Mode },
    /// Time ran out early; the action was dropped and choices must be regenerated.
    Interrupted,
}

pub struct Runner {
    config: SimConfig,
    world: World,
    rng: ChaCha8Rng,
    pending_event: Mailbox<PendingEvent>,
    active_battle: Option<BattleInfo>,
    choices: Option<Vec<Choice>>,
    note: Option<String>,
    events: Vec<SimEvent>,
}

impl Runner {
    /// Start a new game with a freshly generated world.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let world = levelgen::new_world(&mut rng);
        tracing::info!(seed = config.seed, "new game");
        Self::with_parts(config, world, rng)
    }

    /// Run a prepared world, seeding the generator from `config`.
    pub fn from_world(world: World, config: SimConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_parts(config, world, rng)
    }

    fn with_parts(config: SimConfig, world: World, rng: ChaCha8Rng) -> Self {
        Self {
            config,
            world,
            rng,
            pending_event: Mailbox::new(),
            active_battle: None,
            choices: None,
            note: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scenario setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn pending_event(&self) -> Option<&PendingEvent> {
        self.pending_event.peek()
    }

    pub fn active_battle(&self) -> Option<&BattleInfo> {
        self.active_battle.as_ref()
    }

    /// Queue an interaction for the next choice generation, replacing any
    /// interaction already waiting.
    pub fn queue_event(&mut self, event: PendingEvent) {
        self.pending_event.post(event);
    }

    /// Choices of the last generation that are still selectable.
    pub fn choices(&self) -> &[Choice] {
        self.choices.as_deref().unwrap_or_default()
    }

    /// Build this turn's narration and choices.
    ///
    /// Battle rewards take precedence over a pending interaction, which in
    /// turn takes precedence over the normal menu.
    pub fn generate_choices(&mut self) -> Result<GeneratedChoices, SimError> {
        self.check_idle()?;

        let mut generated = if self.world.player.mode == Mode::AfterCombat {
            self.world.player.mode = Mode::Orbiting;
            match self.world.player.battle_rewards.try_take() {
                Some(rewards) => narrative::after_battle(&self.world, rewards),
                None => menu::normal_choices(&self.world, &mut self.rng, &self.config),
            }
        } else if let Some(event) = self.pending_event.try_take() {
            narrative::describe(&mut self.world, &mut self.rng, event)
        } else {
            menu::normal_choices(&self.world, &mut self.rng, &self.config)
        };

        if let Some(note) = self.note.take() {
            generated.text = format!("{note}\n\n{}", generated.text);
        }
        generated.text = colorize(&generated.text);
        for choice in &mut generated.choices {
            choice.text = colorize(&choice.text);
        }

        self.choices = Some(generated.choices.clone());
        Ok(generated)
    }

    /// Select one of the generated choices.
    ///
    /// Time-consuming choices advance the clock first; if that advance is
    /// interrupted, the choice's action never runs.
    pub fn select_choice(&mut self, index: usize) -> Result<ChoiceOutcome, SimError> {
        self.check_idle()?;

        let mut choices = self.choices.take().unwrap_or_default();
        if index >= choices.len() {
            let available = choices.len();
            self.choices = Some(choices);
            return Err(SimError::NoSuchChoice { index, available });
        }
        let choice = choices.swap_remove(index);

        if let Some(mode) = choice.mode {
            self.world.player.mode = mode;
        }
        if choice.time > 0 && !self.advance_time(choice.time) {
            tracing::debug!(choice = %choice.text, "choice interrupted");
            return Ok(ChoiceOutcome::Interrupted);
        }

        let effect = actions::apply(&mut self.world, &mut self.rng, choice.action);
        self.world.player.mode = effect.next_mode;
        if let Some(event) = effect.follow_up {
            self.pending_event.post(event);
        }
        if let Some(note) = effect.note {
            self.note = Some(note);
        }
        if let Some(enemy) = effect.battle {
            self.start_battle(enemy);
        }
        if let Some(outcome) = effect.outcome {
            self.end_game(outcome);
        }

        self.events.push(SimEvent::ChoiceResolved {
            mode: effect.next_mode,
        });
        Ok(ChoiceOutcome::Resolved {
            mode: effect.next_mode,
        })
    }

    /// Simulate `hours` hours. Returns `false` if the advance was cut short.
    pub fn advance_time(&mut self, hours: u32) -> bool {
        systems::clock::advance_time(
            &mut self.world,
            &mut self.rng,
            hours,
            &mut self.pending_event,
            &mut self.events,
        )
    }

    /// Report the result of the battle handed off by the last "Fight!".
    pub fn finish_battle(&mut self, results: BattleResults) -> Result<BattleRewards, SimError> {
        let battle = self.active_battle.take().ok_or(SimError::NoBattleInProgress)?;
        let rewards = battle::resolve(&mut self.world, &mut self.rng, &battle, results);
        Ok(rewards)
    }

    /// Take the events accumulated since the last call.
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        systems::snapshot::build_snapshot(&self.world)
    }

    /// Serialize the whole session. Undrained events are not saved.
    pub fn save_state(&self) -> Result<String, PersistenceError> {
        persistence::encode(&SaveState {
            config: self.config.clone(),
            world: self.world.clone(),
            rng: self.rng.clone(),
            pending_event: self.pending_event.clone(),
            active_battle: self.active_battle.clone(),
            choices: self.choices.clone(),
            note: self.note.clone(),
        })
    }

    /// Resume a session saved with [`Runner::save_state`].
    pub fn restore_state(data: &str) -> Result<Self, PersistenceError> {
        let state = persistence::decode(data)?;
        Ok(Self {
            config: state.config,
            world: state.world,
            rng: state.rng,
            pending_event: state.pending_event,
            active_battle: state.active_battle,
            choices: state.choices,
            note: state.note,
            events: Vec::new(),
        })
    }

    fn check_idle(&self) -> Result<(), SimError> {
        if self.world.outcome.is_some() {
            return Err(SimError::GameOver);
        }
        if self.active_battle.is_some() {
            return Err(SimError::BattleInProgress);
        }
        Ok(())
    }

    fn start_battle(&mut self, enemy: VesselDesign) {
        let info = battle::stage(&self.world, enemy);
        tracing::info!(
            challenge = info.enemy.challenge,
            faction = info.enemy.faction.name(),
            pirate = info.enemy.is_pirate(),
            "battle started"
        );
        self.active_battle = Some(info.clone());
        self.events.push(SimEvent::BattleStarted {
            battle: Box::new(info),
        });
    }

    fn end_game(&mut self, outcome: GameOutcome) {
        self.world.outcome = Some(outcome);
        let victory = outcome == GameOutcome::Victory;
        tracing::info!(victory, "game over");
        self.events.push(SimEvent::GameOver { victory });
    }
}
