//! World simulation engine for Pixelspace Rangers.
//!
//! Drives planetary economies, faction warfare, encounters and the
//! player's choice menu, one discrete choice at a time.

pub mod actions;
pub mod battle;
pub mod choice;
pub mod engine;
pub mod flavortext;
pub mod menu;
pub mod narrative;
pub mod pending;
pub mod persistence;
pub mod systems;

pub use engine::{ChoiceOutcome, Runner, SimConfig, SimError};
pub use rangers_core as core;
