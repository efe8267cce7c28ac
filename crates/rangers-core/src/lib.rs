//! Core types and definitions for the Rangers world simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! the world data model, static catalogs, the random source, events,
//! status snapshots and constants. It holds no simulation logic.

pub mod constants;
pub mod enums;
pub mod events;
pub mod mailbox;
pub mod planet;
pub mod player;
pub mod rank;
pub mod rng;
pub mod state;
pub mod types;
pub mod vessel;
pub mod weapons;
pub mod world;

#[cfg(test)]
mod tests;
