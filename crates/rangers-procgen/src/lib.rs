//! Procedural content for the Rangers world simulation.
//!
//! Rolls enemy vessel designs, weapon shop stock and new game worlds.
//! Every function draws from the caller's random source.

pub mod levelgen;
pub mod shop;
pub mod vesselgen;

pub use rangers_core as core;

#[cfg(test)]
mod tests;
