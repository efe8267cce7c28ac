//! Systems that operate on the simulation world.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus an injected random source. They do not own state; everything lives
//! in the world.

pub mod clock;
pub mod economy;
pub mod encounters;
pub mod offers;
pub mod snapshot;
pub mod warfare;
