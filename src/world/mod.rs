//! World services: the read-only context every notoriety query takes
//!
//! The engine owns none of this state. The tick loop and network handlers
//! mutate actors, zones, and houses; classification reads a snapshot of them.

pub mod house;
pub mod party;
pub mod zone;

pub use house::{House, HouseDirectory, Rect};
pub use party::PartyDirectory;
pub use zone::{Zone, ZoneDirectory};

use crate::actor::registry::ActorRegistry;

/// Everything the notoriety engine can see
#[derive(Debug, Default)]
pub struct World {
    pub actors: ActorRegistry,
    pub zones: ZoneDirectory,
    pub houses: HouseDirectory,
    pub parties: PartyDirectory,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }
}
