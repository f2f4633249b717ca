//! Actor registry - id to snapshot lookup table
//!
//! Master references are stored as ids, not pointers; a deleted actor leaves
//! a dangling id behind, and every lookup through the registry degrades that
//! to "no such actor" rather than an error.

use ahash::AHashMap;

use crate::actor::snapshot::Actor;
use crate::core::types::ActorId;

/// All live actors, keyed by id
#[derive(Debug, Default)]
pub struct ActorRegistry {
    actors: AHashMap<ActorId, Actor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an actor, returning its id
    pub fn spawn(&mut self, actor: Actor) -> ActorId {
        let id = actor.id;
        self.actors.insert(id, actor);
        id
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.get_mut(&id)
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Actor> {
        self.actors.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ActorId, &Actor)> {
        self.actors.iter()
    }

    /// Find an actor by display name (driver/debug convenience)
    pub fn find_by_name(&self, name: &str) -> Option<&Actor> {
        self.actors.values().find(|a| a.name == name)
    }
}
