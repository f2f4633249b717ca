//! Party/guild membership queries
//!
//! The notoriety cascade itself never consults parties; alliance hues and
//! friendly-fire prompts in the permission UI do. Kept here so the engine's
//! callers have one read-only membership surface.

use ahash::AHashMap;

use crate::core::types::{ActorId, PartyId};

/// Membership roster per party
#[derive(Debug, Default)]
pub struct PartyDirectory {
    members: AHashMap<PartyId, Vec<ActorId>>,
}

impl PartyDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn join(&mut self, party: PartyId, actor: ActorId) {
        let roster = self.members.entry(party).or_default();
        if !roster.contains(&actor) {
            roster.push(actor);
        }
    }

    pub fn leave(&mut self, party: PartyId, actor: ActorId) {
        if let Some(roster) = self.members.get_mut(&party) {
            roster.retain(|m| *m != actor);
        }
    }

    pub fn party_of(&self, actor: ActorId) -> Option<PartyId> {
        self.members
            .iter()
            .find(|(_, roster)| roster.contains(&actor))
            .map(|(id, _)| *id)
    }

    /// Are both actors in the same party?
    pub fn same_party(&self, a: ActorId, b: ActorId) -> bool {
        match self.party_of(a) {
            Some(party) => self.party_of(b) == Some(party),
            None => false,
        }
    }
}
