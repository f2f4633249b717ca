//! Actor snapshot: the classification-relevant view of one entity
//!
//! The surrounding simulation owns and mutates these fields (combat sets the
//! criminal flag, the murder system bumps kill counts, taming rewires control
//! masters). The notoriety engine only reads them.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::actor::aggression::AggressionRecord;
use crate::core::types::{
    AccessLevel, ActorId, BodyKind, ControlOrder, NpcRole, PartyId, SpeciesId, Vec2, ZoneId,
};

/// Any simulated entity capable of being targeted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub access: AccessLevel,

    /// A human at the keyboard, as opposed to an autonomous creature
    pub player_controlled: bool,
    pub body: BodyKind,
    pub species: Option<SpeciesId>,
    pub npc_role: NpcRole,

    pub zone: ZoneId,
    pub position: Vec2,

    // Standing flags
    pub blessed: bool,
    pub invulnerable: bool,
    pub criminal: bool,
    /// Long-term murder counter; crossing the threshold renders Murderer
    pub kills: u32,
    pub always_murderer: bool,
    pub always_attackable: bool,
    /// Renders innocent despite a monster body (ambient wildlife); harming it
    /// is permitted without criminality
    pub initially_innocent: bool,
    pub animated_dead: bool,

    // Ownership
    pub summoned: bool,
    /// Tamed and under player command
    pub controlled: bool,
    pub control_master: Option<ActorId>,
    pub summon_master: Option<ActorId>,
    pub control_order: ControlOrder,
    pub control_target: Option<ActorId>,

    // Murderer-rule exemptions for summoned monster bodies
    pub familiar: bool,
    pub construct: bool,

    /// Species this actor has sworn vengeance against (players only)
    pub enemy_of_one: Option<SpeciesId>,

    // Young-player grace
    pub young: bool,
    /// Creatures that hunt new players regardless of the grace shield
    pub ignores_young_protection: bool,

    /// Victims who have permanently flagged this actor under classic theft
    pub perma_flagged_by: AHashSet<ActorId>,

    pub party: Option<PartyId>,

    /// Who attacked this actor recently (combat system appends/expires)
    pub aggressors: Vec<AggressionRecord>,
    /// Whom this actor attacked recently
    pub aggressed: Vec<AggressionRecord>,
}

impl Actor {
    /// A player character with no history and no flags
    pub fn player(name: impl Into<String>, zone: ZoneId) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            access: AccessLevel::Player,
            player_controlled: true,
            body: BodyKind::Human,
            species: None,
            npc_role: NpcRole::None,
            zone,
            position: Vec2::default(),
            blessed: false,
            invulnerable: false,
            criminal: false,
            kills: 0,
            always_murderer: false,
            always_attackable: false,
            initially_innocent: false,
            animated_dead: false,
            summoned: false,
            controlled: false,
            control_master: None,
            summon_master: None,
            control_order: ControlOrder::None,
            control_target: None,
            familiar: false,
            construct: false,
            enemy_of_one: None,
            young: false,
            ignores_young_protection: false,
            perma_flagged_by: AHashSet::new(),
            party: None,
            aggressors: Vec::new(),
            aggressed: Vec::new(),
        }
    }

    /// An autonomous creature (untamed, unsummoned)
    pub fn creature(name: impl Into<String>, zone: ZoneId, body: BodyKind) -> Self {
        Self {
            player_controlled: false,
            body,
            ..Self::player(name, zone)
        }
    }

    /// A protected vendor NPC
    pub fn vendor(name: impl Into<String>, zone: ZoneId) -> Self {
        Self {
            player_controlled: false,
            npc_role: NpcRole::Vendor,
            initially_innocent: true,
            ..Self::player(name, zone)
        }
    }

    /// Is this a creature rather than a player?
    pub fn is_creature(&self) -> bool {
        !self.player_controlled
    }

    /// The nearest owning master, control before summon
    pub fn master(&self) -> Option<ActorId> {
        self.control_master.or(self.summon_master)
    }

    /// Tamed pet under active player control
    pub fn is_pet(&self) -> bool {
        self.is_creature() && self.controlled
    }
}
