//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for actors (players, creatures, NPCs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

/// Game tick counter (simulation time unit)
pub type Tick = u64;

/// Unique identifier for map zones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneId(pub u32);

/// Unique identifier for player-owned houses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HouseId(pub u32);

/// Unique identifier for parties/guilds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartyId(pub u32);

/// Unique identifier for creature species (enemy-of-one matching)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u32);

/// Access tier for an actor (staff tiers outrank Player)
///
/// Staff are exempt from beneficial/harmful restrictions and always render
/// attackable to ordinary players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AccessLevel {
    Player = 0,
    Counselor = 1,
    GameMaster = 2,
    Seer = 3,
    Administrator = 4,
}

impl AccessLevel {
    /// Returns true if this tier outranks ordinary players
    pub fn is_staff(&self) -> bool {
        *self > AccessLevel::Player
    }
}

/// Body classification of an actor
///
/// Drives the default-attackable rule: non-human, non-ghost bodies are fair
/// game in the early eras.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Human,
    Ghost,
    Monster,
    Animal,
}

impl BodyKind {
    pub fn is_human(&self) -> bool {
        matches!(self, BodyKind::Human)
    }

    pub fn is_ghost(&self) -> bool {
        matches!(self, BodyKind::Ghost)
    }

    pub fn is_monster(&self) -> bool {
        matches!(self, BodyKind::Monster)
    }
}

/// Protected non-combat NPC roles
///
/// Vendors and heralds render invulnerable under sanctum rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcRole {
    None,
    Vendor,
    Herald,
}

impl NpcRole {
    pub fn is_protected(&self) -> bool {
        !matches!(self, NpcRole::None)
    }
}

/// Standing order for a controlled creature
///
/// Only Guard participates in notoriety (a pet guarding against you is
/// attackable); the rest exist for the surrounding creature AI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlOrder {
    None,
    Follow,
    Guard,
    Attack,
}

/// 2D position within a zone
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
