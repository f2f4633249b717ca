//! Player-owned houses and friend standing
//!
//! Trespass rules: inside a private house, a friend of the house may lawfully
//! attack a visitor who is not also a friend. The classifier asks the house
//! directory for the house at the target's location and compares standings.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, HouseId, Vec2, ZoneId};

/// Axis-aligned footprint of a house
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// One player-owned structure
#[derive(Debug, Clone)]
pub struct House {
    pub id: HouseId,
    pub zone: ZoneId,
    pub bounds: Rect,
    /// Public houses have no trespass rules
    pub public: bool,
    pub owner: ActorId,
    friends: AHashSet<ActorId>,
}

impl House {
    pub fn new(id: HouseId, zone: ZoneId, bounds: Rect, owner: ActorId) -> Self {
        Self {
            id,
            zone,
            bounds,
            public: false,
            owner,
            friends: AHashSet::new(),
        }
    }

    pub fn add_friend(&mut self, actor: ActorId) {
        self.friends.insert(actor);
    }

    pub fn remove_friend(&mut self, actor: ActorId) {
        self.friends.remove(&actor);
    }

    /// The owner always counts as a friend of their own house
    pub fn is_friend(&self, actor: ActorId) -> bool {
        actor == self.owner || self.friends.contains(&actor)
    }
}

/// All houses, searchable by location
#[derive(Debug, Default)]
pub struct HouseDirectory {
    houses: Vec<House>,
}

impl HouseDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, house: House) {
        self.houses.push(house);
    }

    pub fn get(&self, id: HouseId) -> Option<&House> {
        self.houses.iter().find(|h| h.id == id)
    }

    pub fn get_mut(&mut self, id: HouseId) -> Option<&mut House> {
        self.houses.iter_mut().find(|h| h.id == id)
    }

    /// The house whose footprint covers `position` in `zone`, if any
    pub fn find_house_at(&self, zone: ZoneId, position: Vec2) -> Option<&House> {
        self.houses
            .iter()
            .find(|h| h.zone == zone && h.bounds.contains(position))
    }
}
