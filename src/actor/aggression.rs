//! Aggression history records and queries
//!
//! Every actor carries two rolling lists: who attacked it (aggressors) and
//! whom it attacked (aggressed). The combat system appends and expires
//! entries; the notoriety engine only scans them. A retaliation justified by
//! these lists is lawful — attacking back does not flag you criminal.

use serde::{Deserialize, Serialize};

use crate::core::types::{ActorId, Tick};

/// One attack relationship inside the rolling combat window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggressionRecord {
    pub attacker: ActorId,
    pub defender: ActorId,
    /// True when the attack was itself unlawful (the attacker went criminal
    /// for it); such entries never justify retaliation by the attacker.
    pub criminal_aggression: bool,
    /// Tick of the most recent blow in this relationship
    pub last_combat: Tick,
}

impl AggressionRecord {
    pub fn new(attacker: ActorId, defender: ActorId, criminal: bool, tick: Tick) -> Self {
        Self {
            attacker,
            defender,
            criminal_aggression: criminal,
            last_combat: tick,
        }
    }
}

/// Does `target` appear as the attacker anywhere in `list`?
///
/// First match wins; no ordering is guaranteed or required.
pub fn check_aggressor(list: &[AggressionRecord], target: ActorId) -> bool {
    list.iter().any(|info| info.attacker == target)
}

/// Does `target` appear as the defender in a lawful-aggression entry?
///
/// True means the owner of `list` attacked `target` without provocation but
/// without going criminal for it — which keeps `target` fair game.
pub fn check_aggressed(list: &[AggressionRecord], target: ActorId) -> bool {
    list.iter()
        .any(|info| !info.criminal_aggression && info.defender == target)
}

/// Drop records whose last blow predates `horizon`
///
/// Called by the combat system on its expiry timer, never by the engine.
pub fn expire_before(list: &mut Vec<AggressionRecord>, horizon: Tick) {
    list.retain(|info| info.last_combat >= horizon);
}
