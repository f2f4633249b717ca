//! Map zones and their interaction rules
//!
//! A zone carries the flags that gate beneficial and harmful actions inside
//! it. Open-PvP zones clear both restriction flags; anything goes there.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::types::ZoneId;

/// One map zone/region
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: String,
    /// Beneficial actions between players are restricted here
    pub beneficial_restricted: bool,
    /// Harmful actions between players are restricted here
    pub harmful_restricted: bool,
    /// New-player grace shield applies in this zone
    pub young_protected: bool,
}

impl Zone {
    /// A zone under the standard consensual-PvP ruleset
    pub fn guarded(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            beneficial_restricted: true,
            harmful_restricted: true,
            young_protected: true,
        }
    }

    /// An open-PvP zone with no interaction restrictions
    pub fn open_pvp(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            beneficial_restricted: false,
            harmful_restricted: false,
            young_protected: false,
        }
    }
}

/// Zone lookup by id
#[derive(Debug, Default)]
pub struct ZoneDirectory {
    zones: AHashMap<ZoneId, Zone>,
}

impl ZoneDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, zone: Zone) {
        self.zones.insert(zone.id, zone);
    }

    pub fn get(&self, id: ZoneId) -> Option<&Zone> {
        self.zones.get(&id)
    }

    /// A missing zone restricts nothing (matches the original: no map rules
    /// means no restrictions)
    pub fn beneficial_restricted(&self, id: ZoneId) -> bool {
        self.zones.get(&id).is_some_and(|z| z.beneficial_restricted)
    }

    pub fn harmful_restricted(&self, id: ZoneId) -> bool {
        self.zones.get(&id).is_some_and(|z| z.harmful_restricted)
    }

    pub fn young_protected(&self, id: ZoneId) -> bool {
        self.zones.get(&id).is_some_and(|z| z.young_protected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_zone_restricts_both() {
        let z = Zone::guarded(ZoneId(1), "Hearthvale");
        assert!(z.beneficial_restricted);
        assert!(z.harmful_restricted);
        assert!(z.young_protected);
    }

    #[test]
    fn test_open_pvp_zone_restricts_nothing() {
        let z = Zone::open_pvp(ZoneId(2), "Felwood");
        assert!(!z.beneficial_restricted);
        assert!(!z.harmful_restricted);
        assert!(!z.young_protected);
    }

    #[test]
    fn test_missing_zone_restricts_nothing() {
        let dir = ZoneDirectory::new();
        assert!(!dir.beneficial_restricted(ZoneId(9)));
        assert!(!dir.harmful_restricted(ZoneId(9)));
        assert!(!dir.young_protected(ZoneId(9)));
    }

    #[test]
    fn test_directory_lookup() {
        let mut dir = ZoneDirectory::new();
        dir.insert(Zone::guarded(ZoneId(1), "Hearthvale"));

        assert!(dir.harmful_restricted(ZoneId(1)));
        assert_eq!(dir.get(ZoneId(1)).unwrap().name, "Hearthvale");
    }
}
