//! Control-chain resolution
//!
//! A tamed or summoned creature answers to a master, and that master could in
//! principle be another creature with a master of its own. Resolution walks
//! ownership edges until it reaches an unowned actor. In a well-formed world
//! the chain is one hop; the walk still carries a hop cap and a visited set
//! so corrupted ownership data (a cycle, a self-reference) terminates at the
//! last valid link instead of hanging the server.

use ahash::AHashSet;

use crate::actor::registry::ActorRegistry;
use crate::actor::snapshot::Actor;
use crate::core::config::RulesetConfig;
use crate::core::types::ActorId;

/// The ultimate controller of `actor`, or `actor` itself if unowned
///
/// Dangling master ids (deleted actors) terminate the walk the same way a
/// missing master does.
pub fn resolve_master(cfg: &RulesetConfig, registry: &ActorRegistry, actor: ActorId) -> ActorId {
    let mut current = actor;
    let mut visited: AHashSet<ActorId> = AHashSet::new();
    visited.insert(current);

    for _ in 0..cfg.master_chain_cap {
        let next = match registry.get(current).and_then(Actor::master) {
            Some(id) => id,
            None => return current,
        };

        if registry.get(next).is_none() {
            // Master no longer exists; treat as unowned
            return current;
        }

        if !visited.insert(next) {
            tracing::warn!(?current, ?next, "ownership cycle detected in master chain");
            return current;
        }

        current = next;
    }

    tracing::warn!(?actor, cap = cfg.master_chain_cap, "master chain hop cap hit");
    current
}

/// The resolved master when it is a player: the "effective player identity"
/// the permission gates act on. A player resolves to itself.
pub fn effective_player<'a>(
    cfg: &RulesetConfig,
    registry: &'a ActorRegistry,
    actor: ActorId,
) -> Option<&'a Actor> {
    let resolved = resolve_master(cfg, registry, actor);
    registry.get(resolved).filter(|a| a.player_controlled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::snapshot::Actor;
    use crate::core::types::{BodyKind, ZoneId};

    fn world_with_pet_chain() -> (ActorRegistry, ActorId, ActorId) {
        let mut registry = ActorRegistry::new();
        let owner = registry.spawn(Actor::player("Owner", ZoneId(0)));

        let mut pet = Actor::creature("Bear", ZoneId(0), BodyKind::Animal);
        pet.controlled = true;
        pet.control_master = Some(owner);
        let pet_id = registry.spawn(pet);

        (registry, owner, pet_id)
    }

    #[test]
    fn test_unowned_actor_resolves_to_itself() {
        let mut registry = ActorRegistry::new();
        let id = registry.spawn(Actor::player("Lone", ZoneId(0)));

        let cfg = RulesetConfig::default();
        assert_eq!(resolve_master(&cfg, &registry, id), id);
    }

    #[test]
    fn test_pet_resolves_to_owner() {
        let (registry, owner, pet) = world_with_pet_chain();
        let cfg = RulesetConfig::default();
        assert_eq!(resolve_master(&cfg, &registry, pet), owner);
    }

    #[test]
    fn test_dangling_master_treated_as_unowned() {
        let (mut registry, owner, pet) = world_with_pet_chain();
        registry.remove(owner);

        let cfg = RulesetConfig::default();
        assert_eq!(resolve_master(&cfg, &registry, pet), pet);
    }

    #[test]
    fn test_cycle_terminates() {
        let mut registry = ActorRegistry::new();

        let mut a = Actor::creature("A", ZoneId(0), BodyKind::Monster);
        let mut b = Actor::creature("B", ZoneId(0), BodyKind::Monster);
        let a_id = a.id;
        let b_id = b.id;
        a.control_master = Some(b_id);
        b.control_master = Some(a_id);
        registry.spawn(a);
        registry.spawn(b);

        let cfg = RulesetConfig::default();
        // A -> B -> (A already visited): stops at B
        assert_eq!(resolve_master(&cfg, &registry, a_id), b_id);
    }

    #[test]
    fn test_self_reference_terminates() {
        let mut registry = ActorRegistry::new();
        let mut c = Actor::creature("Snake", ZoneId(0), BodyKind::Monster);
        let c_id = c.id;
        c.control_master = Some(c_id);
        registry.spawn(c);

        let cfg = RulesetConfig::default();
        assert_eq!(resolve_master(&cfg, &registry, c_id), c_id);
    }

    #[test]
    fn test_effective_player_of_pet() {
        let (registry, owner, pet) = world_with_pet_chain();
        let cfg = RulesetConfig::default();

        let effective = effective_player(&cfg, &registry, pet).unwrap();
        assert_eq!(effective.id, owner);
    }

    #[test]
    fn test_effective_player_of_wild_creature_is_none() {
        let mut registry = ActorRegistry::new();
        let wolf = registry.spawn(Actor::creature("Wolf", ZoneId(0), BodyKind::Monster));

        let cfg = RulesetConfig::default();
        assert!(effective_player(&cfg, &registry, wolf).is_none());
    }

    #[test]
    fn test_missing_actor_has_no_effective_player() {
        let registry = ActorRegistry::new();
        let cfg = RulesetConfig::default();
        assert!(effective_player(&cfg, &registry, ActorId::new()).is_none());
    }
}
