//! The notoriety cascade
//!
//! An ordered list of predicate -> level rules, evaluated top-down with early
//! return. The order is a contract: safety overrides first (invulnerability,
//! staff), then permanent reputation (murderer), then situational reputation
//! (criminal, trespass, combat history), then default innocence. Reordering
//! any two rules changes observable behavior.
//!
//! Must be thread-safe: callable concurrently with world mutation from any
//! execution context. The cascade takes `&World`, performs no writes, holds
//! no locks, and scans history lists by bounds-checked iteration only.

use crate::actor::aggression::{check_aggressed, check_aggressor};
use crate::actor::snapshot::Actor;
use crate::core::config::{config, RulesetConfig};
use crate::core::types::{ActorId, ControlOrder};
use crate::notoriety::level::Notoriety;
use crate::notoriety::master::resolve_master;
use crate::world::World;

/// Classify `target` from `observer`'s point of view under the global ruleset
///
/// Total over all actor pairs: a missing actor yields Innocent, never an
/// error. Exactly one level comes back per call.
pub fn classify(world: &World, observer: ActorId, target: ActorId) -> Notoriety {
    classify_with(config(), world, observer, target)
}

/// Classify under an explicit ruleset (tests probe era combinations this way)
pub fn classify_with(
    cfg: &RulesetConfig,
    world: &World,
    observer: ActorId,
    target: ActorId,
) -> Notoriety {
    classify_at_depth(cfg, world, observer, target, 0)
}

fn classify_at_depth(
    cfg: &RulesetConfig,
    world: &World,
    observer_id: ActorId,
    target_id: ActorId,
    depth: u8,
) -> Notoriety {
    // Corrupted ownership data could cycle through the recursive rules below;
    // the cap falls back to the terminal default rather than hanging.
    if depth >= cfg.master_chain_cap {
        return Notoriety::Innocent;
    }

    let (observer, target) = match (world.actors.get(observer_id), world.actors.get(target_id)) {
        (Some(o), Some(t)) => (o, t),
        _ => return Notoriety::Innocent,
    };

    // Blessed, invulnerable, and protected-role targets are untargetable
    // under sanctum rules
    if cfg.sanctum_rules && (target.blessed || target.invulnerable || target.npc_role.is_protected())
    {
        return Notoriety::Invulnerable;
    }

    // Permanent murderer marker, checked before the staff exemption so that
    // staff-controlled hostiles still render red
    if target.always_murderer {
        return Notoriety::Murderer;
    }

    // Staff are always fair game visually
    if target.access.is_staff() {
        return Notoriety::CanBeAttacked;
    }

    if observer.player_controlled && target.is_creature() {
        if target.master().is_some() {
            let ultimate = resolve_master(cfg, &world.actors, target_id);
            if world
                .actors
                .get(ultimate)
                .is_some_and(|m| m.access.is_staff())
            {
                return Notoriety::CanBeAttacked;
            }

            // Wardens' Age: a controlled creature wears its master's
            // notoriety, except toward someone it is actively fighting
            let control_master = target
                .control_master
                .filter(|id| world.actors.get(*id).is_some());
            if cfg.wardens_age {
                if let Some(master_id) = control_master {
                    if observer_id == master_id && check_aggressor(&target.aggressors, observer_id)
                        || check_aggressor(&observer.aggressors, target_id)
                    {
                        return Notoriety::CanBeAttacked;
                    }

                    return classify_at_depth(cfg, world, observer_id, master_id, depth + 1);
                }
            }
        }

        // Sworn vengeance against this creature's species
        if !target.summoned
            && !target.controlled
            && observer.enemy_of_one.is_some()
            && observer.enemy_of_one == target.species
        {
            return Notoriety::Enemy;
        }
    }

    // Long-term murder count, hostile summons, and the walking dead
    if target.kills >= cfg.murder_threshold
        || target.body.is_monster() && target.summoned && !target.familiar && !target.construct
        || target.animated_dead
    {
        return Notoriety::Murderer;
    }

    if target.criminal {
        return Notoriety::Criminal;
    }

    // Classic theft: a perma-flagged thief stays attackable to the victim
    if cfg.classic_theft && target.perma_flagged_by.contains(&observer_id) {
        return Notoriety::CanBeAttacked;
    }

    if target.always_attackable {
        return Notoriety::CanBeAttacked;
    }

    if check_house_trespass(world, observer_id, target) {
        return Notoriety::CanBeAttacked;
    }

    // Targets that are not initially-innocent default to attackable unless
    // they are human-bodied, ghosts, pets, or (in the Wardens' Age) players
    if !target.initially_innocent {
        let protected_kind = target.body.is_human()
            || target.body.is_ghost()
            || target.is_pet()
            || target.player_controlled;
        if !protected_kind || !cfg.wardens_age {
            return Notoriety::CanBeAttacked;
        }
    }

    // Recent combat history justifies retaliation
    if check_aggressor(&observer.aggressors, target_id) {
        return Notoriety::CanBeAttacked;
    }

    if check_aggressed(&observer.aggressed, target_id) {
        return Notoriety::CanBeAttacked;
    }

    // A pet standing guard against you is fair game
    if target.controlled
        && target.control_order == ControlOrder::Guard
        && target.control_target == Some(observer_id)
    {
        return Notoriety::CanBeAttacked;
    }

    // Owned-creature fallback: an owned creature sees what its master sees,
    // and any creature target is blanket-attackable at this point (preserved
    // literally from the source ruleset; see DESIGN.md)
    if observer.is_creature() {
        if let Some(master) = observer.master().and_then(|id| world.actors.get(id)) {
            if check_aggressor(&master.aggressors, target_id)
                || classify_at_depth(cfg, world, master.id, target_id, depth + 1)
                    == Notoriety::CanBeAttacked
                || target.is_creature()
            {
                return Notoriety::CanBeAttacked;
            }
        }
    }

    Notoriety::Innocent
}

/// House trespass: a friend of a private house may attack a non-friend
/// visitor inside it
///
/// False unless the target stands in a private house the observer is a friend
/// of, the target is not a friend, and (for a controlled target) its master
/// is not a friend either.
fn check_house_trespass(world: &World, observer: ActorId, target: &Actor) -> bool {
    let house = match world.houses.find_house_at(target.zone, target.position) {
        Some(h) => h,
        None => return false,
    };

    if house.public || !house.is_friend(observer) {
        return false;
    }

    if house.is_friend(target.id) {
        return false;
    }

    if !target.is_creature() || !target.controlled {
        return true;
    }

    // A controlled creature whose master is a friend is covered by the
    // master's standing
    match target.control_master {
        Some(master) if world.actors.get(master).is_some() => !house.is_friend(master),
        _ => true,
    }
}
