//! Beneficial/harmful action gates
//!
//! Pre-checks run before any beneficial or harmful game action executes.
//! Callers short-circuit the action entirely on `false` and surface a
//! refusal; nothing is partially applied. Both gates are single-shot pure
//! evaluations over the current world snapshot, re-run on every attempt.

use crate::actor::aggression::{check_aggressed, check_aggressor};
use crate::actor::snapshot::Actor;
use crate::core::config::{config, RulesetConfig};
use crate::core::types::{AccessLevel, ActorId};
use crate::notoriety::classifier::classify_with;
use crate::notoriety::level::Notoriety;
use crate::notoriety::master::effective_player;
use crate::world::World;

/// May `from` perform a beneficial act (heal, cure, bless) on `target`?
pub fn allow_beneficial(world: &World, from: ActorId, target: ActorId) -> bool {
    allow_beneficial_with(config(), world, from, target)
}

pub fn allow_beneficial_with(
    cfg: &RulesetConfig,
    world: &World,
    from_id: ActorId,
    target_id: ActorId,
) -> bool {
    let (from, target) = match (world.actors.get(from_id), world.actors.get(target_id)) {
        (Some(f), Some(t)) => (f, t),
        // Malformed input is covered by upstream validity checks; stay
        // permissive rather than stall the action pipeline
        _ => return true,
    };

    if from.access.is_staff() || target.access.is_staff() {
        return true;
    }

    let pm_from = effective_player(cfg, &world.actors, from_id);
    let pm_target = effective_player(cfg, &world.actors, target_id);

    if !world.zones.beneficial_restricted(target.zone) {
        return true; // Open-PvP zone, anything goes
    }

    // Autonomous creatures (and staff-run pets) have no restrictions
    if !from.player_controlled && pm_from.map_or(true, |p| p.access != AccessLevel::Player) {
        return true;
    }

    if target.is_creature() && !target.controlled {
        return false; // Players cannot heal uncontrolled creatures
    }

    // Young players cannot aid veterans or their pets
    if pm_from.is_some_and(|p| p.young) && pm_target.is_some_and(|p| !p.young) {
        return false;
    }

    true
}

/// May `from` perform a harmful act (attack, curse, steal) on `target`?
pub fn allow_harmful(world: &World, from: ActorId, target: ActorId) -> bool {
    allow_harmful_with(config(), world, from, target)
}

pub fn allow_harmful_with(
    cfg: &RulesetConfig,
    world: &World,
    from_id: ActorId,
    target_id: ActorId,
) -> bool {
    let (from, target) = match (world.actors.get(from_id), world.actors.get(target_id)) {
        (Some(f), Some(t)) => (f, t),
        _ => return true,
    };

    if from.access.is_staff() || target.access.is_staff() {
        return true;
    }

    let pm_from = effective_player(cfg, &world.actors, from_id);

    if !world.zones.harmful_restricted(target.zone) {
        return true; // Open-PvP zone, anything goes
    }

    // Unowned (or staff-owned) autonomous creatures answer only to combat
    // history and the young-player shield
    if !from.player_controlled && pm_from.map_or(true, |p| p.access != AccessLevel::Player) {
        return check_aggressor(&from.aggressors, target_id)
            || check_aggressed(&from.aggressed, target_id)
            || !(target.player_controlled && check_young_protection(world, target, from));
    }

    // Controlled pets and other players' summons are off limits
    if target.controlled
        || target.summoned
            && target.summon_master != Some(from_id)
            && summon_master_is_player(world, target)
    {
        return false;
    }

    // A monster's summon may always strike players
    if pm_from.is_none() && from.is_creature() && from.summoned && target.player_controlled {
        return true;
    }

    if target.player_controlled {
        return false; // Players cannot harm other players under restricted rules
    }

    target.initially_innocent
        || classify_with(cfg, world, from_id, target_id) != Notoriety::Innocent
}

/// Does the new-player grace shield protect `target` from `from`?
///
/// Requires the target to be young, standing in a young-protected zone, and
/// the attacker not to be a creature bred to ignore the shield.
pub fn check_young_protection(world: &World, target: &Actor, from: &Actor) -> bool {
    if !target.young {
        return false;
    }

    if !world.zones.young_protected(target.zone) {
        return false;
    }

    if from.is_creature() && from.ignores_young_protection {
        return false;
    }

    true
}

fn summon_master_is_player(world: &World, target: &Actor) -> bool {
    target
        .summon_master
        .and_then(|id| world.actors.get(id))
        .is_some_and(|m| m.player_controlled)
}
