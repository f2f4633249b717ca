//! Emberfall - Entry Point
//!
//! Interactive driver for the notoriety engine. It spawns a small scenario
//! world, then answers classification and permission queries from stdin -
//! standing in for the tick loop and network handlers that call the engine
//! in a live shard.

use std::io::{self, Write};
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use emberfall::actor::Actor;
use emberfall::core::config::{config, set_config, RulesetConfig};
use emberfall::core::error::Result;
use emberfall::core::types::{ActorId, BodyKind, Vec2, ZoneId};
use emberfall::notoriety::{allow_beneficial, allow_harmful, classify};
use emberfall::world::{World, Zone};

const SCENARIO_SEED: u64 = 0xE3B0;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("emberfall=debug")
        .init();

    tracing::info!("Emberfall starting...");

    // Ruleset comes from ruleset.toml when present, defaults otherwise
    let ruleset_path = Path::new("ruleset.toml");
    if ruleset_path.exists() {
        let loaded = RulesetConfig::load(ruleset_path)?;
        if set_config(loaded).is_err() {
            tracing::warn!("ruleset already initialized; file ignored");
        }
    }
    tracing::info!(ruleset = ?config(), "active ruleset");

    let mut world = World::new();
    spawn_scenario(&mut world);

    println!("\n=== EMBERFALL ===");
    println!("Notoriety engine driver");
    println!();
    println!("Commands:");
    println!("  status / s               - List actors and zones");
    println!("  noto <a> <b>             - Classify b from a's point of view");
    println!("  heal <a> <b>             - May a act beneficially on b?");
    println!("  harm <a> <b>             - May a act harmfully on b?");
    println!("  flag <name> <field> [n]  - Set criminal/young/kills on an actor");
    println!("  dump <name>              - Print an actor snapshot as JSON");
    println!("  quit / q                 - Exit");
    println!();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["q"] => break,
            ["status"] | ["s"] => display_status(&world),
            ["noto", a, b] => with_pair(&world, a, b, |world, a, b| {
                let level = classify(world, a, b);
                println!("{:?} (hue 0x{:X})", level, level.hue());
            }),
            ["heal", a, b] => with_pair(&world, a, b, |world, a, b| {
                println!("{}", allow_beneficial(world, a, b));
            }),
            ["harm", a, b] => with_pair(&world, a, b, |world, a, b| {
                println!("{}", allow_harmful(world, a, b));
            }),
            ["flag", name, rest @ ..] => flag_actor(&mut world, name, rest),
            ["dump", name] => dump_actor(&world, name),
            _ => println!("Unknown command"),
        }
    }

    tracing::info!("Emberfall shutting down");
    Ok(())
}

/// Seeded scenario: a guarded town, an open-PvP wilderness, and a cast that
/// exercises every classification path
fn spawn_scenario(world: &mut World) {
    let town = ZoneId(0);
    let wilds = ZoneId(1);
    world.zones.insert(Zone::guarded(town, "Hearthvale"));
    world.zones.insert(Zone::open_pvp(wilds, "Felwood"));

    let mut rng = ChaCha8Rng::seed_from_u64(SCENARIO_SEED);
    let mut place = |actor: &mut Actor| {
        actor.position = Vec2::new(rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0));
    };

    let mut aelric = Actor::player("Aelric", town);
    place(&mut aelric);
    let aelric = world.actors.spawn(aelric);

    let mut novice = Actor::player("Novice", town);
    novice.young = true;
    place(&mut novice);
    world.actors.spawn(novice);

    let mut red = Actor::player("Red", wilds);
    red.kills = 7;
    place(&mut red);
    world.actors.spawn(red);

    let mut bear = Actor::creature("Bear", town, BodyKind::Animal);
    bear.controlled = true;
    bear.control_master = Some(aelric);
    bear.initially_innocent = true;
    place(&mut bear);
    world.actors.spawn(bear);

    let mut wolf = Actor::creature("Wolf", wilds, BodyKind::Monster);
    place(&mut wolf);
    world.actors.spawn(wolf);

    let mut vendor = Actor::vendor("Provisioner", town);
    place(&mut vendor);
    world.actors.spawn(vendor);

    tracing::debug!(actors = world.actors.len(), "scenario spawned");
}

fn display_status(world: &World) {
    println!("Actors ({}):", world.actors.len());
    let mut names: Vec<&Actor> = world.actors.iter().map(|(_, a)| a).collect();
    names.sort_by(|a, b| a.name.cmp(&b.name));
    for actor in names {
        let zone = world
            .zones
            .get(actor.zone)
            .map(|z| z.name.as_str())
            .unwrap_or("?");
        println!(
            "  {:<12} {} zone={} criminal={} kills={} young={}",
            actor.name,
            if actor.player_controlled { "player" } else { "creature" },
            zone,
            actor.criminal,
            actor.kills,
            actor.young,
        );
    }
}

fn with_pair(world: &World, a: &str, b: &str, f: impl FnOnce(&World, ActorId, ActorId)) {
    match (lookup(world, a), lookup(world, b)) {
        (Some(a), Some(b)) => f(world, a, b),
        _ => println!("Unknown actor name"),
    }
}

fn lookup(world: &World, name: &str) -> Option<ActorId> {
    world.actors.find_by_name(name).map(|a| a.id)
}

fn flag_actor(world: &mut World, name: &str, rest: &[&str]) {
    let Some(id) = lookup(world, name) else {
        println!("Unknown actor name");
        return;
    };
    let Some(actor) = world.actors.get_mut(id) else {
        return;
    };

    match rest {
        ["criminal"] => {
            actor.criminal = !actor.criminal;
            println!("{} criminal={}", actor.name, actor.criminal);
        }
        ["young"] => {
            actor.young = !actor.young;
            println!("{} young={}", actor.name, actor.young);
        }
        ["kills", n] => match n.parse() {
            Ok(kills) => {
                actor.kills = kills;
                println!("{} kills={}", actor.name, actor.kills);
            }
            Err(_) => println!("kills takes a number"),
        },
        _ => println!("Unknown flag (criminal, young, kills <n>)"),
    }
}

fn dump_actor(world: &World, name: &str) {
    match world.actors.find_by_name(name) {
        Some(actor) => match serde_json::to_string_pretty(actor) {
            Ok(json) => println!("{}", json),
            Err(e) => println!("Serialization failed: {}", e),
        },
        None => println!("Unknown actor name"),
    }
}
