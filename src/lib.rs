//! Emberfall - notoriety and action-permission engine
//!
//! The reputation core of a live-world multiplayer simulation: given any two
//! actors, classify how one should render to the other (innocent, criminal,
//! enemy, murderer, attackable, invulnerable) and decide whether a beneficial
//! or harmful action between them is currently permitted.

pub mod actor;
pub mod core;
pub mod notoriety;
pub mod world;
