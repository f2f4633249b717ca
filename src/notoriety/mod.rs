//! The notoriety engine: classification cascade and action-permission gates
//!
//! Stateless by contract. Every entry point takes `&World`, reads a snapshot,
//! and returns a value; all state lives in the actors and is owned by the
//! surrounding simulation.

pub mod classifier;
pub mod gate;
pub mod level;
pub mod master;

pub use classifier::{classify, classify_with};
pub use gate::{allow_beneficial, allow_beneficial_with, allow_harmful, allow_harmful_with};
pub use level::Notoriety;
pub use master::{effective_player, resolve_master};
