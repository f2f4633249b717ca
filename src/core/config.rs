//! Ruleset configuration: era/edition flags and engine limits
//!
//! The live rulesets the server can run under are selected here, once, at
//! startup. The notoriety engine reads these flags on every query; it never
//! mutates them. Tests pass a config explicitly through the `*_with` entry
//! points instead of touching the global.

use serde::{Deserialize, Serialize};

use crate::core::error::{EmberError, Result};

/// Which optional rules are active for this shard
///
/// The eras are cumulative: a shard running the Wardens' Age also runs the
/// Sanctum edition beneath it. `validate()` enforces that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    /// Sanctum edition: blessed, invulnerable, and protected-role NPCs
    /// (vendors, heralds) render Invulnerable instead of merely Innocent.
    pub sanctum_rules: bool,

    /// Wardens' Age: controlled creatures inherit their master's notoriety,
    /// and human-bodied or player targets are innocent by default rather
    /// than attackable.
    pub wardens_age: bool,

    /// Classic theft rules: a thief perma-flagged by a victim renders
    /// attackable to that victim indefinitely.
    pub classic_theft: bool,

    /// Long-term kill count at which an actor renders Murderer
    pub murder_threshold: u32,

    /// Hop cap for ownership-chain traversal and notoriety recursion
    ///
    /// A correctly-modeled world never needs more than one hop; the cap
    /// guarantees termination if ownership data is corrupted into a cycle.
    pub master_chain_cap: u8,
}

impl Default for RulesetConfig {
    fn default() -> Self {
        Self {
            sanctum_rules: true,
            wardens_age: true,
            classic_theft: false,
            murder_threshold: 5,
            master_chain_cap: 8,
        }
    }
}

impl RulesetConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The earliest ruleset: no sanctum protections, no notoriety
    /// inheritance, classic theft active
    pub fn classic() -> Self {
        Self {
            sanctum_rules: false,
            wardens_age: false,
            classic_theft: true,
            murder_threshold: 5,
            master_chain_cap: 8,
        }
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RulesetConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.wardens_age && !self.sanctum_rules {
            return Err(EmberError::InvalidConfig(
                "wardens_age requires sanctum_rules (eras are cumulative)".into(),
            ));
        }

        if self.murder_threshold == 0 {
            return Err(EmberError::InvalidConfig(
                "murder_threshold must be nonzero".into(),
            ));
        }

        if self.master_chain_cap == 0 {
            return Err(EmberError::InvalidConfig(
                "master_chain_cap must be nonzero".into(),
            ));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<RulesetConfig> = OnceLock::new();

/// Get the global ruleset config (initializes with defaults if not set)
pub fn config() -> &'static RulesetConfig {
    CONFIG.get_or_init(RulesetConfig::default)
}

/// Set the global ruleset config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: RulesetConfig) -> std::result::Result<(), RulesetConfig> {
    CONFIG.set(config)
}
