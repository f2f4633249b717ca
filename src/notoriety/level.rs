//! Notoriety classification levels and their render hues

use serde::{Deserialize, Serialize};

/// How a target is classified from one observer's point of view
///
/// Exactly one level comes back from every classification query. The levels
/// are listed in display order, not decision order; decision precedence lives
/// in the classifier cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notoriety {
    /// Lawful target; harming it is a criminal act
    Innocent,
    /// Guild/party ally. Never produced by the cascade itself; the alliance
    /// layer applies it on top of the engine's answer.
    Ally,
    /// Fair game without criminal consequence
    CanBeAttacked,
    /// Currently flagged for a witnessed unlawful act
    Criminal,
    /// Sworn enemy (enemy-of-one vengeance target)
    Enemy,
    /// Long-term murder reputation or permanent hostile marker
    Murderer,
    /// Cannot be targeted at all
    Invulnerable,
}

impl Notoriety {
    /// Client hue this level renders with
    pub fn hue(&self) -> u16 {
        match self {
            Notoriety::Innocent => 0x59,
            Notoriety::Ally => 0x3F,
            Notoriety::CanBeAttacked => 0x3B2,
            Notoriety::Criminal => 0x3B2,
            Notoriety::Enemy => 0x90,
            Notoriety::Murderer => 0x22,
            Notoriety::Invulnerable => 0x35,
        }
    }
}
