//! Effects produced while processing actions.
//!
//! Actions never resolve their own consequences. They append [`Effect`]
//! records to the caller's effect list, and a later resolution stage owned by
//! the game applies them to the world in the order they were recorded.

use crate::owner::{EntityId, Owner};

/// Damage type for resistances and damage calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    /// Physical damage (melee, projectiles).
    #[default]
    Physical,
    Fire,
    Cold,
    Lightning,
    Poison,
    Arcane,
    /// True damage (ignores all resistances).
    True,
}

/// What an effect does once resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    Damage { amount: u32, damage_type: DamageType },
    Heal { amount: u32 },
    /// Relative grid displacement of the target.
    Displace { dx: i32, dy: i32 },
    /// Named effect understood only by the resolver.
    Custom(String),
}

impl EffectKind {
    /// Returns the snake_case label used in logs.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            EffectKind::Damage { .. } => "damage",
            EffectKind::Heal { .. } => "heal",
            EffectKind::Displace { .. } => "displace",
            EffectKind::Custom(_) => "custom",
        }
    }
}

/// A single recorded consequence of an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    /// Owner of the action that produced this effect.
    pub source: Owner,
    /// Entity the effect lands on. `None` for area or world effects.
    pub target: Option<EntityId>,
    pub kind: EffectKind,
}

impl Effect {
    pub fn new(source: Owner, target: Option<EntityId>, kind: EffectKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    pub fn damage(source: Owner, target: EntityId, amount: u32, damage_type: DamageType) -> Self {
        Self::new(
            source,
            Some(target),
            EffectKind::Damage {
                amount,
                damage_type,
            },
        )
    }

    pub fn heal(source: Owner, target: EntityId, amount: u32) -> Self {
        Self::new(source, Some(target), EffectKind::Heal { amount })
    }

    pub fn displace(source: Owner, target: EntityId, dx: i32, dy: i32) -> Self {
        Self::new(source, Some(target), EffectKind::Displace { dx, dy })
    }
}
