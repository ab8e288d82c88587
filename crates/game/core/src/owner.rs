//! Identifiers for whoever an action acts on behalf of.

use std::fmt;

/// Identifier of an entity living in the external game world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for the controllable player character.
    pub const PLAYER: Self = Self(0);

    /// Returns true if this entity represents the player.
    #[inline]
    pub const fn is_player(self) -> bool {
        self.0 == Self::PLAYER.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a game session an action may be bound to instead of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameId(pub u32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "game:{}", self.0)
    }
}

/// Who an action runs for.
///
/// An action is either performed by an entity, bound to the game context
/// itself (environmental or follow-up actions such as damage resolution), or
/// has no owner at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Owner {
    Entity(EntityId),
    Game(GameId),
    #[default]
    None,
}

impl Owner {
    /// Returns the owning entity, if any.
    #[inline]
    pub const fn entity(self) -> Option<EntityId> {
        match self {
            Owner::Entity(id) => Some(id),
            _ => None,
        }
    }

    /// Returns the bound game context, if any.
    #[inline]
    pub const fn game(self) -> Option<GameId> {
        match self {
            Owner::Game(id) => Some(id),
            _ => None,
        }
    }
}

impl From<EntityId> for Owner {
    fn from(id: EntityId) -> Self {
        Owner::Entity(id)
    }
}

impl From<GameId> for Owner {
    fn from(id: GameId) -> Self {
        Owner::Game(id)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Entity(id) => write!(f, "{id}"),
            Owner::Game(id) => write!(f, "{id}"),
            Owner::None => f.write_str("unowned"),
        }
    }
}
