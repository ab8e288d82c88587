//! Action processing protocol shared by the driver and game content.
//!
//! `tbr-core` defines the [`Action`] trait, its [`ActionResult`], the
//! [`Effect`] records actions emit, and the owner identifiers actions run on
//! behalf of. Concrete actions live with the game content; the queue-draining
//! driver lives in `tbr-runtime`.
pub mod action;
pub mod effect;
pub mod error;
pub mod owner;

pub use action::{Action, ActionContext, ActionExt, ActionQueue, ActionResult, ActionState};
pub use effect::{DamageType, Effect, EffectKind};
pub use error::{ErrorSeverity, GameError};
pub use owner::{EntityId, GameId, Owner};
