//! Action domain.
//!
//! An action is one discrete unit of game logic (attack, move, damage, ...).
//! Processing an action yields an [`ActionResult`] and may record effects or
//! queue further actions through the [`ActionContext`] it is handed.
//!
//! # Module Structure
//!
//! - `context`: per-call sinks (`ActionContext`, `ActionQueue`)
//! - `result`: outcome type (`ActionResult`)

mod context;
mod result;

pub use context::{ActionContext, ActionQueue};
pub use result::ActionResult;

use crate::effect::Effect;
use crate::owner::{EntityId, GameId, Owner};

/// Bookkeeping shared by every action: its owner and the energy mark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionState {
    owner: Owner,
    consumes_energy: bool,
}

impl ActionState {
    pub fn new(owner: Owner) -> Self {
        Self {
            owner,
            consumes_energy: false,
        }
    }

    /// State for an action performed by `entity`.
    pub fn for_entity(entity: EntityId) -> Self {
        Self::new(Owner::Entity(entity))
    }

    /// State for an action bound to the game context rather than an entity.
    pub fn for_game(game: GameId) -> Self {
        Self::new(Owner::Game(game))
    }

    pub fn unowned() -> Self {
        Self::new(Owner::None)
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn consumes_energy(&self) -> bool {
        self.consumes_energy
    }

    pub fn mark_for_energy_taking(&mut self) {
        self.consumes_energy = true;
    }

    /// Clears the energy mark and returns the entity that owes the charge.
    ///
    /// Returns `None` without touching the mark when the action is unmarked
    /// or has no owning entity.
    pub fn take_energy_charge(&mut self) -> Option<EntityId> {
        if !self.consumes_energy {
            return None;
        }
        let entity = self.owner.entity()?;
        self.consumes_energy = false;
        Some(entity)
    }
}

/// A polymorphic unit of game logic.
///
/// Implementors provide access to their [`ActionState`] and the
/// [`on_process`](Action::on_process) body; everything else is provided.
/// Processing and the energy charge live on [`ActionExt`].
pub trait Action: Send {
    fn state(&self) -> &ActionState;

    fn state_mut(&mut self) -> &mut ActionState;

    /// Core logic of the action.
    ///
    /// Decides the outcome and records effects or follow-up actions through
    /// `ctx`. Never called directly; use [`ActionExt::process`].
    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult;

    /// Label used in logs.
    fn name(&self) -> &'static str {
        let full = core::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }

    fn owner(&self) -> Owner {
        self.state().owner()
    }

    /// Entity performing this action. `None` for game-bound or unowned actions.
    fn entity(&self) -> Option<EntityId> {
        self.state().owner().entity()
    }

    fn game(&self) -> Option<GameId> {
        self.state().owner().game()
    }

    /// Marks this action as spending its entity's energy once it succeeds.
    ///
    /// Called by the driver when an entity requests the action.
    fn mark_for_energy_taking(&mut self) {
        self.state_mut().mark_for_energy_taking();
    }

    fn consumes_energy(&self) -> bool {
        self.state().consumes_energy()
    }

    /// Returns a failed result, logging the failure.
    fn fail(&self) -> ActionResult {
        tracing::debug!(action = self.name(), owner = %self.owner(), "action failed");
        ActionResult::Failure
    }
}

/// Processing protocol shared by every action.
///
/// Blanket-implemented for all [`Action`]s, so no action can replace how its
/// sinks are scoped or how its energy charge is taken:
///
/// ```compile_fail
/// use tbr_core::{Action, ActionContext, ActionExt, ActionResult, ActionState};
///
/// struct Sneaky(ActionState);
///
/// impl Action for Sneaky {
///     fn state(&self) -> &ActionState { &self.0 }
///     fn state_mut(&mut self) -> &mut ActionState { &mut self.0 }
///     fn on_process(&mut self, _ctx: &mut ActionContext<'_>) -> ActionResult {
///         ActionResult::Success
///     }
/// }
///
/// impl ActionExt for Sneaky {}
/// ```
pub trait ActionExt: Action {
    /// Processes the action against the caller's effect list and action queue.
    ///
    /// Both sinks are borrowed only for the duration of this call.
    fn process(&mut self, effects: &mut Vec<Effect>, actions: &mut ActionQueue) -> ActionResult {
        let name = self.name();
        let owner = self.owner();
        let _span = tracing::debug_span!("process", action = name, %owner).entered();

        let mut ctx = ActionContext::new(owner, effects, actions);
        let result = self.on_process(&mut ctx);

        tracing::debug!(
            outcome = result.as_str(),
            effects = ctx.effects_added(),
            actions = ctx.actions_added(),
            "action processed"
        );
        result
    }

    /// Settles bookkeeping after the driver saw this action succeed.
    ///
    /// Returns the entity whose energy is due, at most once per mark.
    fn after_success(&mut self) -> Option<EntityId> {
        let entity = self.state_mut().take_energy_charge()?;
        // TODO: deduct through the entity once it exposes an energy API.
        tracing::warn!(%entity, action = self.name(), "entity energy spending is not implemented");
        Some(entity)
    }
}

impl<A: Action + ?Sized> ActionExt for A {}
