//! Per-call process context.

use std::collections::VecDeque;

use super::Action;
use crate::effect::Effect;
use crate::owner::Owner;

/// FIFO queue of actions waiting to be processed.
pub type ActionQueue = VecDeque<Box<dyn Action>>;

/// Sinks an action may write to while it is being processed.
///
/// A context borrows the caller's effect list and action queue for exactly
/// one [`Action::process`] call. It is only created inside `process`, so an
/// action cannot reach either sink outside of that call:
///
/// ```compile_fail
/// use std::collections::VecDeque;
/// use tbr_core::{ActionContext, Owner};
///
/// let mut effects = Vec::new();
/// let mut actions = VecDeque::new();
/// let _ctx = ActionContext::new(Owner::None, &mut effects, &mut actions);
/// ```
pub struct ActionContext<'a> {
    owner: Owner,
    effects: &'a mut Vec<Effect>,
    actions: &'a mut ActionQueue,
    effects_added: usize,
    actions_added: usize,
}

impl<'a> ActionContext<'a> {
    pub(crate) fn new(
        owner: Owner,
        effects: &'a mut Vec<Effect>,
        actions: &'a mut ActionQueue,
    ) -> Self {
        Self {
            owner,
            effects,
            actions,
            effects_added: 0,
            actions_added: 0,
        }
    }

    /// Owner of the action being processed.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// Appends a follow-up action to the back of the queue.
    pub fn add_action<A>(&mut self, action: A)
    where
        A: Action + 'static,
    {
        self.enqueue(Box::new(action));
    }

    /// Appends an already boxed follow-up action to the back of the queue.
    pub fn enqueue(&mut self, action: Box<dyn Action>) {
        tracing::trace!(action = action.name(), "queued follow-up action");
        self.actions.push_back(action);
        self.actions_added += 1;
    }

    /// Appends an effect after every effect recorded so far.
    pub fn add_effect(&mut self, effect: Effect) {
        tracing::trace!(effect = effect.kind.as_snake_case(), "recorded effect");
        self.effects.push(effect);
        self.effects_added += 1;
    }

    /// Number of effects recorded through this context.
    pub fn effects_added(&self) -> usize {
        self.effects_added
    }

    /// Number of actions queued through this context.
    pub fn actions_added(&self) -> usize {
        self.actions_added
    }
}
