//! Synchronous action driver.
//!
//! [`ActionDriver`] owns the action queue and the effect list and processes
//! queued actions one at a time. It has no notion of turn order or timing: the
//! caller decides when to submit actions and when to drain them.

use std::mem;

use tbr_core::{Action, ActionExt, ActionQueue, ActionResult, Effect, EntityId};

use crate::config::DriverConfig;
use crate::error::{DriverError, Result};

/// Final outcome of one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Success,
    Failure,
}

/// What happened while processing one queued action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepReport {
    /// Name of the action popped from the queue.
    pub requested: &'static str,
    /// Name of the action that produced the outcome (differs after a replacement).
    pub resolved: &'static str,
    pub outcome: StepOutcome,
    /// Replacements followed before the outcome.
    pub replacements: usize,
    /// Entity whose energy became due, if any.
    pub charged: Option<EntityId>,
}

/// Aggregate of a [`ActionDriver::drain`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrainReport {
    pub steps: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub replacements: usize,
    /// Entities charged, in the order their actions succeeded.
    pub charged: Vec<EntityId>,
}

impl DrainReport {
    fn record(&mut self, step: &StepReport) {
        self.steps += 1;
        match step.outcome {
            StepOutcome::Success => self.succeeded += 1,
            StepOutcome::Failure => self.failed += 1,
        }
        self.replacements += step.replacements;
        self.charged.extend(step.charged);
    }
}

pub struct ActionDriver {
    config: DriverConfig,
    queue: ActionQueue,
    effects: Vec<Effect>,
    charged: Vec<EntityId>,
}

impl ActionDriver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            config,
            queue: ActionQueue::new(),
            effects: Vec::new(),
            charged: Vec::new(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Queues an action as-is.
    pub fn submit(&mut self, action: Box<dyn Action>) {
        tracing::trace!(action = action.name(), "action submitted");
        self.queue.push_back(action);
    }

    /// Queues an action an entity asked for; it spends energy once it succeeds.
    pub fn request(&mut self, mut action: Box<dyn Action>) {
        action.mark_for_energy_taking();
        self.submit(action);
    }

    /// Number of queued actions.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Effects recorded so far and not yet taken.
    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Hands over every recorded effect, leaving the list empty.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        mem::take(&mut self.effects)
    }

    /// Entities whose energy became due and has not been taken yet.
    ///
    /// Kept across steps and drains, including ones that end in an error.
    pub fn charged(&self) -> &[EntityId] {
        &self.charged
    }

    /// Hands over every pending energy charge, leaving the ledger empty.
    pub fn take_charged(&mut self) -> Vec<EntityId> {
        mem::take(&mut self.charged)
    }

    /// Processes the action at the front of the queue.
    ///
    /// Replacements are processed immediately in place of the action they
    /// replace, inheriting its energy mark. A rejected replacement chain leaves
    /// no trace: effects and follow-up actions recorded by its earlier links
    /// are rolled back. Returns `Ok(None)` when nothing is queued.
    pub fn step(&mut self) -> Result<Option<StepReport>> {
        let Some(mut action) = self.queue.pop_front() else {
            return Ok(None);
        };
        let requested = action.name();
        let effects_mark = self.effects.len();
        let queue_mark = self.queue.len();
        let mut replacements = 0;

        loop {
            match action.process(&mut self.effects, &mut self.queue) {
                ActionResult::Replace(mut next) => {
                    if replacements >= self.config.max_replacements {
                        tracing::error!(
                            action = requested,
                            depth = replacements + 1,
                            "replacement chain too deep"
                        );
                        self.effects.truncate(effects_mark);
                        self.queue.truncate(queue_mark);
                        return Err(DriverError::ReplacementChainTooDeep {
                            action: requested,
                            depth: replacements + 1,
                        });
                    }
                    if action.consumes_energy() {
                        next.mark_for_energy_taking();
                    }
                    tracing::debug!(from = action.name(), to = next.name(), "action replaced");
                    replacements += 1;
                    action = next;
                }
                ActionResult::Success => {
                    let charged = action.after_success();
                    self.charged.extend(charged);
                    return Ok(Some(StepReport {
                        requested,
                        resolved: action.name(),
                        outcome: StepOutcome::Success,
                        replacements,
                        charged,
                    }));
                }
                ActionResult::Failure => {
                    return Ok(Some(StepReport {
                        requested,
                        resolved: action.name(),
                        outcome: StepOutcome::Failure,
                        replacements,
                        charged: None,
                    }));
                }
            }
        }
    }

    /// Steps until the queue is empty, including actions queued along the way.
    ///
    /// Stops with [`DriverError::StepLimitExceeded`] after
    /// `max_steps_per_drain` steps; the remaining actions stay queued. Charges
    /// taken before an error stay available through [`take_charged`](Self::take_charged).
    pub fn drain(&mut self) -> Result<DrainReport> {
        let mut report = DrainReport::default();

        while !self.queue.is_empty() {
            if report.steps >= self.config.max_steps_per_drain {
                tracing::warn!(
                    limit = self.config.max_steps_per_drain,
                    pending = self.queue.len(),
                    "drain step limit reached"
                );
                return Err(DriverError::StepLimitExceeded {
                    limit: self.config.max_steps_per_drain,
                });
            }
            if let Some(step) = self.step()? {
                report.record(&step);
            }
        }

        tracing::debug!(
            steps = report.steps,
            succeeded = report.succeeded,
            failed = report.failed,
            effects = self.effects.len(),
            "queue drained"
        );
        Ok(report)
    }
}

impl Default for ActionDriver {
    fn default() -> Self {
        Self::new(DriverConfig::default())
    }
}
