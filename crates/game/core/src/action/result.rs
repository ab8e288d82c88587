//! Outcome of processing a single action.

use std::fmt;

use super::Action;

/// What happened when an action was processed.
///
/// `Replace` hands control to a different action: the driver processes the
/// replacement in place of the original (a blocked move becoming an attack,
/// for instance) instead of reporting an outcome for the original.
pub enum ActionResult {
    Success,
    Failure,
    Replace(Box<dyn Action>),
}

impl ActionResult {
    /// Wraps `action` as the replacement for the action being processed.
    pub fn replace<A>(action: A) -> Self
    where
        A: Action + 'static,
    {
        Self::Replace(Box::new(action))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ActionResult::Success)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ActionResult::Failure)
    }

    pub fn is_replacement(&self) -> bool {
        matches!(self, ActionResult::Replace(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionResult::Success => "success",
            ActionResult::Failure => "failure",
            ActionResult::Replace(_) => "replace",
        }
    }
}

impl From<Box<dyn Action>> for ActionResult {
    fn from(action: Box<dyn Action>) -> Self {
        ActionResult::Replace(action)
    }
}

impl fmt::Debug for ActionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionResult::Success => f.write_str("Success"),
            ActionResult::Failure => f.write_str("Failure"),
            ActionResult::Replace(action) => f.debug_tuple("Replace").field(&action.name()).finish(),
        }
    }
}
