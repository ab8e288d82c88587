//! Demo content for the action driver: a handful of concrete actions and the
//! scripted turn the `tbr` binary runs.
pub mod actions;
pub mod config;
pub mod logging;
pub mod scenario;

pub use actions::{DamageAction, MeleeAttackAction, MoveAction, WaitAction};
pub use config::ClientConfig;
pub use scenario::{TurnSummary, run_demo_turn};
