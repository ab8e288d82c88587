//! Scripted turn exercising moves, replacement and follow-up damage.

use tbr_core::{Effect, EntityId};
use tbr_runtime::{ActionDriver, DrainReport, Result};

use crate::actions::{MoveAction, WaitAction};

pub const GOBLIN: EntityId = EntityId(1);

/// Drain report plus the effects handed to resolution.
#[derive(Clone, Debug)]
pub struct TurnSummary {
    pub report: DrainReport,
    pub effects: Vec<Effect>,
}

/// Player steps east, bumps into the goblin, and the goblin waits.
pub fn run_demo_turn(driver: &mut ActionDriver) -> Result<TurnSummary> {
    driver.request(Box::new(MoveAction::new(EntityId::PLAYER, 1, 0)));
    driver.request(Box::new(
        MoveAction::new(EntityId::PLAYER, 1, 0).blocked_by(GOBLIN),
    ));
    driver.request(Box::new(WaitAction::new(GOBLIN)));

    let report = driver.drain()?;
    Ok(TurnSummary {
        report,
        effects: driver.take_effects(),
    })
}
