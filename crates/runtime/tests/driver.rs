use tbr_core::{
    Action, ActionContext, ActionResult, ActionState, DamageType, Effect, EffectKind, EntityId,
    ErrorSeverity, GameError, GameId, Owner,
};
use tbr_runtime::{ActionDriver, DriverConfig, DriverError, StepOutcome};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Records a custom effect tagged with its label, then succeeds.
struct Mark {
    state: ActionState,
    label: &'static str,
}

impl Mark {
    fn new(owner: EntityId, label: &'static str) -> Self {
        Self {
            state: ActionState::for_entity(owner),
            label,
        }
    }
}

impl Action for Mark {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn name(&self) -> &'static str {
        self.label
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let owner = ctx.owner();
        ctx.add_effect(Effect::new(
            owner,
            None,
            EffectKind::Custom(self.label.to_string()),
        ));
        ActionResult::Success
    }
}

/// Queues two marks and succeeds.
struct Fork {
    state: ActionState,
}

impl Action for Fork {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let entity = EntityId(1);
        ctx.add_action(Mark::new(entity, "left"));
        ctx.add_action(Mark::new(entity, "right"));
        ctx.add_effect(Effect::new(ctx.owner(), None, EffectKind::Custom("fork".into())));
        ActionResult::Success
    }
}

struct Strike {
    state: ActionState,
    target: EntityId,
}

impl Action for Strike {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.add_effect(Effect::damage(ctx.owner(), self.target, 4, DamageType::Physical));
        ActionResult::Success
    }
}

/// Becomes a strike when something stands in the way.
struct Step {
    state: ActionState,
    blocked_by: Option<EntityId>,
}

impl Action for Step {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        match self.blocked_by {
            Some(target) => ActionResult::replace(Strike {
                state: ActionState::new(ctx.owner()),
                target,
            }),
            None => {
                if let Some(entity) = self.entity() {
                    ctx.add_effect(Effect::displace(ctx.owner(), entity, 1, 0));
                }
                ActionResult::Success
            }
        }
    }
}

struct Refuse {
    state: ActionState,
}

impl Action for Refuse {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, _ctx: &mut ActionContext<'_>) -> ActionResult {
        self.fail()
    }
}

/// Replaces itself forever.
struct Mirror {
    state: ActionState,
}

impl Action for Mirror {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, _ctx: &mut ActionContext<'_>) -> ActionResult {
        ActionResult::replace(Mirror {
            state: self.state,
        })
    }
}

/// Queues another echo every time it runs.
struct Echo {
    state: ActionState,
}

impl Action for Echo {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.add_action(Echo {
            state: ActionState::unowned(),
        });
        ActionResult::Success
    }
}

/// Records an effect and queues a follow-up before replacing itself.
struct Relapse {
    state: ActionState,
}

impl Action for Relapse {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        ctx.add_effect(Effect::new(ctx.owner(), None, EffectKind::Custom("relapse".into())));
        ctx.add_action(Mark::new(EntityId(1), "aftermath"));
        ActionResult::replace(Relapse { state: self.state })
    }
}

fn labels(effects: &[Effect]) -> Vec<String> {
    effects
        .iter()
        .filter_map(|effect| match &effect.kind {
            EffectKind::Custom(label) => Some(label.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_queue_has_nothing_to_do() {
    let mut driver = ActionDriver::default();

    assert!(driver.is_idle());
    assert_eq!(driver.step(), Ok(None));

    let report = driver.drain().unwrap();
    assert_eq!(report.steps, 0);
    assert!(driver.effects().is_empty());
}

#[test]
fn requested_action_charges_its_entity_once() {
    init_tracing();
    let mut driver = ActionDriver::default();
    driver.request(Box::new(Mark::new(EntityId(5), "rest")));

    let step = driver.step().unwrap().expect("one action queued");

    assert_eq!(step.outcome, StepOutcome::Success);
    assert_eq!(step.charged, Some(EntityId(5)));
    assert_eq!(step.replacements, 0);
    assert!(driver.is_idle());
}

#[test]
fn submitted_action_charges_nobody() {
    let mut driver = ActionDriver::default();
    driver.submit(Box::new(Mark::new(EntityId(5), "rest")));

    let report = driver.drain().unwrap();

    assert_eq!(report.succeeded, 1);
    assert!(report.charged.is_empty());
}

#[test]
fn blocked_step_is_replaced_by_strike() {
    init_tracing();
    let mut driver = ActionDriver::default();
    driver.request(Box::new(Step {
        state: ActionState::for_entity(EntityId::PLAYER),
        blocked_by: Some(EntityId(3)),
    }));

    let step = driver.step().unwrap().expect("one action queued");

    assert_eq!(step.requested, "Step");
    assert_eq!(step.resolved, "Strike");
    assert_eq!(step.replacements, 1);
    assert_eq!(step.charged, Some(EntityId::PLAYER));
    assert_eq!(
        driver.take_effects(),
        vec![Effect::damage(
            Owner::Entity(EntityId::PLAYER),
            EntityId(3),
            4,
            DamageType::Physical
        )]
    );
    assert!(driver.effects().is_empty());
}

#[test]
fn open_step_moves_the_entity() {
    let mut driver = ActionDriver::default();
    driver.request(Box::new(Step {
        state: ActionState::for_entity(EntityId(2)),
        blocked_by: None,
    }));

    let report = driver.drain().unwrap();

    assert_eq!(report.charged, vec![EntityId(2)]);
    assert_eq!(
        driver.effects(),
        &[Effect::displace(Owner::Entity(EntityId(2)), EntityId(2), 1, 0)]
    );
}

#[test]
fn failure_is_reported_without_charge() {
    init_tracing();
    let mut driver = ActionDriver::default();
    driver.request(Box::new(Refuse {
        state: ActionState::for_entity(EntityId(8)),
    }));

    let step = driver.step().unwrap().expect("one action queued");

    assert_eq!(step.outcome, StepOutcome::Failure);
    assert_eq!(step.charged, None);
}

#[test]
fn follow_ups_run_in_queue_order() {
    let mut driver = ActionDriver::default();
    driver.submit(Box::new(Fork {
        state: ActionState::for_game(GameId(1)),
    }));
    driver.submit(Box::new(Mark::new(EntityId(2), "queued")));

    let report = driver.drain().unwrap();

    assert_eq!(report.steps, 4);
    assert_eq!(report.succeeded, 4);
    assert_eq!(labels(driver.effects()), ["fork", "queued", "left", "right"]);
    assert_eq!(driver.effects()[0].source, Owner::Game(GameId(1)));
}

#[test]
fn endless_replacement_is_rejected() {
    let mut driver = ActionDriver::new(DriverConfig::new().with_max_replacements(2));
    driver.submit(Box::new(Mirror {
        state: ActionState::unowned(),
    }));

    let error = driver.step().unwrap_err();

    assert_eq!(
        error,
        DriverError::ReplacementChainTooDeep {
            action: "Mirror",
            depth: 3,
        }
    );
}

#[test]
fn drain_stops_at_step_limit() {
    let mut driver = ActionDriver::new(DriverConfig::new().with_max_steps_per_drain(3));
    driver.submit(Box::new(Echo {
        state: ActionState::unowned(),
    }));

    let error = driver.drain().unwrap_err();

    assert_eq!(error, DriverError::StepLimitExceeded { limit: 3 });
    assert_eq!(driver.pending(), 1);
}

#[test]
fn zero_replacement_limit_rejects_first_replacement() {
    let mut driver = ActionDriver::new(DriverConfig::new().with_max_replacements(0));
    driver.request(Box::new(Step {
        state: ActionState::for_entity(EntityId::PLAYER),
        blocked_by: Some(EntityId(3)),
    }));

    let error = driver.step().unwrap_err();

    assert_eq!(
        error,
        DriverError::ReplacementChainTooDeep {
            action: "Step",
            depth: 1,
        }
    );
    assert!(driver.charged().is_empty());
}

#[test]
fn rejected_chain_rolls_back_its_output() {
    init_tracing();
    let mut driver = ActionDriver::new(DriverConfig::new().with_max_replacements(1));
    driver.submit(Box::new(Mark::new(EntityId(2), "before")));
    driver.submit(Box::new(Relapse {
        state: ActionState::unowned(),
    }));
    driver.submit(Box::new(Mark::new(EntityId(2), "after")));

    assert!(driver.step().unwrap().is_some());
    let error = driver.step().unwrap_err();

    assert!(matches!(
        error,
        DriverError::ReplacementChainTooDeep { depth: 2, .. }
    ));
    assert_eq!(labels(driver.effects()), ["before"]);
    assert_eq!(driver.pending(), 1);

    driver.drain().unwrap();
    assert_eq!(labels(driver.effects()), ["before", "after"]);
}

#[test]
fn charges_survive_step_limit() {
    let mut driver = ActionDriver::new(DriverConfig::new().with_max_steps_per_drain(3));
    driver.request(Box::new(Echo {
        state: ActionState::for_entity(EntityId(6)),
    }));

    let error = driver.drain().unwrap_err();

    assert_eq!(error, DriverError::StepLimitExceeded { limit: 3 });
    assert_eq!(driver.take_charged(), vec![EntityId(6)]);
    assert!(driver.charged().is_empty());
}

#[test]
fn charges_accumulate_until_taken() {
    let mut driver = ActionDriver::default();
    driver.request(Box::new(Mark::new(EntityId(4), "one")));
    driver.drain().unwrap();
    driver.request(Box::new(Mark::new(EntityId(5), "two")));
    driver.drain().unwrap();

    assert_eq!(driver.charged(), &[EntityId(4), EntityId(5)]);
    assert_eq!(driver.take_charged(), vec![EntityId(4), EntityId(5)]);
}

#[test]
fn driver_errors_are_classified() {
    let chain = DriverError::ReplacementChainTooDeep {
        action: "Mirror",
        depth: 9,
    };
    assert_eq!(chain.severity(), ErrorSeverity::Internal);
    assert!(chain.severity().is_internal());
    assert_eq!(chain.error_code(), "DRIVER_REPLACEMENT_CHAIN_TOO_DEEP");

    let limit = DriverError::StepLimitExceeded { limit: 3 };
    assert_eq!(limit.severity(), ErrorSeverity::Recoverable);
    assert!(limit.severity().is_recoverable());
    assert_eq!(limit.error_code(), "DRIVER_STEP_LIMIT_EXCEEDED");
    assert_eq!(
        limit.to_string(),
        "drain exceeded 3 steps with actions still queued"
    );
}
