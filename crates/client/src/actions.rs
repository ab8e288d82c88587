//! Concrete actions used by the demo turn.

use tbr_core::{
    Action, ActionContext, ActionResult, ActionState, DamageType, Effect, EntityId, GameId, Owner,
};

/// Base damage dealt by an unarmed melee attack.
pub const MELEE_DAMAGE: u32 = 3;

/// Actor passes without doing anything.
pub struct WaitAction {
    state: ActionState,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self {
            state: ActionState::for_entity(actor),
        }
    }
}

impl Action for WaitAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, _ctx: &mut ActionContext<'_>) -> ActionResult {
        ActionResult::Success
    }
}

/// Steps one tile. Bumping into another entity turns the move into an attack.
pub struct MoveAction {
    state: ActionState,
    dx: i32,
    dy: i32,
    blocked_by: Option<EntityId>,
}

impl MoveAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self {
            state: ActionState::for_entity(actor),
            dx,
            dy,
            blocked_by: None,
        }
    }

    /// Marks the destination as occupied by `occupant`.
    pub fn blocked_by(mut self, occupant: EntityId) -> Self {
        self.blocked_by = Some(occupant);
        self
    }
}

impl Action for MoveAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let Some(actor) = self.entity() else {
            return self.fail();
        };

        match self.blocked_by {
            Some(occupant) if occupant == actor => self.fail(),
            Some(occupant) => ActionResult::replace(MeleeAttackAction::new(actor, occupant)),
            None => {
                ctx.add_effect(Effect::displace(ctx.owner(), actor, self.dx, self.dy));
                ActionResult::Success
            }
        }
    }
}

/// Hits an adjacent entity by queueing a damage action.
pub struct MeleeAttackAction {
    state: ActionState,
    target: EntityId,
    damage: u32,
}

impl MeleeAttackAction {
    pub fn new(attacker: EntityId, target: EntityId) -> Self {
        Self {
            state: ActionState::for_entity(attacker),
            target,
            damage: MELEE_DAMAGE,
        }
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = damage;
        self
    }
}

impl Action for MeleeAttackAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        let Some(attacker) = self.entity() else {
            return self.fail();
        };

        ctx.add_action(DamageAction::new(
            GameId::default(),
            attacker,
            self.target,
            self.damage,
        ));
        ActionResult::Success
    }
}

/// Game-bound damage resolution queued by attacks.
pub struct DamageAction {
    state: ActionState,
    source: EntityId,
    target: EntityId,
    amount: u32,
    damage_type: DamageType,
}

impl DamageAction {
    pub fn new(game: GameId, source: EntityId, target: EntityId, amount: u32) -> Self {
        Self {
            state: ActionState::for_game(game),
            source,
            target,
            amount,
            damage_type: DamageType::Physical,
        }
    }

    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = damage_type;
        self
    }
}

impl Action for DamageAction {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn on_process(&mut self, ctx: &mut ActionContext<'_>) -> ActionResult {
        if self.amount == 0 {
            return self.fail();
        }

        ctx.add_effect(Effect::damage(
            Owner::Entity(self.source),
            self.target,
            self.amount,
            self.damage_type,
        ));
        ActionResult::Success
    }
}
