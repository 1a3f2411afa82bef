//! Enemy behavior state machine.
//!
//! Pure functions that compute patrol motion and fire decisions for a
//! single enemy from plain data. No ECS dependency.
//!
//! Patrol always runs. Engage runs on top of it when the enemy may shoot;
//! neither blocks the other.

use glam::Vec3;
use rand::Rng;

use skirmish_core::constants::*;

/// Input to the enemy FSM for a single enemy.
#[derive(Debug, Clone, Copy)]
pub struct EnemyContext {
    pub position: Vec3,
    pub anchor: Vec3,
    pub patrol_radius: f32,
    pub waypoint: Vec3,
    pub move_speed: f32,
    pub facing: Vec3,
    pub can_shoot: bool,
    pub last_shot_ms: Option<u64>,
    pub player_position: Vec3,
    pub now_ms: u64,
    pub dt: f32,
}

/// Result of one patrol step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolStep {
    pub position: Vec3,
    pub waypoint: Vec3,
    pub facing: Vec3,
    pub waypoint_changed: bool,
}

/// Result of the engage check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngageDecision {
    Hold,
    Fire {
        /// Muzzle position the bullet starts from.
        origin: Vec3,
        /// Unit vector from the enemy toward the player.
        direction: Vec3,
    },
}

/// Combined output of one FSM evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub patrol: PatrolStep,
    pub engage: EngageDecision,
}

/// Evaluate patrol then engage for one enemy. Engage sees the
/// post-patrol position.
pub fn evaluate(ctx: &EnemyContext, rng: &mut impl Rng) -> EnemyUpdate {
    let patrol = patrol(ctx, rng);
    let engage = engage(&EnemyContext {
        position: patrol.position,
        ..*ctx
    });
    EnemyUpdate { patrol, engage }
}

/// Advance patrol by one tick.
///
/// Within reach of the waypoint a fresh one is drawn and the enemy holds
/// position; otherwise it steps toward the waypoint at `move_speed * dt`,
/// never past it.
pub fn patrol(ctx: &EnemyContext, rng: &mut impl Rng) -> PatrolStep {
    let to_waypoint = ctx.waypoint - ctx.position;
    let distance = to_waypoint.length();

    if distance < WAYPOINT_REACHED_RADIUS {
        return PatrolStep {
            position: ctx.position,
            waypoint: random_waypoint(ctx.anchor, ctx.patrol_radius, rng),
            facing: ctx.facing,
            waypoint_changed: true,
        };
    }

    let direction = to_waypoint / distance;
    let step = (ctx.move_speed * ctx.dt).min(distance);
    PatrolStep {
        position: ctx.position + direction * step,
        waypoint: ctx.waypoint,
        facing: flat_facing(direction).unwrap_or(ctx.facing),
        waypoint_changed: false,
    }
}

/// Decide whether the enemy fires this tick.
pub fn engage(ctx: &EnemyContext) -> EngageDecision {
    if !ctx.can_shoot {
        return EngageDecision::Hold;
    }

    let to_player = ctx.player_position - ctx.position;
    if to_player.length() >= ENEMY_ENGAGE_RANGE {
        return EngageDecision::Hold;
    }

    if !cooldown_elapsed(ctx.last_shot_ms, ctx.now_ms) {
        return EngageDecision::Hold;
    }

    // Player standing exactly on the enemy: no direction to aim along.
    let Some(direction) = to_player.try_normalize() else {
        return EngageDecision::Hold;
    };

    EngageDecision::Fire {
        origin: ctx.position + Vec3::Y * ENEMY_MUZZLE_HEIGHT,
        direction,
    }
}

/// True if an enemy that last fired at `last_shot_ms` may fire at `now_ms`.
pub fn cooldown_elapsed(last_shot_ms: Option<u64>, now_ms: u64) -> bool {
    match last_shot_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= ENEMY_FIRE_COOLDOWN_MS,
    }
}

/// Uniformly random point on the horizontal circle of `radius` around `anchor`.
pub fn random_waypoint(anchor: Vec3, radius: f32, rng: &mut impl Rng) -> Vec3 {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec3::new(
        anchor.x + angle.cos() * radius,
        anchor.y,
        anchor.z + angle.sin() * radius,
    )
}

/// Horizontal unit facing for a motion direction, `None` for vertical motion.
fn flat_facing(direction: Vec3) -> Option<Vec3> {
    Vec3::new(direction.x, 0.0, direction.z).try_normalize()
}
