/// Projectile creation (rate-limited firing) and per-tick movement.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Entity, Projectile, ProjectileOwner};
use crate::formation::Formation;

// ── Rate limiting ────────────────────────────────────────────────────────────

/// Allows one action per `interval_ms`, measured on an external clock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimiter {
    interval_ms: u64,
    last_ms: Option<u64>,
}

impl RateLimiter {
    pub fn new(interval_ms: u64) -> Self {
        RateLimiter {
            interval_ms,
            last_ms: None,
        }
    }

    /// Record an action at `now_ms` if enough time has passed since the
    /// previous one. The first call always succeeds.
    pub fn try_acquire(&mut self, now_ms: u64) -> bool {
        if let Some(last) = self.last_ms {
            if now_ms.saturating_sub(last) < self.interval_ms {
                return false;
            }
        }
        self.last_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

// ── Spawning ─────────────────────────────────────────────────────────────────

fn spawn(x_center: i32, y: i32, speed: i32, config: &GameConfig) -> Projectile {
    Projectile {
        body: Entity::new(
            x_center - config.projectile_width / 2,
            y,
            config.projectile_width,
            config.projectile_height,
        ),
        speed,
    }
}

/// Projectile leaving the centre of the player's top edge.
pub fn player_projectile(player: &Entity, config: &GameConfig) -> Projectile {
    spawn(player.center_x(), player.y, config.player_projectile_speed, config)
}

/// Projectile leaving the centre of `shooter`'s bottom edge.
pub fn enemy_projectile(shooter: &Entity, config: &GameConfig) -> Projectile {
    spawn(shooter.center_x(), shooter.bottom(), config.enemy_projectile_speed, config)
}

/// Pick a uniformly random shooter from the formation and fire from it.
/// `None` when the formation is empty.
pub fn enemy_volley(
    formation: &Formation,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Option<Projectile> {
    if formation.is_empty() {
        return None;
    }
    let shooter = &formation.enemies[rng.gen_range(0..formation.len())];
    Some(enemy_projectile(shooter, config))
}

// ── Movement ─────────────────────────────────────────────────────────────────

pub fn advance(projectile: &mut Projectile) {
    projectile.body.y -= projectile.speed;
}

/// Upward projectiles leave through the top, downward ones through the bottom.
pub fn out_of_bounds(projectile: &Projectile, config: &GameConfig) -> bool {
    match projectile.owner() {
        ProjectileOwner::Player => projectile.body.y < 0,
        ProjectileOwner::Enemy => projectile.body.y > config.field_height,
    }
}
