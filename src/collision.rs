/// Per-tick projectile movement and collision resolution.
///
/// Precedence per projectile is fixed and observable:
///
/// * player projectile: shields → top edge → enemies
/// * enemy projectile: shields → player → bottom edge
///
/// Each pass walks its collection once in order with `retain_mut`, so removing
/// a projectile (or an enemy) never skips or revisits another one.

use crate::config::GameConfig;
use crate::entities::{intersects, Entity, Projectile};
use crate::formation::Formation;
use crate::projectiles::{advance, out_of_bounds};
use crate::shield::Shield;

/// First shield whose cell absorbs the point wins; later shields are not
/// touched.
fn absorbed_by_shield(shields: &mut [Shield], projectile: &Projectile) -> bool {
    shields
        .iter_mut()
        .any(|shield| shield.hit(projectile.body.x, projectile.body.y))
}

/// Move player projectiles and resolve their hits.
/// Returns how many enemies were destroyed.
pub fn resolve_player_projectiles(
    projectiles: &mut Vec<Projectile>,
    shields: &mut [Shield],
    formation: &mut Formation,
    config: &GameConfig,
) -> usize {
    let mut kills = 0;
    projectiles.retain_mut(|p| {
        advance(p);
        if absorbed_by_shield(shields, p) {
            return false;
        }
        if out_of_bounds(p, config) {
            return false;
        }
        if formation.take_hit(&p.body).is_some() {
            kills += 1;
            return false;
        }
        true
    });
    kills
}

/// Move enemy projectiles and resolve their hits.
/// Returns `true` if any of them struck the player this tick.
pub fn resolve_enemy_projectiles(
    projectiles: &mut Vec<Projectile>,
    shields: &mut [Shield],
    player: &Entity,
    config: &GameConfig,
) -> bool {
    let mut player_hit = false;
    projectiles.retain_mut(|p| {
        advance(p);
        if absorbed_by_shield(shields, p) {
            return false;
        }
        if intersects(player, &p.body) {
            player_hit = true;
            return false;
        }
        !out_of_bounds(p, config)
    });
    player_hit
}

/// Body contact between any enemy and the player.
pub fn formation_touches_player(formation: &Formation, player: &Entity) -> bool {
    formation.touches(player)
}
