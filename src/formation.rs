/// The enemy block: moves sideways as one unit, reverses at the walls and
/// steps down on every reversal.

use crate::config::GameConfig;
use crate::entities::{intersects, Entity};

#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub enemies: Vec<Entity>,
    /// Horizontal step applied to every enemy on the next tick.
    pub dx: i32,
}

/// What happened during one formation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub reversed: bool,
    /// Some enemy's bottom edge reached the defense line.
    pub reached_floor: bool,
}

impl Formation {
    /// Fresh grid laid out row by row from the configured origin.
    pub fn new(config: &GameConfig) -> Self {
        let mut enemies = Vec::with_capacity(config.enemy_count());
        for r in 0..config.enemy_rows {
            for c in 0..config.enemy_cols {
                enemies.push(Entity::new(
                    config.enemy_start_x + c as i32 * config.enemy_h_gap,
                    config.enemy_start_y + r as i32 * config.enemy_v_gap,
                    config.enemy_width,
                    config.enemy_height,
                ));
            }
        }
        Formation {
            enemies,
            dx: config.enemy_dx,
        }
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Advance one tick.
    ///
    /// Moves first, then checks the walls against the new positions, so the
    /// block may overshoot a margin by up to `dx` before turning around. The
    /// overshooting move is kept.
    pub fn step(&mut self, config: &GameConfig) -> StepOutcome {
        let left_wall = config.side_margin;
        let right_wall = config.field_width - config.side_margin;

        let mut outcome = StepOutcome::default();
        for enemy in &mut self.enemies {
            enemy.x += self.dx;
            if enemy.x < left_wall || enemy.x + enemy.width > right_wall {
                outcome.reversed = true;
            }
        }

        if outcome.reversed {
            self.dx = -self.dx;
            let floor = config.floor_line();
            for enemy in &mut self.enemies {
                enemy.y += config.enemy_step_down;
                if enemy.bottom() >= floor {
                    outcome.reached_floor = true;
                }
            }
        }

        outcome
    }

    /// Remove and return the first enemy overlapping `body`.
    pub fn take_hit(&mut self, body: &Entity) -> Option<Entity> {
        let index = self.enemies.iter().position(|e| intersects(e, body))?;
        Some(self.enemies.remove(index))
    }

    pub fn touches(&self, body: &Entity) -> bool {
        self.enemies.iter().any(|e| intersects(e, body))
    }
}
