/// Game session state machine.
///
/// `GameSession` owns every piece of mutable game state. The tick loop holds
/// it exclusively and advances it through `tick`; renderers only ever see a
/// shared reference. Randomness and time are injected so a seeded RNG plus a
/// `ManualClock` replay a session exactly.

use rand::Rng;

use crate::clock::Clock;
use crate::collision::{
    formation_touches_player, resolve_enemy_projectiles, resolve_player_projectiles,
};
use crate::config::GameConfig;
use crate::entities::{Entity, GameStatus, Projectile};
use crate::events::GameEvent;
use crate::formation::Formation;
use crate::projectiles::{enemy_volley, player_projectile, RateLimiter};
use crate::shield::{build_shields, Shield};

/// Held-key intents, set by the input layer and consumed by the next tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

#[derive(Clone, Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub status: GameStatus,
    pub player: Entity,
    pub formation: Formation,
    pub player_projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<Projectile>,
    pub shields: Vec<Shield>,
    pub intents: Intents,
    /// Ticks simulated since the last start/restart.
    pub frame: u64,
    player_fire: RateLimiter,
    enemy_fire: RateLimiter,
    /// Set once the player-destroyed notification for this loss went out.
    player_down_consumed: bool,
    events: Vec<GameEvent>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

fn spawn_player(config: &GameConfig) -> Entity {
    Entity::new(
        config.field_width / 2 - config.player_width / 2,
        config.field_height - config.player_bottom_offset,
        config.player_width,
        config.player_height,
    )
}

impl GameSession {
    /// A session sitting on the title screen.
    pub fn new(config: GameConfig) -> Self {
        GameSession {
            player: spawn_player(&config),
            formation: Formation::new(&config),
            player_projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            shields: build_shields(&config),
            intents: Intents::default(),
            frame: 0,
            player_fire: RateLimiter::new(config.shot_interval_ms),
            enemy_fire: RateLimiter::new(config.enemy_shot_interval_ms),
            player_down_consumed: false,
            events: Vec::new(),
            status: GameStatus::Start,
            config,
        }
    }

    /// Fresh player, formation and shields; empty skies; timers cleared.
    fn reset_world(&mut self) {
        self.player = spawn_player(&self.config);
        self.formation = Formation::new(&self.config);
        self.player_projectiles.clear();
        self.enemy_projectiles.clear();
        self.shields = build_shields(&self.config);
        self.player_fire.reset();
        self.enemy_fire.reset();
        self.player_down_consumed = false;
        self.frame = 0;
        self.status = GameStatus::Playing;
        self.events.push(GameEvent::SessionStarted);
    }

    // ── Input ────────────────────────────────────────────────────────────────

    pub fn set_move_left(&mut self, pressed: bool) {
        self.intents.left = pressed;
    }

    pub fn set_move_right(&mut self, pressed: bool) {
        self.intents.right = pressed;
    }

    pub fn set_fire(&mut self, pressed: bool) {
        self.intents.fire = pressed;
    }

    /// Leave the title screen. Ignored in any other state.
    pub fn start_requested(&mut self) -> bool {
        if self.status != GameStatus::Start {
            return false;
        }
        log::info!("session started");
        self.reset_world();
        true
    }

    /// Play again after a win or a loss. Ignored while on the title screen or
    /// mid-game.
    pub fn restart_requested(&mut self) -> bool {
        if !self.status.is_terminal() {
            return false;
        }
        log::info!("session restarted after {:?}", self.status);
        self.reset_world();
        true
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn enemies_remaining(&self) -> usize {
        self.formation.len()
    }

    /// The player is hidden on the title screen and once destroyed.
    pub fn player_visible(&self) -> bool {
        matches!(self.status, GameStatus::Playing | GameStatus::GameClear)
    }

    /// Hand queued notifications to the audio layer.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Per-tick update ──────────────────────────────────────────────────────

    /// Advance the simulation by one frame. Outside `Playing` this does
    /// nothing.
    pub fn tick(&mut self, clock: &impl Clock, rng: &mut impl Rng) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.frame += 1;
        let now = clock.now_ms();
        log::trace!("tick frame={} now={}ms", self.frame, now);

        // ── 1. Player movement and fire ──────────────────────────────────────
        self.move_player();
        if self.intents.fire && self.player_fire.try_acquire(now) {
            self.player_projectiles
                .push(player_projectile(&self.player, &self.config));
        }

        // ── 2. Formation ─────────────────────────────────────────────────────
        let outcome = self.formation.step(&self.config);
        if outcome.reached_floor {
            self.set_game_over("formation reached the defense line");
        }

        // ── 3. Enemy fire ────────────────────────────────────────────────────
        if !self.formation.is_empty() && self.enemy_fire.try_acquire(now) {
            if let Some(shot) = enemy_volley(&self.formation, &self.config, rng) {
                self.enemy_projectiles.push(shot);
                self.events.push(GameEvent::EnemyFired);
            }
        }

        // ── 4. Player projectiles ────────────────────────────────────────────
        let kills = resolve_player_projectiles(
            &mut self.player_projectiles,
            &mut self.shields,
            &mut self.formation,
            &self.config,
        );
        if kills > 0 {
            log::debug!("{} enemy destroyed, {} left", kills, self.formation.len());
        }
        for _ in 0..kills {
            self.events.push(GameEvent::EnemyDestroyed);
        }

        // ── 5. Enemy projectiles ─────────────────────────────────────────────
        if resolve_enemy_projectiles(
            &mut self.enemy_projectiles,
            &mut self.shields,
            &self.player,
            &self.config,
        ) {
            self.set_game_over("player hit by enemy fire");
        }

        // ── 6. Body contact ──────────────────────────────────────────────────
        if formation_touches_player(&self.formation, &self.player) {
            self.set_game_over("player rammed by the formation");
        }

        // ── 7. Win check ─────────────────────────────────────────────────────
        if self.formation.is_empty() && self.status == GameStatus::Playing {
            log::info!("formation destroyed after {} ticks", self.frame);
            self.status = GameStatus::GameClear;
        }
    }

    fn move_player(&mut self) {
        let step = match (self.intents.left, self.intents.right) {
            (true, false) => -self.config.player_step,
            (false, true) => self.config.player_step,
            _ => return,
        };
        let max_x = self.config.field_width - self.player.width;
        self.player.x = (self.player.x + step).clamp(0, max_x.max(0));
    }

    /// Enter GameOver. Repeated calls in the same loss are no-ops, and the
    /// player-destroyed notification goes out at most once until restart.
    fn set_game_over(&mut self, reason: &str) {
        if self.status == GameStatus::GameOver {
            return;
        }
        log::info!("game over: {}", reason);
        self.status = GameStatus::GameOver;
        if !self.player_down_consumed {
            self.player_down_consumed = true;
            self.events.push(GameEvent::PlayerDestroyed);
        }
    }
}
