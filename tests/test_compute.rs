use space_invaders::clock::ManualClock;
use space_invaders::compute::*;
use space_invaders::config::GameConfig;
use space_invaders::entities::*;
use space_invaders::events::GameEvent;
use space_invaders::shield::build_shields;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn playing_session() -> GameSession {
    let mut s = GameSession::new(GameConfig::default());
    assert!(s.start_requested());
    s.drain_events();
    s
}

/// Playing session whose formation has already fired its opening shot, so
/// ticks inside the next 800 ms add no enemy projectiles.
fn settled_session(clock: &ManualClock, rng: &mut StdRng) -> GameSession {
    let mut s = playing_session();
    s.tick(clock, rng);
    s.enemy_projectiles.clear();
    s.drain_events();
    clock.advance(16);
    s
}

/// One distant enemy that cannot reach the player or its projectiles.
fn lone_enemy_config() -> GameConfig {
    GameConfig {
        enemy_rows: 1,
        enemy_cols: 1,
        enemy_start_x: 30,
        ..GameConfig::default()
    }
}

fn count(events: &[GameEvent], kind: GameEvent) -> usize {
    events.iter().filter(|&&e| e == kind).count()
}

// ── Title screen & start ──────────────────────────────────────────────────────

#[test]
fn new_session_waits_on_title_screen() {
    let mut s = GameSession::new(GameConfig::default());
    assert_eq!(s.status, GameStatus::Start);
    assert!(!s.player_visible());

    let before = s.formation.clone();
    s.tick(&ManualClock::new(0), &mut seeded_rng());
    assert_eq!(s.frame, 0);
    assert_eq!(s.formation, before);
    assert!(s.enemy_projectiles.is_empty());
}

#[test]
fn start_enters_playing_and_announces_session() {
    let mut s = GameSession::new(GameConfig::default());
    assert!(s.start_requested());
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.drain_events(), vec![GameEvent::SessionStarted]);
    assert!(s.player_visible());
    assert_eq!(s.enemies_remaining(), 40);
}

#[test]
fn start_ignored_once_playing() {
    let mut s = playing_session();
    assert!(!s.start_requested());
    assert!(s.drain_events().is_empty());
}

#[test]
fn restart_ignored_unless_game_ended() {
    let mut s = GameSession::new(GameConfig::default());
    assert!(!s.restart_requested());
    assert_eq!(s.status, GameStatus::Start);

    let mut s = playing_session();
    assert!(!s.restart_requested());
    assert_eq!(s.status, GameStatus::Playing);
}

#[test]
fn fresh_session_layout() {
    let s = playing_session();
    assert_eq!(s.player, Entity::new(380, 520, 40, 20));
    assert_eq!(s.formation.len(), 40);
    assert_eq!(s.shields.len(), 4);
    assert!(s.player_projectiles.is_empty());
    assert!(s.enemy_projectiles.is_empty());
}

// ── Player movement ───────────────────────────────────────────────────────────

#[test]
fn player_moves_with_held_direction() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = playing_session();
    s.set_move_left(true);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player.x, 375);

    s.set_move_left(false);
    s.set_move_right(true);
    s.tick(&clock, &mut rng);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player.x, 385);
}

#[test]
fn opposing_directions_cancel() {
    let mut s = playing_session();
    s.set_move_left(true);
    s.set_move_right(true);
    s.tick(&ManualClock::new(0), &mut seeded_rng());
    assert_eq!(s.player.x, 380);
}

#[test]
fn player_clamped_to_field() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = playing_session();
    s.player.x = 2;
    s.set_move_left(true);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player.x, 0);

    s.player.x = 758;
    s.set_move_left(false);
    s.set_move_right(true);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player.x, 760);
}

// ── Firing & rate limits ──────────────────────────────────────────────────────

#[test]
fn held_fire_respects_shot_interval() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = GameSession::new(lone_enemy_config());
    s.start_requested();
    // clear of every shield column
    s.player.x = 180;
    s.set_fire(true);
    // 60 ticks at 16 ms: shots at 0, 208, 416, 624 and 832 ms
    for _ in 0..60 {
        s.tick(&clock, &mut rng);
        clock.advance(16);
    }
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.player_projectiles.len(), 5);
    let mut ys: Vec<i32> = s.player_projectiles.iter().map(|p| p.body.y).collect();
    ys.sort_unstable();
    for pair in ys.windows(2) {
        // 13 ticks apart at least, 8 px per tick
        assert!(pair[1] - pair[0] >= 13 * 8);
    }
}

#[test]
fn clock_set_backwards_does_not_refire() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = GameSession::new(lone_enemy_config());
    s.start_requested();
    s.player.x = 180;
    s.set_fire(true);

    clock.set(1_000);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player_projectiles.len(), 1);

    // an earlier reading counts as no time passed
    clock.set(500);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player_projectiles.len(), 1);

    clock.set(1_200);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player_projectiles.len(), 2);
}

#[test]
fn enemy_fire_respects_enemy_shot_interval() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = GameSession::new(lone_enemy_config());
    s.start_requested();
    s.drain_events();
    let mut events = Vec::new();
    // 120 ticks at 16 ms: volleys at 0, 800 and 1600 ms
    for _ in 0..120 {
        s.tick(&clock, &mut rng);
        events.extend(s.drain_events());
        clock.advance(16);
    }
    assert_eq!(count(&events, GameEvent::EnemyFired), 3);
}

#[test]
fn first_tick_fires_from_a_formation_member() {
    let mut s = playing_session();
    s.tick(&ManualClock::new(0), &mut seeded_rng());
    assert_eq!(s.enemy_projectiles.len(), 1);
    let shot = s.enemy_projectiles[0];
    assert_eq!(shot.speed, -6);
    assert!(s
        .formation
        .enemies
        .iter()
        .any(|e| e.center_x() - 2 == shot.body.x && e.bottom() + 6 == shot.body.y));
    assert_eq!(s.drain_events(), vec![GameEvent::EnemyFired]);
}

#[test]
fn same_seed_same_session() {
    let run = || {
        let clock = ManualClock::new(0);
        let mut rng = seeded_rng();
        let mut s = playing_session();
        s.set_fire(true);
        for _ in 0..200 {
            s.tick(&clock, &mut rng);
            clock.advance(16);
        }
        s
    };
    let a = run();
    let b = run();
    assert_eq!(a.enemy_projectiles, b.enemy_projectiles);
    assert_eq!(a.formation, b.formation);
    assert_eq!(a.shields, b.shields);
    assert_eq!(a.status, b.status);
}

// ── Formation ─────────────────────────────────────────────────────────────────

#[test]
fn tick_moves_formation() {
    let mut s = playing_session();
    s.tick(&ManualClock::new(0), &mut seeded_rng());
    assert_eq!(s.formation.enemies[0].x, 102);
    assert_eq!(s.frame, 1);
}

#[test]
fn formation_reaching_floor_ends_game() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = settled_session(&clock, &mut rng);
    s.formation.enemies = vec![Entity::new(20, 475, 30, 20)];
    s.formation.dx = -2;
    s.tick(&clock, &mut rng);
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(count(&s.drain_events(), GameEvent::PlayerDestroyed), 1);
}

#[test]
fn formation_membership_only_shrinks_while_playing() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = playing_session();
    s.set_fire(true);
    let mut last = s.enemies_remaining();
    for _ in 0..600 {
        s.tick(&clock, &mut rng);
        assert!(s.enemies_remaining() <= last);
        last = s.enemies_remaining();
        clock.advance(16);
    }
}

// ── Win ───────────────────────────────────────────────────────────────────────

#[test]
fn destroying_every_enemy_clears_the_game() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = playing_session();
    assert!(!s.formation.is_empty());

    // one projectile per enemy, placed where the enemy will be after this
    // tick's formation step (+2) and projectile move (-8)
    s.player_projectiles = s
        .formation
        .enemies
        .iter()
        .map(|e| Projectile {
            body: Entity::new(e.x + 12, e.y + 13, 4, 10),
            speed: 8,
        })
        .collect();
    s.tick(&clock, &mut rng);

    assert!(s.formation.is_empty());
    assert_eq!(s.status, GameStatus::GameClear);
    assert_eq!(count(&s.drain_events(), GameEvent::EnemyDestroyed), 40);
    assert!(s.player_visible());
}

#[test]
fn empty_formation_clears_on_next_tick() {
    let mut s = playing_session();
    s.formation.enemies.clear();
    s.tick(&ManualClock::new(0), &mut seeded_rng());
    assert_eq!(s.status, GameStatus::GameClear);
    assert!(s.enemy_projectiles.is_empty());
}

#[test]
fn loss_in_the_same_tick_beats_the_win() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = settled_session(&clock, &mut rng);
    s.formation.enemies = vec![Entity::new(300, 100, 30, 20)];
    s.formation.dx = 2;
    s.player_projectiles = vec![Projectile { body: Entity::new(310, 112, 4, 10), speed: 8 }];
    s.enemy_projectiles = vec![Projectile { body: Entity::new(390, 505, 4, 10), speed: -6 }];
    s.tick(&clock, &mut rng);
    assert!(s.formation.is_empty());
    assert_eq!(s.status, GameStatus::GameOver);
}

// ── Loss ──────────────────────────────────────────────────────────────────────

#[test]
fn enemy_projectile_hit_ends_game_once() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = settled_session(&clock, &mut rng);
    s.enemy_projectiles = vec![
        Projectile { body: Entity::new(390, 505, 4, 10), speed: -6 },
        Projectile { body: Entity::new(400, 505, 4, 10), speed: -6 },
    ];
    s.formation.enemies.push(Entity::new(375, 515, 30, 20));
    s.tick(&clock, &mut rng);

    assert_eq!(s.status, GameStatus::GameOver);
    assert!(!s.player_visible());
    assert!(s.enemy_projectiles.is_empty());
    assert_eq!(count(&s.drain_events(), GameEvent::PlayerDestroyed), 1);

    // overlap persists, the game does not move on
    let frozen = s.formation.clone();
    for _ in 0..10 {
        clock.advance(16);
        s.tick(&clock, &mut rng);
    }
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(s.formation, frozen);
    assert!(s.drain_events().is_empty());
}

#[test]
fn enemy_ramming_player_ends_game() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = settled_session(&clock, &mut rng);
    s.formation.enemies = vec![Entity::new(360, 510, 30, 20)];
    s.tick(&clock, &mut rng);
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(count(&s.drain_events(), GameEvent::PlayerDestroyed), 1);
}

#[test]
fn shield_absorbs_enemy_fire_inside_tick() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = settled_session(&clock, &mut rng);
    s.enemy_projectiles = vec![Projectile { body: Entity::new(130, 414, 4, 10), speed: -6 }];
    s.tick(&clock, &mut rng);
    assert!(s.enemy_projectiles.is_empty());
    assert_eq!(s.shields[0].durability(0, 5), Some(2));
    assert_eq!(s.status, GameStatus::Playing);
}

// ── Restart ───────────────────────────────────────────────────────────────────

#[test]
fn restart_rebuilds_everything() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = settled_session(&clock, &mut rng);
    assert!(s.shields[0].hit(130, 420));
    s.formation.enemies.truncate(3);
    s.formation.dx = -2;
    s.player.x = 0;
    s.player_projectiles
        .push(Projectile { body: Entity::new(700, 300, 4, 10), speed: 8 });
    s.formation.enemies.push(s.player);
    s.tick(&clock, &mut rng);
    assert_eq!(s.status, GameStatus::GameOver);
    s.drain_events();

    assert!(s.restart_requested());
    assert_eq!(s.status, GameStatus::Playing);
    assert_eq!(s.drain_events(), vec![GameEvent::SessionStarted]);
    assert_eq!(s.formation.len(), 40);
    assert_eq!(s.formation.dx, 2);
    assert_eq!(s.player, Entity::new(380, 520, 40, 20));
    assert!(s.player_projectiles.is_empty());
    assert!(s.enemy_projectiles.is_empty());
    assert_eq!(s.shields, build_shields(&s.config));
    assert_eq!(s.frame, 0);
}

#[test]
fn restart_clears_rate_limits() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = playing_session();
    s.set_fire(true);
    s.tick(&clock, &mut rng);
    assert_eq!(s.player_projectiles.len(), 1);

    s.formation.enemies.clear();
    clock.advance(16);
    s.tick(&clock, &mut rng);
    assert_eq!(s.status, GameStatus::GameClear);

    s.restart_requested();
    clock.advance(16);
    s.tick(&clock, &mut rng);
    // 32 ms after the last shots, yet both sides fire again
    assert_eq!(s.player_projectiles.len(), 1);
    assert_eq!(s.enemy_projectiles.len(), 1);
}

#[test]
fn player_destroyed_fires_again_after_restart() {
    let clock = ManualClock::new(0);
    let mut rng = seeded_rng();
    let mut s = settled_session(&clock, &mut rng);
    s.formation.enemies.push(s.player);
    s.tick(&clock, &mut rng);
    assert_eq!(count(&s.drain_events(), GameEvent::PlayerDestroyed), 1);

    s.restart_requested();
    s.formation.enemies.push(s.player);
    clock.advance(16);
    s.tick(&clock, &mut rng);
    assert_eq!(s.status, GameStatus::GameOver);
    assert_eq!(count(&s.drain_events(), GameEvent::PlayerDestroyed), 1);
}
