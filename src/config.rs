/// Every tunable constant of the simulation, grouped in one value.
///
/// `GameConfig::default()` is the only configuration the game ships with;
/// tests build variants with struct-update syntax.

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    // ── Play field ──────────────────────────────────────────────────────────
    pub field_width: i32,
    pub field_height: i32,
    /// Formation reverses once any enemy is closer than this to a side wall.
    pub side_margin: i32,
    /// Distance of the defense line from the bottom of the field.
    pub floor_offset: i32,

    // ── Player ──────────────────────────────────────────────────────────────
    pub player_width: i32,
    pub player_height: i32,
    /// Distance of the player's top edge from the bottom of the field.
    pub player_bottom_offset: i32,
    pub player_step: i32,

    // ── Formation ───────────────────────────────────────────────────────────
    pub enemy_rows: usize,
    pub enemy_cols: usize,
    pub enemy_start_x: i32,
    pub enemy_start_y: i32,
    pub enemy_h_gap: i32,
    pub enemy_v_gap: i32,
    pub enemy_width: i32,
    pub enemy_height: i32,
    pub enemy_dx: i32,
    pub enemy_step_down: i32,

    // ── Projectiles ─────────────────────────────────────────────────────────
    pub projectile_width: i32,
    pub projectile_height: i32,
    pub player_projectile_speed: i32,
    /// Negative: `y -= speed` moves enemy projectiles downward.
    pub enemy_projectile_speed: i32,
    pub shot_interval_ms: u64,
    pub enemy_shot_interval_ms: u64,

    // ── Shields ─────────────────────────────────────────────────────────────
    pub shield_count: usize,
    pub shield_start_x: i32,
    pub shield_spacing: i32,
    /// Distance of the shields' top edge from the bottom of the field.
    pub shield_bottom_offset: i32,
    pub shield_rows: usize,
    pub shield_cols: usize,
    pub shield_cell_size: i32,
    pub shield_durability: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            field_width: 800,
            field_height: 600,
            side_margin: 20,
            floor_offset: 100,

            player_width: 40,
            player_height: 20,
            player_bottom_offset: 80,
            player_step: 5,

            enemy_rows: 4,
            enemy_cols: 10,
            enemy_start_x: 100,
            enemy_start_y: 60,
            enemy_h_gap: 50,
            enemy_v_gap: 40,
            enemy_width: 30,
            enemy_height: 20,
            enemy_dx: 2,
            enemy_step_down: 10,

            projectile_width: 4,
            projectile_height: 10,
            player_projectile_speed: 8,
            enemy_projectile_speed: -6,
            shot_interval_ms: 200,
            enemy_shot_interval_ms: 800,

            shield_count: 4,
            shield_start_x: 100,
            shield_spacing: 150,
            shield_bottom_offset: 180,
            shield_rows: 8,
            shield_cols: 12,
            shield_cell_size: 6,
            shield_durability: 3,
        }
    }
}

impl GameConfig {
    /// Y coordinate an enemy's bottom edge must not reach.
    pub fn floor_line(&self) -> i32 {
        self.field_height - self.floor_offset
    }

    pub fn enemy_count(&self) -> usize {
        self.enemy_rows * self.enemy_cols
    }
}
