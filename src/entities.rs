/// All game entity types: pure data, plus the rectangle helpers every
/// entity shares.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen; no simulation ticks are applied.
    Start,
    Playing,
    GameOver,
    GameClear,
}

impl GameStatus {
    /// GameOver and GameClear only respond to a restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::GameClear)
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle covering `[x, x + width) × [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Half-open overlap test: rectangles that merely touch do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.width <= 0 || self.height <= 0 || other.width <= 0 || other.height <= 0 {
            return false;
        }
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

// ── Player, enemies ───────────────────────────────────────────────────────────

/// Shared shape of the player, every enemy and every projectile.
/// Position is the top-left corner in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Entity {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Entity { x, y, width, height }
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }
}

/// Bounding box of an entity.
pub fn bounds(entity: &Entity) -> Rect {
    Rect {
        x: entity.x,
        y: entity.y,
        width: entity.width,
        height: entity.height,
    }
}

pub fn intersects(a: &Entity, b: &Entity) -> bool {
    bounds(a).intersects(&bounds(b))
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Projectile {
    pub body: Entity,
    /// Every tick applies `y -= speed`: positive travels up, negative down.
    pub speed: i32,
}

impl Projectile {
    pub fn owner(&self) -> ProjectileOwner {
        if self.speed > 0 {
            ProjectileOwner::Player
        } else {
            ProjectileOwner::Enemy
        }
    }
}
