/// Rendering layer. All terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// session. No game logic is performed; this module only projects the pixel
/// play field onto terminal cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::compute::GameSession;
use space_invaders::entities::{Entity, GameStatus};
use space_invaders::shield::Shield;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD: Color = Color::White;
const C_PLAYER: Color = Color::Cyan;
const C_ENEMY: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Red;
const C_HINT: Color = Color::DarkGrey;
const C_TITLE: Color = Color::White;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps field pixels to the terminal cells inside the border.
/// Row 0 is the HUD, rows 1 and h-2 the border, row h-1 the controls hint.
struct Viewport {
    width: u16,
    height: u16,
    field_width: i32,
    field_height: i32,
}

impl Viewport {
    fn new(width: u16, height: u16, session: &GameSession) -> Self {
        Viewport {
            width,
            height,
            field_width: session.config.field_width.max(1),
            field_height: session.config.field_height.max(1),
        }
    }

    fn inner_cols(&self) -> i32 {
        self.width.saturating_sub(2) as i32
    }

    fn inner_rows(&self) -> i32 {
        self.height.saturating_sub(4) as i32
    }

    fn col(&self, x: i32) -> i32 {
        1 + x * self.inner_cols() / self.field_width
    }

    fn row(&self, y: i32) -> i32 {
        2 + y * self.inner_rows() / self.field_height
    }

    /// Terminal cell under a field point, `None` if it falls outside the frame.
    fn cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if x < 0 || y < 0 || x >= self.field_width || y >= self.field_height {
            return None;
        }
        Some((self.col(x) as u16, self.row(y) as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let view = Viewport::new(width, height, session);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if session.status == GameStatus::Start {
        draw_title(out, &view)?;
    } else {
        draw_border(out, &view)?;
        draw_hud(out, session)?;

        for shield in &session.shields {
            draw_shield(out, &view, shield)?;
        }
        if session.player_visible() {
            draw_block(out, &view, &session.player, C_PLAYER, "▀")?;
        }
        for enemy in &session.formation.enemies {
            draw_block(out, &view, enemy, C_ENEMY, "▆")?;
        }
        for p in &session.player_projectiles {
            draw_point(out, &view, &p.body, C_BULLET_PLAYER, "║")?;
        }
        for p in &session.enemy_projectiles {
            draw_point(out, &view, &p.body, C_BULLET_ENEMY, "↓")?;
        }

        draw_controls_hint(out, &view)?;

        match session.status {
            GameStatus::GameOver => {
                draw_center(out, &view, "GAME OVER - Press R to Restart", Color::Red)?
            }
            GameStatus::GameClear => {
                draw_center(out, &view, "YOU WIN! - Press R to Restart", Color::Yellow)?
            }
            _ => {}
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Title screen ──────────────────────────────────────────────────────────────

fn draw_title<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let cx = view.width / 2;
    let cy = view.height / 2;

    let title = "SPACE INVADERS";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(3),
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    let hint = "Press S to Start";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(hint.chars().count() as u16 / 2),
        cy + 1,
    ))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

// ── Border & HUD ──────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.width as usize;
    let h = view.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

fn draw_hud<W: Write>(out: &mut W, session: &GameSession) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(Print(format!("Enemies: {}", session.enemies_remaining())))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Fill every terminal cell an entity covers, at least one.
fn draw_block<W: Write>(
    out: &mut W,
    view: &Viewport,
    entity: &Entity,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    let Some((left, top)) = view.cell(entity.x.max(0), entity.y.max(0)) else {
        return Ok(());
    };
    let right = view.col((entity.x + entity.width - 1).min(view.field_width - 1)) as u16;
    let bottom = view.row((entity.y + entity.height - 1).min(view.field_height - 1)) as u16;

    out.queue(style::SetForegroundColor(color))?;
    for row in top..=bottom.max(top) {
        out.queue(cursor::MoveTo(left, row))?;
        out.queue(Print(glyph.repeat((right.max(left) - left + 1) as usize)))?;
    }
    Ok(())
}

fn draw_point<W: Write>(
    out: &mut W,
    view: &Viewport,
    entity: &Entity,
    color: Color,
    glyph: &str,
) -> std::io::Result<()> {
    if let Some((col, row)) = view.cell(entity.center_x(), entity.y) {
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

/// Glyph and colour per durability tier; 0 is not drawn.
fn shield_tier(durability: u8) -> Option<(&'static str, Color)> {
    match durability {
        0 => None,
        1 => Some(("░", Color::DarkYellow)),
        2 => Some(("▒", Color::Yellow)),
        _ => Some(("█", Color::Green)),
    }
}

fn draw_shield<W: Write>(out: &mut W, view: &Viewport, shield: &Shield) -> std::io::Result<()> {
    let half = shield.cell_size() / 2;
    for r in 0..shield.rows() {
        for c in 0..shield.cols() {
            let Some((glyph, color)) = shield.durability(r, c).and_then(shield_tier) else {
                continue;
            };
            let px = shield.x + c as i32 * shield.cell_size() + half;
            let py = shield.y + r as i32 * shield.cell_size() + half;
            if let Some((col, row)) = view.cell(px, py) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(style::SetForegroundColor(color))?;
                out.queue(Print(glyph))?;
            }
        }
    }
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

fn draw_center<W: Write>(
    out: &mut W,
    view: &Viewport,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, view.height / 2))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}
