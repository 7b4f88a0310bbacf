/// Shared movement and tile-collision resolution for every moving entity
///
/// # Order of operations
///
/// Each tick an entity first moves and resolves on the X axis, then applies
/// gravity and resolves on the Y axis using the already corrected X position.
/// The two passes must not be reordered.
///
/// # Limitations
///
/// Resolution only looks at tiles overlapping the entity AFTER the move, so a
/// fast enough entity can skip over a tile that is thinner than one tick of
/// travel. At the configured speeds (a few pixels per tick against 32 px tiles)
/// this cannot happen horizontally.
use crate::collision::Rect;
use crate::level::Level;

/// Position, size, velocity and ground contact of a moving entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    /// Only ever set by a downward snap onto a tile.
    pub grounded: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, size: f32) -> Self {
        Body {
            rect: Rect::new(x, y, size, size),
            vx: 0.0,
            vy: 0.0,
            grounded: false,
        }
    }

    /// Applies `vx` and pushes the body out of any tile it ran into.
    pub fn move_horizontal(&mut self, level: &Level) {
        self.rect.x += self.vx;

        for tile in level.colliders_overlapping(&self.rect) {
            let t = tile.rect;
            if self.vx > 0.0 && self.rect.right() > t.left() && self.rect.left() < t.left() {
                self.rect.x = t.left() - self.rect.width;
            } else if self.vx < 0.0 && self.rect.left() < t.right() && self.rect.right() > t.right() {
                self.rect.x = t.right();
            }
        }
    }

    /// Applies gravity and `vy`, then lands on or bumps against tiles.
    ///
    /// `grounded` is recomputed here every call.
    pub fn move_vertical(&mut self, level: &Level, max_fall_speed: Option<f32>) {
        self.vy += level.gravity;
        if let Some(limit) = max_fall_speed {
            self.vy = self.vy.min(limit);
        }
        self.rect.y += self.vy;

        self.grounded = false;
        for tile in level.colliders_overlapping(&self.rect) {
            let t = tile.rect;
            if self.vy > 0.0 && self.rect.bottom() > t.top() && self.rect.top() < t.top() {
                self.rect.y = t.top() - self.rect.height;
                self.vy = 0.0;
                self.grounded = true;
            } else if self.vy < 0.0 && self.rect.top() < t.bottom() && self.rect.bottom() > t.bottom() {
                self.rect.y = t.bottom();
                self.vy = 0.0;
            }
        }
    }

    /// Moves the body to `(x, y)` and clears all motion.
    pub fn teleport(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.grounded = false;
    }
}
