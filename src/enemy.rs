use crate::collision::{Collidable, Rect};
use crate::config::GameConfig;
use crate::level::Level;
use crate::physics::Body;

/// A patrolling enemy.
///
/// Walks at a constant speed and turns around whenever the cell directly ahead
/// is solid. The sign of `vx` is its only AI state.
pub struct Enemy {
    pub body: Body,
    max_fall_speed: Option<f32>,
}

impl Enemy {
    /// Spawns an enemy walking to the right.
    pub fn new(x: f32, y: f32, config: &GameConfig) -> Self {
        let mut body = Body::new(x, y, config.tile_size);
        body.vx = config.enemy_speed;

        Enemy {
            body,
            max_fall_speed: config.max_fall_speed,
        }
    }

    pub fn update(&mut self, level: &Level) {
        if level.is_solid(&self.probe_ahead()) {
            self.body.vx = -self.body.vx;
        }

        self.body.move_horizontal(level);
        self.body.move_vertical(level, self.max_fall_speed);
    }

    /// One pixel wide strip touching the leading edge, full body height.
    pub fn probe_ahead(&self) -> Rect {
        let rect = self.body.rect;
        let x = if self.body.vx > 0.0 {
            rect.right()
        } else {
            rect.left() - 1.0
        };

        Rect::new(x, rect.y, 1.0, rect.height)
    }

    pub fn is_moving_right(&self) -> bool {
        self.body.vx > 0.0
    }
}

impl Collidable for Enemy {
    fn get_bounds(&self) -> Rect {
        self.body.rect
    }
}
