use crate::collision::{Collidable, Rect};
use crate::config::GameConfig;
use crate::input::KeyState;
use crate::level::Level;
use crate::physics::Body;

pub struct Player {
    pub body: Body,
    pub speed: f32,
    pub jump_power: f32,
    max_fall_speed: Option<f32>,
}

impl Player {
    pub fn new(x: f32, y: f32, config: &GameConfig) -> Self {
        Player {
            body: Body::new(x, y, config.tile_size),
            speed: config.player_speed,
            jump_power: config.jump_power,
            max_fall_speed: config.max_fall_speed,
        }
    }

    /// Advances the player one tick.
    ///
    /// Horizontal input is resolved before gravity so the vertical pass works on
    /// the corrected X position.
    pub fn update(&mut self, keys: &KeyState, level: &Level) {
        // Left wins when both directions are held
        self.body.vx = if keys.left() {
            -self.speed
        } else if keys.right() {
            self.speed
        } else {
            0.0
        };

        if keys.jump() && self.body.grounded {
            self.body.vy = -self.jump_power;
            self.body.grounded = false;
        }

        self.body.move_horizontal(level);
        self.body.move_vertical(level, self.max_fall_speed);
    }

    pub fn is_grounded(&self) -> bool {
        self.body.grounded
    }

    pub fn position(&self) -> (f32, f32) {
        (self.body.rect.x, self.body.rect.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.body.vx, self.body.vy)
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        self.body.rect
    }
}
