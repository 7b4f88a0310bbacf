// GameWorld struct and tick orchestration
//
// GameWorld is the explicit simulation context: it owns the level, the player and
// the enemies, and advances them exactly one tick per call to `tick`. Nothing in
// here touches SDL, so the whole loop runs headless under test.

use crate::collision::{self, Collidable};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::input::KeyState;
use crate::level::Level;
use crate::player::Player;
use crate::tile::TileKind;

use super::{ColorTag, Drawable, TickEvents};

pub struct GameWorld {
    pub level: Level,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    config: GameConfig,
    won: bool,
    ticks: u64,
}

impl GameWorld {
    pub fn new(level: Level, config: &GameConfig) -> Self {
        let player = Player::new(level.start.x, level.start.y, config);
        let enemies = level.spawn_enemies(config);

        GameWorld {
            level,
            player,
            enemies,
            config: config.clone(),
            won: false,
            ticks: 0,
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Order: player, every enemy, player-vs-enemy contact, then the goal check.
    /// Enemy contact sends the player back to the start with no grace period, so
    /// touching an enemy on consecutive ticks resets on each of them.
    pub fn tick(&mut self, keys: &KeyState) -> TickEvents {
        let mut events = TickEvents::default();

        self.player.update(keys, &self.level);
        for enemy in self.enemies.iter_mut() {
            enemy.update(&self.level);
        }

        if !collision::check_collisions_with_collection(&self.player, &self.enemies).is_empty() {
            let start = self.level.start;
            self.player.body.teleport(start.x, start.y);
            events.player_reset = true;
            log::debug!("Player hit an enemy on tick {}, back to start", self.ticks);
        }

        if let Some(goal) = self.level.goal {
            if !self.won && self.player.get_bounds().intersects(&goal) {
                self.won = true;
                events.just_won = true;
                log::info!("Goal reached after {} ticks", self.ticks + 1);
            }
        }

        self.ticks += 1;
        events
    }

    /// Once true, stays true for the lifetime of this world.
    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Rebuilds player and enemies from the level. The win flag is kept.
    pub fn respawn(&mut self) {
        let start = self.level.start;
        self.player = Player::new(start.x, start.y, &self.config);
        self.enemies = self.level.spawn_enemies(&self.config);
    }

    /// Everything to draw this frame, back to front.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut drawables = Vec::with_capacity(self.level.tiles.len() + self.enemies.len() + 2);

        drawables.extend(self.level.tiles.iter().map(|tile| {
            let tag = match tile.kind {
                TileKind::Ground => ColorTag::Ground,
                TileKind::Platform => ColorTag::Platform,
            };
            Drawable::new(tile.rect, tag)
        }));

        if let Some(goal) = self.level.goal {
            drawables.push(Drawable::new(goal, ColorTag::Goal));
        }

        drawables.extend(
            self.enemies
                .iter()
                .map(|enemy| Drawable::new(enemy.get_bounds(), ColorTag::Enemy)),
        );
        drawables.push(Drawable::new(self.player.get_bounds(), ColorTag::Player));

        drawables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::Rect;
    use crate::input::Key;

    fn world(grid: &[&str]) -> GameWorld {
        let config = GameConfig::default();
        GameWorld::new(Level::parse(grid, &config), &config)
    }

    fn held(keys: &[Key]) -> KeyState {
        keys.iter().copied().collect()
    }

    #[test]
    fn test_player_lands_on_two_tile_floor() {
        let mut world = world(&["S.", "..", "GG"]);
        let idle = KeyState::new();

        let mut ticks = 0;
        while !world.player.is_grounded() {
            world.tick(&idle);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }

        let tile = world.level.tiles[0].rect;
        assert_eq!(world.player.body.rect.y, tile.y - world.player.body.rect.height);
        assert_eq!(world.player.body.vy, 0.0);
        assert!(world.player.is_grounded());
    }

    #[test]
    fn test_grounded_false_on_jump_tick() {
        let mut world = world(&["S", "G"]);
        let idle = KeyState::new();
        world.tick(&idle);
        assert!(world.player.is_grounded());

        world.tick(&held(&[Key::Space]));
        assert!(!world.player.is_grounded());
        assert!(world.player.body.vy < 0.0);
    }

    #[test]
    fn test_enemy_next_to_wall_reverses() {
        let mut world = world(&["S...EG", "GGGGGG"]);
        assert!(world.enemies[0].body.vx > 0.0);

        world.tick(&KeyState::new());

        assert!(world.enemies[0].body.vx < 0.0);
    }

    #[test]
    fn test_enemy_contact_resets_player() {
        let mut world = world(&["S..E", "GGGG"]);
        world.player.body.rect.x = 80.0;
        world.player.body.vx = 3.0;
        world.player.body.vy = -4.0;

        let events = world.tick(&held(&[Key::D]));

        assert!(events.player_reset);
        assert_eq!(world.player.position(), (0.0, 0.0));
        assert_eq!(world.player.velocity(), (0.0, 0.0));
    }

    #[test]
    fn test_enemy_contact_from_above_resets_player() {
        let mut world = world(&["S...", "....", "...E", "GGGG"]);
        world.enemies[0].body.vx = 0.0;
        world.player.body.rect = Rect::new(96.0, 40.0, 32.0, 32.0);

        let events = world.tick(&KeyState::new());

        assert!(events.player_reset);
        assert_eq!(world.player.position(), (0.0, 0.0));
        assert_eq!(world.player.velocity(), (0.0, 0.0));
    }

    #[test]
    fn test_reset_repeats_on_consecutive_ticks() {
        // Enemy spawned on the start cell keeps hitting the player
        let mut world = world(&["S", "G"]);
        let config = GameConfig::default();
        world.enemies.push(Enemy::new(0.0, 0.0, &config));
        world.enemies[0].body.vx = 0.0;

        for _ in 0..3 {
            let events = world.tick(&KeyState::new());
            assert!(events.player_reset);
            assert_eq!(world.player.position(), (0.0, 0.0));
        }
    }

    #[test]
    fn test_reaching_goal_wins_permanently() {
        let mut world = world(&["SF..", "GGGG"]);
        let right = held(&[Key::ArrowRight]);

        let events = world.tick(&right);
        assert!(events.just_won);
        assert!(world.has_won());

        let left = held(&[Key::ArrowLeft]);
        for _ in 0..30 {
            let events = world.tick(&left);
            assert!(!events.just_won);
            assert!(world.has_won());
        }
        assert!(!collision::aabb_intersect(
            &world.player.get_bounds(),
            &world.level.goal.unwrap_or_default()
        ));
    }

    #[test]
    fn test_player_fully_inside_goal_wins() {
        let mut world = world(&["....", ".F..", "GGGG"]);
        world.player.body.rect = Rect::new(32.0, 32.0, 32.0, 32.0);
        assert!(world.level.goal.unwrap().contains_rect(&world.player.body.rect));

        world.tick(&KeyState::new());

        assert!(world.has_won());
    }

    #[test]
    fn test_no_goal_never_wins() {
        let mut world = world(&["S...", "GGGG"]);
        for _ in 0..20 {
            world.tick(&held(&[Key::D]));
        }
        assert!(!world.has_won());
        assert_eq!(world.ticks(), 20);
    }

    #[test]
    fn test_respawn_keeps_win() {
        let mut world = world(&["SFE.", "GGGG"]);
        world.tick(&held(&[Key::D]));
        assert!(world.has_won());

        world.respawn();

        assert!(world.has_won());
        assert_eq!(world.player.position(), (0.0, 0.0));
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.enemies[0].body.rect.x, 64.0);
    }

    #[test]
    fn test_drawables_order_and_tags() {
        let world = world(&["S.FE", "GPGG"]);
        let tags: Vec<ColorTag> = world.drawables().iter().map(|d| d.tag).collect();

        assert_eq!(
            tags,
            vec![
                ColorTag::Ground,
                ColorTag::Platform,
                ColorTag::Ground,
                ColorTag::Ground,
                ColorTag::Goal,
                ColorTag::Enemy,
                ColorTag::Player,
            ]
        );
    }
}
