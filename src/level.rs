//! Level parsing and static collision queries
//!
//! A level is described by a grid of single characters, one string per row:
//!
//! | Symbol | Meaning                 |
//! |--------|-------------------------|
//! | `.`    | empty                   |
//! | `G`    | solid ground tile       |
//! | `P`    | solid platform tile     |
//! | `E`    | enemy spawn             |
//! | `F`    | goal flag               |
//! | `S`    | player start            |
//!
//! Anything else is treated as empty. Rows are not required to have equal
//! lengths; every row is parsed to its own length and the level width is taken
//! from the first row.

use crate::collision::{aabb_intersect, Rect};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::tile::{Cell, Tile};
use std::path::Path;
use thiserror::Error;

/// The map from the canvas demo. Its last row is one cell shorter than the rest.
pub const DEFAULT_GRID: [&str; 7] = [
    "................................................................",
    "................................................................",
    "............................P...................................",
    ".................................................E..............",
    "...............................P...............................F",
    "............................................................S...",
    "GGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGGG",
];

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Static level geometry built once from a character grid.
#[derive(Debug, Clone)]
pub struct Level {
    pub tiles: Vec<Tile>,
    pub enemy_spawns: Vec<Point>,
    pub goal: Option<Rect>,
    pub start: Point,
    pub gravity: f32,
    pub tile_size: f32,
    /// Pixel width, from the first row.
    pub width: f32,
    pub height: f32,
}

impl Level {
    /// Builds a level from grid rows. Never fails: malformed input just produces
    /// fewer objects, a missing start is the origin and a missing goal is `None`.
    pub fn parse<S: AsRef<str>>(grid: &[S], config: &GameConfig) -> Level {
        let tile_size = config.tile_size;
        let mut tiles = Vec::new();
        let mut enemy_spawns = Vec::new();
        let mut goal = None;
        let mut start = Point::default();

        for (row_index, row) in grid.iter().enumerate() {
            for (col_index, symbol) in row.as_ref().chars().enumerate() {
                let x = col_index as f32 * tile_size;
                let y = row_index as f32 * tile_size;
                let rect = Rect::new(x, y, tile_size, tile_size);

                match Cell::from_symbol(symbol) {
                    Cell::Solid(kind) => tiles.push(Tile::new(rect, kind)),
                    Cell::EnemySpawn => enemy_spawns.push(Point { x, y }),
                    Cell::Goal => goal = Some(rect),
                    Cell::Start => start = Point { x, y },
                    Cell::Empty => {}
                }
            }
        }

        let columns = grid.first().map_or(0, |row| row.as_ref().chars().count());

        Level {
            tiles,
            enemy_spawns,
            goal,
            start,
            gravity: config.gravity,
            tile_size,
            width: columns as f32 * tile_size,
            height: grid.len() as f32 * tile_size,
        }
    }

    /// Reads a level from a text file, one grid row per line. Trailing
    /// whitespace is dropped and blank lines are skipped.
    pub fn load_from_file(path: impl AsRef<Path>, config: &GameConfig) -> Result<Level, LevelError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let grid = grid_from_text(&content);
        Ok(Self::parse(grid.as_slice(), config))
    }

    /// The built-in level.
    pub fn default_level(config: &GameConfig) -> Level {
        Self::parse(&DEFAULT_GRID, config)
    }

    /// Every tile strictly overlapping `rect`, in tile order.
    pub fn colliders_overlapping(&self, rect: &Rect) -> Vec<&Tile> {
        self.tiles
            .iter()
            .filter(|tile| aabb_intersect(rect, &tile.rect))
            .collect()
    }

    pub fn is_solid(&self, rect: &Rect) -> bool {
        self.tiles.iter().any(|tile| aabb_intersect(rect, &tile.rect))
    }

    /// The player-sized rectangle at the start point.
    pub fn start_rect(&self) -> Rect {
        Rect::new(self.start.x, self.start.y, self.tile_size, self.tile_size)
    }

    pub fn spawn_enemies(&self, config: &GameConfig) -> Vec<Enemy> {
        self.enemy_spawns
            .iter()
            .map(|spawn| Enemy::new(spawn.x, spawn.y, config))
            .collect()
    }
}

fn grid_from_text(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect()
}
