use crate::collision::Rect;

/// Kind of solid tile. Both kinds collide the same way and only differ in colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Ground,
    Platform,
}

/// A solid, immutable tile owned by the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(rect: Rect, kind: TileKind) -> Self {
        Tile { rect, kind }
    }
}

/// What a single character of the level grid stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Solid(TileKind),
    EnemySpawn,
    Goal,
    Start,
}

impl Cell {
    /// Classifies a grid symbol. Unknown symbols are empty.
    pub fn from_symbol(symbol: char) -> Cell {
        match symbol {
            'G' => Cell::Solid(TileKind::Ground),
            'P' => Cell::Solid(TileKind::Platform),
            'E' => Cell::EnemySpawn,
            'F' => Cell::Goal,
            'S' => Cell::Start,
            _ => Cell::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(Cell::from_symbol('.'), Cell::Empty);
        assert_eq!(Cell::from_symbol('G'), Cell::Solid(TileKind::Ground));
        assert_eq!(Cell::from_symbol('P'), Cell::Solid(TileKind::Platform));
        assert_eq!(Cell::from_symbol('E'), Cell::EnemySpawn);
        assert_eq!(Cell::from_symbol('F'), Cell::Goal);
        assert_eq!(Cell::from_symbol('S'), Cell::Start);
    }

    #[test]
    fn test_unknown_symbols_are_empty() {
        for symbol in ['g', 'x', ' ', '#', '?'] {
            assert_eq!(Cell::from_symbol(symbol), Cell::Empty);
        }
    }
}
