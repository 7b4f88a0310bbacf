// Shared enums and helper structs used by the simulation and the renderer

use crate::collision::Rect;

/// What happened during a single tick, for the host to react to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// The player touched an enemy and was sent back to the start.
    pub player_reset: bool,
    /// `won` became true on this tick.
    pub just_won: bool,
}

/// Fixed colour category of a drawable rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Ground,
    Platform,
    Goal,
    Enemy,
    Player,
}

/// A rectangle the host renderer should fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    pub rect: Rect,
    pub tag: ColorTag,
}

impl Drawable {
    pub fn new(rect: Rect, tag: ColorTag) -> Self {
        Drawable { rect, tag }
    }
}
