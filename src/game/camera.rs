use crate::collision::Rect;

/// Horizontal scrolling camera.
///
/// Centres on the target while keeping the view inside the level. A level
/// narrower than the view is pinned to the left edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub offset_x: f32,
    pub view_width: f32,
}

impl Camera {
    pub fn new(view_width: f32) -> Self {
        Camera {
            offset_x: 0.0,
            view_width,
        }
    }

    pub fn follow(&mut self, target: &Rect, level_width: f32) {
        let max_offset = (level_width - self.view_width).max(0.0);
        self.offset_x = (target.x - self.view_width / 2.0).clamp(0.0, max_offset);
    }

    /// Converts a world rectangle into view space.
    pub fn to_view(&self, rect: &Rect) -> Rect {
        rect.translated_x(-self.offset_x)
    }

    pub fn is_visible(&self, rect: &Rect) -> bool {
        rect.right() > self.offset_x && rect.left() < self.offset_x + self.view_width
    }
}
