/// Collision primitives for the platformer
///
/// This module provides the axis-aligned bounding box (AABB) type used by the
/// level, the entities and the renderer, plus the strict intersection test every
/// collision query in the game is built on.
///
/// # Architecture
///
/// - `Rect`: Floating point AABB (positions accumulate sub-pixel velocities)
/// - `Collidable` trait: Implemented by anything that exposes world-space bounds
/// - `aabb_intersect()`: Pure function for strict rectangle intersection
///
/// # Strictness
///
/// All four inequalities are strict, so two rectangles that only share an edge do
/// NOT intersect. An entity standing exactly on top of a tile is therefore not
/// "inside" it, which is what lets the resolution passes snap to an edge and stay
/// stable on the next tick.

/// An axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns a copy moved by `dx` on the X axis.
    pub fn translated_x(&self, dx: f32) -> Rect {
        Rect {
            x: self.x + dx,
            ..*self
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        aabb_intersect(self, other)
    }

    /// True if `other` lies entirely within this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

/// Trait for objects that participate in collision detection.
///
/// # Example
///
/// ```ignore
/// impl Collidable for Enemy {
///     fn get_bounds(&self) -> Rect {
///         self.body.rect
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the world-space bounding box of this object.
    fn get_bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn get_bounds(&self) -> Rect {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes. Touching
/// edges do not count.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x < b.x + b.width && a.x + a.width > b.x;
    let y_overlap = a.y < b.y + b.height && a.y + a.height > b.y;

    x_overlap && y_overlap
}

/// Checks one collidable against a collection, returning the indices that hit.
///
/// # Example
///
/// ```ignore
/// for index in check_collisions_with_collection(&player, &enemies) {
///     log::debug!("player touched enemy {}", index);
/// }
/// ```
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(16.0, 16.0, 32.0, 32.0);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a));
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let right = Rect::new(32.0, 0.0, 32.0, 32.0);
        let below = Rect::new(0.0, 32.0, 32.0, 32.0);

        assert!(!aabb_intersect(&rect_a, &right));
        assert!(!aabb_intersect(&rect_a, &below));
    }

    #[test]
    fn test_aabb_intersect_sub_pixel_overlap() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(31.5, 0.0, 32.0, 32.0);

        assert!(aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_separated() {
        let rect_a = Rect::new(0.0, 0.0, 32.0, 32.0);
        let rect_b = Rect::new(100.0, 100.0, 32.0, 32.0);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0.0, 0.0, 100.0, 100.0);
        let small = Rect::new(25.0, 25.0, 50.0, 50.0);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
        assert!(large.contains_rect(&small));
        assert!(!small.contains_rect(&large));
    }

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 32.0, 16.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 42.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 36.0);
        assert_eq!(rect.translated_x(-11.0).x, -1.0);
    }

    #[test]
    fn test_check_collisions_with_collection() {
        let probe = Rect::new(0.0, 0.0, 32.0, 32.0);
        let others = vec![
            Rect::new(16.0, 0.0, 32.0, 32.0),
            Rect::new(32.0, 0.0, 32.0, 32.0),
            Rect::new(-20.0, 10.0, 32.0, 32.0),
        ];

        assert_eq!(check_collisions_with_collection(&probe, &others), vec![0, 2]);
    }
}
