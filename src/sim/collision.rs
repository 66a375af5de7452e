//! Collision detection for axis-aligned boxes
//!
//! Every test is a pure predicate; responses (velocity flips, brick removal)
//! live in the tick.

use super::rect::Rect;

/// AABB overlap test
///
/// Strict on all four sides: rects that only share an edge do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.top() && a.top() > b.y()
}

/// Check whether a rect pokes past the left or right arena wall
#[inline]
pub fn outside_side_walls(rect: &Rect, arena_width: f32) -> bool {
    rect.x() < 0.0 || rect.right() > arena_width
}

/// Check whether a rect pokes above the arena ceiling
#[inline]
pub fn above_ceiling(rect: &Rect, arena_height: f32) -> bool {
    rect.top() > arena_height
}

/// Check whether a rect has dropped below the arena floor
#[inline]
pub fn below_floor(rect: &Rect) -> bool {
    rect.y() < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));

        let far = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!overlaps(&a, &far));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // a.right == b.x
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        // a.top == b.y
        let above = Rect::new(0.0, 10.0, 10.0, 10.0);
        // Corner contact only
        let corner = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &above));
        assert!(!overlaps(&a, &corner));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_wall_predicates() {
        let inside = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(!outside_side_walls(&inside, 400.0));
        assert!(!above_ceiling(&inside, 600.0));
        assert!(!below_floor(&inside));

        assert!(outside_side_walls(&Rect::new(-0.5, 10.0, 20.0, 20.0), 400.0));
        assert!(outside_side_walls(&Rect::new(381.0, 10.0, 20.0, 20.0), 400.0));
        // Touching the wall exactly is still inside
        assert!(!outside_side_walls(&Rect::new(380.0, 10.0, 20.0, 20.0), 400.0));
        assert!(above_ceiling(&Rect::new(10.0, 581.0, 20.0, 20.0), 600.0));
        assert!(!above_ceiling(&Rect::new(10.0, 580.0, 20.0, 20.0), 600.0));
        assert!(below_floor(&Rect::new(10.0, -0.1, 20.0, 20.0)));
        assert!(!below_floor(&Rect::new(10.0, 0.0, 20.0, 20.0)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            0.5f32..200.0,
            0.5f32..200.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_self_overlap(r in rect_strategy()) {
            prop_assert!(overlaps(&r, &r));
        }

        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_edge_neighbours_never_overlap(r in rect_strategy(), w in 0.5f32..200.0) {
            let right = Rect::new(r.right(), r.y(), w, r.height());
            let above = Rect::new(r.x(), r.top(), r.width(), w);
            prop_assert!(!overlaps(&r, &right));
            prop_assert!(!overlaps(&r, &above));
        }
    }
}
