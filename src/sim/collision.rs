//! Intersection tests between the player's box and level shapes
//!
//! All overlap tests are strict: shapes that only share an edge or a corner
//! do not intersect. The landing rule in `tick` relies on this, since a
//! player resting on a platform touches it without overlapping.

use glam::Vec2;

use super::geometry::{Circle, Field, Rect, Shape, Triangle};

/// Rectangle vs rectangle
#[inline]
pub fn rects_intersect(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Rectangle vs circle: the rectangle point nearest the center must lie
/// strictly inside the circle
pub fn rect_circle_intersect(rect: &Rect, circle: &Circle) -> bool {
    let nearest = rect.closest_point(circle.center);
    nearest.distance_squared(circle.center) < circle.radius * circle.radius
}

/// Rectangle vs triangle via separating axes
///
/// Candidate axes are the rectangle's two axes plus the normal of each
/// triangle edge. One axis with non-overlapping projections separates them.
pub fn rect_triangle_intersect(rect: &Rect, tri: &Triangle) -> bool {
    let corners = [
        rect.pos,
        Vec2::new(rect.right(), rect.top()),
        Vec2::new(rect.right(), rect.bottom()),
        Vec2::new(rect.left(), rect.bottom()),
    ];

    let mut axes = [Vec2::X, Vec2::Y, Vec2::ZERO, Vec2::ZERO, Vec2::ZERO];
    for i in 0..3 {
        let edge = tri.points[(i + 1) % 3] - tri.points[i];
        axes[2 + i] = edge.perp();
    }

    axes.iter()
        .filter(|axis| axis.length_squared() > f32::EPSILON)
        .all(|axis| {
            let (a_min, a_max) = project(&corners, *axis);
            let (b_min, b_max) = project(&tri.points, *axis);
            a_max > b_min && b_max > a_min
        })
}

fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    points
        .iter()
        .map(|p| p.dot(axis))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| {
            (lo.min(d), hi.max(d))
        })
}

/// Single dispatch point for "does the player box touch this shape"
pub fn rect_shape_intersect(rect: &Rect, shape: &Shape) -> bool {
    match shape {
        Shape::Rectangle(r) => rects_intersect(rect, r),
        Shape::Triangle(t) => rect_triangle_intersect(rect, t),
        Shape::Circle(c) => rect_circle_intersect(rect, c),
    }
}

/// Clamp a box's top-left so the box stays inside the field horizontally
/// and never sinks below the floor. The top of the field is open.
pub fn clamp_to_field(pos: Vec2, size: Vec2, field: &Field) -> Vec2 {
    Vec2::new(
        pos.x.min(field.width - size.x).max(0.0),
        pos.y.min(field.bottom() - size.y),
    )
}

/// Euclidean distance
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rects_overlap_and_touch() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        assert!(rects_intersect(&a, &Rect::new(10.0, 10.0, 20.0, 20.0)));
        // Sharing an edge is not an overlap
        assert!(!rects_intersect(&a, &Rect::new(20.0, 0.0, 20.0, 20.0)));
        assert!(!rects_intersect(&a, &Rect::new(0.0, 20.0, 20.0, 20.0)));
        assert!(!rects_intersect(&a, &Rect::new(50.0, 50.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_circle() {
        let goal = Circle::inscribed(Vec2::new(400.0, 450.0), 30.0);
        // Player standing right on top of the goal's box
        assert!(rect_circle_intersect(&Rect::new(405.0, 440.0, 20.0, 20.0), &goal));
        // Inside the bounding box corner but outside the circle
        assert!(!rect_circle_intersect(&Rect::new(380.0, 430.0, 21.0, 21.0), &goal));
        assert!(!rect_circle_intersect(&Rect::new(500.0, 480.0, 20.0, 20.0), &goal));
    }

    #[test]
    fn test_rect_circle_center_inside_rect() {
        let c = Circle::new(Vec2::new(10.0, 10.0), 2.0);
        assert!(rect_circle_intersect(&Rect::new(0.0, 0.0, 20.0, 20.0), &c));
    }

    #[test]
    fn test_rect_triangle() {
        let spike = Triangle::spike(Vec2::new(100.0, 200.0), 20.0, 10.0);

        // Standing on the platform over the spike
        assert!(rect_triangle_intersect(&Rect::new(95.0, 180.0, 20.0, 20.0), &spike));
        // Just beside the base, same height
        assert!(!rect_triangle_intersect(&Rect::new(121.0, 180.0, 20.0, 20.0), &spike));
        // Directly above the apex
        assert!(!rect_triangle_intersect(&Rect::new(100.0, 165.0, 20.0, 20.0), &spike));
        // Inside the bounding box but beyond the sloped edge
        assert!(!rect_triangle_intersect(&Rect::new(96.0, 186.0, 5.0, 5.0), &spike));
        // Resting on the platform exactly past the base corner
        assert!(!rect_triangle_intersect(&Rect::new(120.0, 180.0, 20.0, 20.0), &spike));
    }

    #[test]
    fn test_shape_dispatch() {
        let player = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect_shape_intersect(&player, &Shape::Rectangle(Rect::new(5.0, 5.0, 10.0, 10.0))));
        assert!(rect_shape_intersect(
            &player,
            &Shape::Circle(Circle::new(Vec2::new(12.0, 5.0), 3.0))
        ));
        assert!(!rect_shape_intersect(
            &player,
            &Shape::Triangle(Triangle::spike(Vec2::new(30.0, 10.0), 20.0, 10.0))
        ));
    }

    #[test]
    fn test_clamp_to_field() {
        let field = Field::new(1000.0, 500.0);
        let size = Vec2::new(20.0, 20.0);
        assert_eq!(clamp_to_field(Vec2::new(-5.0, 100.0), size, &field), Vec2::new(0.0, 100.0));
        assert_eq!(clamp_to_field(Vec2::new(995.0, 490.0), size, &field), Vec2::new(980.0, 480.0));
        // The top is open
        assert_eq!(clamp_to_field(Vec2::new(10.0, -40.0), size, &field), Vec2::new(10.0, -40.0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }
}
