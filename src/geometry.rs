//! Geometric primitives.
//!
//! The rasterizers work in a single logical coordinate space; callers
//! pre-transform world coordinates into it.

use std::f32::consts::PI;

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Round both coordinates to the nearest integer grid position.
    #[must_use]
    pub fn to_grid(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// An axis-aligned rectangle defined by its lower-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X coordinate of the lower-left corner.
    pub x: f32,
    /// Y coordinate of the lower-left corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle centred on a point.
    #[must_use]
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge.
    #[must_use]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test; touching edges do not intersect.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.top()
            && self.top() > other.y
    }

    /// The four corners, counter-clockwise from the lower-left.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.top()),
            Point::new(self.x, self.top()),
        ]
    }
}

/// Clip window given by its bounds, `xmin <= xmax` and `ymin <= ymax`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    /// Left bound.
    pub xmin: f32,
    /// Bottom bound.
    pub ymin: f32,
    /// Right bound.
    pub xmax: f32,
    /// Top bound.
    pub ymax: f32,
}

impl ClipRect {
    /// Create a clip window. Bounds are sorted so min <= max.
    #[must_use]
    pub fn new(xmin: f32, ymin: f32, xmax: f32, ymax: f32) -> Self {
        Self {
            xmin: xmin.min(xmax),
            ymin: ymin.min(ymax),
            xmax: xmin.max(xmax),
            ymax: ymin.max(ymax),
        }
    }

    /// Grow the window by `margin` on the left and right.
    #[must_use]
    pub fn widen(self, margin: f32) -> Self {
        Self::new(self.xmin - margin, self.ymin, self.xmax + margin, self.ymax)
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.xmin && p.x <= self.xmax && p.y >= self.ymin && p.y <= self.ymax
    }
}

/// 2D affine transform stored as a 3x3 homogeneous matrix (row-major).
///
/// Operations post-multiply, so the most recently added operation is applied
/// to a point first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    m: [[f32; 3]; 3],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// The identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Raw matrix rows.
    #[must_use]
    pub const fn matrix(&self) -> [[f32; 3]; 3] {
        self.m
    }

    /// Post-multiply by another transform: `self = self * other`.
    #[must_use]
    pub fn multiply(self, other: &Self) -> Self {
        let mut out = [[0.0_f32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Self { m: out }
    }

    /// Append a translation.
    #[must_use]
    pub fn translate(self, tx: f32, ty: f32) -> Self {
        self.multiply(&Self {
            m: [[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]],
        })
    }

    /// Append a scale about the origin.
    #[must_use]
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        self.multiply(&Self {
            m: [[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]],
        })
    }

    /// Append a counter-clockwise rotation, in degrees.
    #[must_use]
    pub fn rotate(self, degrees: f32) -> Self {
        let (s, c) = (degrees * PI / 180.0).sin_cos();
        self.multiply(&Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        })
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_point_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(3.0, 4.0);
        assert!((p1.distance(p2) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_point_to_grid_rounds() {
        assert_eq!(Point::new(2.4, -1.6).to_grid(), (2, -2));
        assert_eq!(Point::from((3, 4)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_line_length() {
        let line = Line::from_coords(0.0, 0.0, 3.0, 4.0);
        assert!((line.length() - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(0.0, 20.0, 5.0, 5.0)));
    }

    #[test]
    fn test_rect_centered_and_corners() {
        let r = Rect::centered(Point::new(100.0, 400.0), 24.0, 36.0);
        assert_eq!(r, Rect::new(88.0, 382.0, 24.0, 36.0));
        assert_eq!(r.corners()[2], Point::new(112.0, 418.0));
    }

    #[test]
    fn test_clip_rect_sorts_bounds() {
        let r = ClipRect::new(40.0, 40.0, 0.0, 0.0);
        assert_eq!(r, ClipRect::new(0.0, 0.0, 40.0, 40.0));
        assert!(r.contains(Point::new(40.0, 0.0)));
        assert!(!r.contains(Point::new(40.1, 0.0)));
        assert_eq!(r.widen(5.0).xmin, -5.0);
    }

    #[test]
    fn test_transform_translate_scale_order() {
        // Scale is applied first, then the translation.
        let t = Transform2D::identity().translate(10.0, 5.0).scale(2.0, 3.0);
        let p = t.apply(Point::new(1.0, 1.0));
        assert_abs_diff_eq!(p.x, 12.0);
        assert_abs_diff_eq!(p.y, 8.0);
    }

    #[test]
    fn test_transform_rotate_quarter_turn() {
        let p = Transform2D::identity().rotate(90.0).apply(Point::new(1.0, 0.0));
        assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_transform_identity_is_noop() {
        let p = Point::new(-3.5, 7.25);
        assert_eq!(Transform2D::default().apply(p), p);
    }
}
