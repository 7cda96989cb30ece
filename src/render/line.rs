//! Line rasterization.
//!
//! Each algorithm is an iterator over the samples it would plot, so the exact
//! sequence can be inspected independently of any surface. The `draw_*`
//! functions feed those samples to a [`Surface`].

use crate::color::Color;
use crate::geometry::Point;
use crate::surface::Surface;

/// Point size used for DDA samples.
pub const DDA_POINT_SIZE: f32 = 2.0;

// ============================================================================
// DDA
// ============================================================================

/// Digital Differential Analyzer samples between two points.
///
/// Steps `max(|dx|, |dy|)` times by `(dx/steps, dy/steps)`, yielding
/// `floor(steps) + 1` samples including both endpoints. Coincident endpoints
/// yield nothing, as does an extent too large for `f32`.
#[derive(Debug, Clone)]
pub struct DdaLine {
    x: f32,
    y: f32,
    x_inc: f32,
    y_inc: f32,
    remaining: u64,
}

impl DdaLine {
    /// Create the sample sequence from `from` to `to`.
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let steps = dx.abs().max(dy.abs());

        if steps == 0.0 || !steps.is_finite() {
            return Self {
                x: from.x,
                y: from.y,
                x_inc: 0.0,
                y_inc: 0.0,
                remaining: 0,
            };
        }

        Self {
            x: from.x,
            y: from.y,
            x_inc: dx / steps,
            y_inc: dy / steps,
            remaining: (steps.floor() as u64).saturating_add(1),
        }
    }
}

impl Iterator for DdaLine {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        let sample = Point::new(self.x, self.y);
        self.x += self.x_inc;
        self.y += self.y_inc;
        self.remaining -= 1;
        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DdaLine {}

/// Draw a line by DDA sampling. Coincident endpoints draw nothing.
///
/// The emitted samples do not depend on argument order.
pub fn draw_line_dda<S: Surface + ?Sized>(surface: &mut S, p1: Point, p2: Point, color: Color) {
    let (from, to) = ordered(p1, p2);
    let line = DdaLine::new(from, to);
    if line.len() == 0 {
        log::debug!("dda: degenerate segment at ({}, {})", p1.x, p1.y);
        return;
    }
    for sample in line {
        surface.plot(sample, color, DDA_POINT_SIZE);
    }
}

// ============================================================================
// Bresenham
// ============================================================================

/// Integer line path using the signed error term `err = dx - dy`.
///
/// Visits every octant; the path is 8-connected and includes both endpoints.
/// Deltas and the error term are `i64`, so any pair of `i32` endpoints works.
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    x: i32,
    y: i32,
    x_end: i32,
    y_end: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    err: i64,
    done: bool,
}

impl BresenhamLine {
    /// Create the path from `from` to `to`.
    #[must_use]
    pub fn new(from: (i32, i32), to: (i32, i32)) -> Self {
        let dx = (i64::from(to.0) - i64::from(from.0)).abs();
        let dy = (i64::from(to.1) - i64::from(from.1)).abs();
        Self {
            x: from.0,
            y: from.1,
            x_end: to.0,
            y_end: to.1,
            dx,
            dy,
            sx: if from.0 < to.0 { 1 } else { -1 },
            sy: if from.1 < to.1 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for BresenhamLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        let pixel = (self.x, self.y);

        if self.x == self.x_end && self.y == self.y_end {
            self.done = true;
            return Some(pixel);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(pixel)
    }
}

/// Integer line path using the slope-aware decision variable.
///
/// Drives along x when `dy <= dx` with `D = 2dy - dx`, adding `2(dy - dx)`
/// on a minor step and `2dy` otherwise; steep lines use the transposed form.
/// Yields exactly `max(dx, dy) + 1` pixels.
#[derive(Debug, Clone)]
pub struct MidpointLine {
    x: i32,
    y: i32,
    dx: i64,
    dy: i64,
    sx: i32,
    sy: i32,
    steep: bool,
    decision: i64,
    remaining: u64,
}

impl MidpointLine {
    /// Create the path from `from` to `to`.
    #[must_use]
    pub fn new(from: (i32, i32), to: (i32, i32)) -> Self {
        let dx = (i64::from(to.0) - i64::from(from.0)).abs();
        let dy = (i64::from(to.1) - i64::from(from.1)).abs();
        let steep = dy > dx;
        let decision = if steep { 2 * dx - dy } else { 2 * dy - dx };

        Self {
            x: from.0,
            y: from.1,
            dx,
            dy,
            sx: if from.0 < to.0 { 1 } else { -1 },
            sy: if from.1 < to.1 { 1 } else { -1 },
            steep,
            decision,
            remaining: dx.max(dy) as u64 + 1,
        }
    }
}

impl Iterator for MidpointLine {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.remaining == 0 {
            return None;
        }
        let pixel = (self.x, self.y);
        self.remaining -= 1;

        if self.steep {
            self.y += self.sy;
            if self.decision > 0 {
                self.x += self.sx;
                self.decision += 2 * (self.dx - self.dy);
            } else {
                self.decision += 2 * self.dx;
            }
        } else {
            self.x += self.sx;
            if self.decision > 0 {
                self.y += self.sy;
                self.decision += 2 * (self.dy - self.dx);
            } else {
                self.decision += 2 * self.dy;
            }
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (n, Some(n))
    }
}

impl ExactSizeIterator for MidpointLine {}

/// Draw a line with Bresenham's algorithm, plotting `thickness`-sized points.
///
/// Endpoints are rounded to the pixel grid. The pixel set does not depend on
/// argument order.
pub fn draw_line_bresenham<S: Surface + ?Sized>(
    surface: &mut S,
    p1: Point,
    p2: Point,
    color: Color,
    thickness: u32,
) {
    let size = thickness.max(1) as f32;
    let (from, to) = ordered(p1, p2);
    for pixel in BresenhamLine::new(from.to_grid(), to.to_grid()) {
        surface.plot(Point::from(pixel), color, size);
    }
}

/// Order endpoints lexicographically so both directions rasterize alike.
#[inline]
fn ordered(a: Point, b: Point) -> (Point, Point) {
    if (b.x, b.y) < (a.x, a.y) {
        (b, a)
    } else {
        (a, b)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, DrawList};

    fn is_8_connected(path: &[(i32, i32)]) -> bool {
        path.windows(2)
            .all(|w| (w[0].0 - w[1].0).abs() <= 1 && (w[0].1 - w[1].1).abs() <= 1)
    }

    #[test]
    fn test_dda_sample_count_and_endpoints() {
        let samples: Vec<Point> = DdaLine::new(Point::new(0.0, 0.0), Point::new(8.0, 4.0)).collect();

        assert_eq!(samples.len(), 9);
        assert_eq!(samples[0], Point::new(0.0, 0.0));
        assert_eq!(samples[8], Point::new(8.0, 4.0));
        assert_eq!(samples[1], Point::new(1.0, 0.5));
    }

    #[test]
    fn test_dda_fractional_steps() {
        // steps = 2.5 -> floor(2.5) + 1 samples
        let samples: Vec<Point> = DdaLine::new(Point::new(0.0, 0.0), Point::new(2.5, 1.0)).collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[2].x, 2.0);
    }

    #[test]
    fn test_dda_degenerate_draws_nothing() {
        let mut list = DrawList::new();
        let p = Point::new(3.0, 3.0);
        draw_line_dda(&mut list, p, p, Color::RED);
        assert!(list.is_empty());
    }

    #[test]
    fn test_dda_plots_with_point_size() {
        let mut list = DrawList::new();
        draw_line_dda(&mut list, Point::new(0.0, 0.0), Point::new(0.0, 3.0), Color::RED);

        assert_eq!(list.len(), 4);
        assert!(list
            .commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::Point { size, .. } if *size == DDA_POINT_SIZE)));
    }

    #[test]
    fn test_bresenham_horizontal() {
        let path: Vec<_> = BresenhamLine::new((10, 50), (14, 50)).collect();
        assert_eq!(path, vec![(10, 50), (11, 50), (12, 50), (13, 50), (14, 50)]);
    }

    #[test]
    fn test_bresenham_vertical_reverse() {
        let path: Vec<_> = BresenhamLine::new((3, 4), (3, 0)).collect();
        assert_eq!(path, vec![(3, 4), (3, 3), (3, 2), (3, 1), (3, 0)]);
    }

    #[test]
    fn test_bresenham_diagonal() {
        let path: Vec<_> = BresenhamLine::new((0, 0), (-3, 3)).collect();
        assert_eq!(path, vec![(0, 0), (-1, 1), (-2, 2), (-3, 3)]);
    }

    #[test]
    fn test_bresenham_shallow_sequence() {
        let path: Vec<_> = BresenhamLine::new((0, 0), (2, 1)).collect();
        assert_eq!(path, vec![(0, 0), (1, 0), (2, 1)]);
    }

    #[test]
    fn test_bresenham_single_point() {
        let path: Vec<_> = BresenhamLine::new((7, 7), (7, 7)).collect();
        assert_eq!(path, vec![(7, 7)]);
    }

    #[test]
    fn test_bresenham_all_octants() {
        let targets = [
            (5, 2), (2, 5), (-2, 5), (-5, 2),
            (-5, -2), (-2, -5), (2, -5), (5, -2),
        ];
        for to in targets {
            let path: Vec<_> = BresenhamLine::new((0, 0), to).collect();
            assert_eq!(path.first(), Some(&(0, 0)));
            assert_eq!(path.last(), Some(&to), "octant ending at {to:?}");
            assert_eq!(path.len(), 6);
            assert!(is_8_connected(&path));
        }
    }

    #[test]
    fn test_midpoint_shallow_sequence() {
        let path: Vec<_> = MidpointLine::new((0, 0), (4, 2)).collect();
        assert_eq!(path, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_midpoint_all_octants() {
        let targets = [
            (7, 3), (3, 7), (-3, 7), (-7, 3),
            (-7, -3), (-3, -7), (3, -7), (7, -3),
        ];
        for to in targets {
            let line = MidpointLine::new((0, 0), to);
            assert_eq!(line.len(), 8);
            let path: Vec<_> = line.collect();
            assert_eq!(path.last(), Some(&to), "octant ending at {to:?}");
            assert!(is_8_connected(&path));
        }
    }

    #[test]
    fn test_draw_bresenham_thickness() {
        let mut list = DrawList::new();
        draw_line_bresenham(&mut list, Point::new(0.0, 0.0), Point::new(3.0, 0.0), Color::RED, 0);

        assert_eq!(list.len(), 4);
        assert!(list
            .commands()
            .iter()
            .all(|c| matches!(c, DrawCommand::Point { size, .. } if *size == 1.0)));
    }

    #[test]
    fn test_draw_bresenham_order_independent() {
        let mut forward = DrawList::new();
        let mut backward = DrawList::new();
        let a = Point::new(0.0, 0.0);
        let b = Point::new(2.0, 1.0);

        draw_line_bresenham(&mut forward, a, b, Color::RED, 2);
        draw_line_bresenham(&mut backward, b, a, Color::RED, 2);

        assert_eq!(forward.commands(), backward.commands());
    }

    #[test]
    fn test_draw_bresenham_rounds_endpoints() {
        let mut list = DrawList::new();
        draw_line_bresenham(&mut list, Point::new(0.4, 0.6), Point::new(2.4, 0.6), Color::RED, 1);

        let points: Vec<_> = list.points().collect();
        assert_eq!(points.first(), Some(&Point::new(0.0, 1.0)));
        assert_eq!(points.last(), Some(&Point::new(2.0, 1.0)));
    }

    #[test]
    fn test_bresenham_long_spans_do_not_overflow() {
        let path: Vec<_> = BresenhamLine::new((-600_000_000, 0), (600_000_000, 1))
            .take(3)
            .collect();
        assert_eq!(path, vec![(-600_000_000, 0), (-599_999_999, 0), (-599_999_998, 0)]);

        let path: Vec<_> = BresenhamLine::new((i32::MIN, 0), (i32::MAX, 0)).take(2).collect();
        assert_eq!(path, vec![(i32::MIN, 0), (i32::MIN + 1, 0)]);

        let path: Vec<_> = BresenhamLine::new((0, i32::MAX), (0, i32::MIN)).take(2).collect();
        assert_eq!(path, vec![(0, i32::MAX), (0, i32::MAX - 1)]);
    }

    #[test]
    fn test_midpoint_full_range_span() {
        let line = MidpointLine::new((i32::MIN, 0), (i32::MAX, 1));
        assert_eq!(u64::try_from(line.len()).unwrap(), 1 << 32);

        let path: Vec<_> = line.take(3).collect();
        assert_eq!(path, vec![(i32::MIN, 0), (i32::MIN + 1, 0), (i32::MIN + 2, 0)]);
    }

    #[test]
    fn test_dda_sample_count_beyond_u32() {
        let line = DdaLine::new(Point::new(-3.0e9, 0.0), Point::new(3.0e9, 0.0));
        assert_eq!(u64::try_from(line.len()).unwrap(), 6_000_000_001);
    }

    #[test]
    fn test_dda_infinite_extent_draws_nothing() {
        // Finite endpoints whose difference overflows f32.
        let line = DdaLine::new(Point::new(-3.0e38, 0.0), Point::new(3.0e38, 0.0));
        assert_eq!(line.len(), 0);
    }
}
