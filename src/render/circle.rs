//! Midpoint circle rasterization.

use crate::color::Color;
use crate::geometry::Point;
use crate::surface::Surface;

/// Point size used for stroked circle outlines.
pub const CIRCLE_POINT_SIZE: f32 = 2.0;

/// First-octant `(x, y)` offsets of the midpoint circle algorithm.
///
/// Starts at `(0, r)` with `p = 1 - r`; each step increments `x` and, when
/// `p >= 0`, decrements `y`. Stops once `x >= y`. A negative radius yields
/// nothing; radius 0 yields the single offset `(0, 0)`.
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    x: i32,
    y: i32,
    p: i32,
    started: bool,
    done: bool,
}

impl MidpointCircle {
    /// Create the offset sequence for `radius`.
    #[must_use]
    pub fn new(radius: i32) -> Self {
        Self {
            x: 0,
            y: radius,
            p: 1 - radius,
            started: false,
            done: radius < 0,
        }
    }
}

impl Iterator for MidpointCircle {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some((self.x, self.y));
        }
        if self.x >= self.y {
            self.done = true;
            return None;
        }

        self.x += 1;
        if self.p < 0 {
            self.p += 2 * self.x + 1;
        } else {
            self.y -= 1;
            self.p += 2 * (self.x - self.y) + 1;
        }
        Some((self.x, self.y))
    }
}

/// The 8 symmetric points of an octant offset around `center`.
#[must_use]
pub fn octant_points(center: (i32, i32), x: i32, y: i32) -> [(i32, i32); 8] {
    let (cx, cy) = center;
    [
        (cx + x, cy + y),
        (cx - x, cy + y),
        (cx + x, cy - y),
        (cx - x, cy - y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx + y, cy - x),
        (cx - y, cy - x),
    ]
}

/// Draw a circle with the midpoint algorithm.
///
/// `filled` emits one horizontal segment per row `y` in `[-r, r]` with
/// half-width `floor(sqrt(r² - y²))`. Otherwise all 8 symmetric points of
/// every octant step are plotted (duplicates included). The center is rounded
/// to the pixel grid.
pub fn draw_circle_midpoint<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: i32,
    color: Color,
    filled: bool,
) {
    if radius < 0 {
        log::debug!("circle: negative radius {radius}");
        return;
    }
    let (cx, cy) = center.to_grid();

    if filled {
        let r2 = i64::from(radius) * i64::from(radius);
        for y in -radius..=radius {
            let half = ((r2 - i64::from(y) * i64::from(y)) as f64).sqrt().floor() as i32;
            surface.segment(
                Point::from((cx - half, cy + y)),
                Point::from((cx + half, cy + y)),
                color,
                1.0,
            );
        }
        return;
    }

    for (x, y) in MidpointCircle::new(radius) {
        for pixel in octant_points((cx, cy), x, y) {
            surface.plot(Point::from(pixel), color, CIRCLE_POINT_SIZE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawList;

    #[test]
    fn test_octant_sequence_radius_5() {
        let steps: Vec<_> = MidpointCircle::new(5).collect();
        assert_eq!(steps, vec![(0, 5), (1, 5), (2, 5), (3, 4), (4, 3)]);
    }

    #[test]
    fn test_radius_zero_plots_center_eight_times() {
        let mut list = DrawList::new();
        draw_circle_midpoint(&mut list, Point::new(10.0, 10.0), 0, Color::RED, false);

        assert_eq!(list.len(), 8);
        assert!(list.points().all(|p| p == Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_negative_radius_is_noop() {
        let mut list = DrawList::new();
        draw_circle_midpoint(&mut list, Point::ORIGIN, -3, Color::RED, false);
        draw_circle_midpoint(&mut list, Point::ORIGIN, -3, Color::RED, true);
        assert!(list.is_empty());
    }

    #[test]
    fn test_stroked_is_symmetric() {
        let mut list = DrawList::new();
        draw_circle_midpoint(&mut list, Point::ORIGIN, 12, Color::GREEN, false);

        let points: Vec<(i32, i32)> = list.points().map(Point::to_grid).collect();
        for &(x, y) in &points {
            assert!(points.contains(&(-x, y)));
            assert!(points.contains(&(x, -y)));
            assert!(points.contains(&(y, x)));
        }
    }

    #[test]
    fn test_filled_spans() {
        let mut list = DrawList::new();
        draw_circle_midpoint(&mut list, Point::new(50.0, 50.0), 3, Color::BLUE, true);

        let spans: Vec<_> = list.segments().collect();
        assert_eq!(spans.len(), 7);
        // y = -3 -> half-width 0, y = 0 -> half-width 3, y = 2 -> floor(sqrt(5)) = 2
        assert_eq!(spans[0], (Point::new(50.0, 47.0), Point::new(50.0, 47.0)));
        assert_eq!(spans[3], (Point::new(47.0, 50.0), Point::new(53.0, 50.0)));
        assert_eq!(spans[5], (Point::new(48.0, 52.0), Point::new(52.0, 52.0)));
    }

    #[test]
    fn test_octant_points() {
        let pts = octant_points((0, 0), 1, 2);
        assert_eq!(pts[0], (1, 2));
        assert_eq!(pts[7], (-2, -1));
    }
}
