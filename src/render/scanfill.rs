//! Scan-line polygon fill with an edge table and an active edge table.
//!
//! Scanlines run from the rounded minimum vertex y up to, but excluding, the
//! rounded maximum. Each scanline pairs consecutive x-intersections of the
//! active edges left to right and fills the span between them.
//!
//! Self-intersecting polygons produce an unspecified (but finite) fill. An odd
//! number of active edges drops the unpaired trailing intersection.

use std::collections::BTreeMap;

use crate::color::Color;
use crate::geometry::Point;
use crate::surface::Surface;

/// How a filled span is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FillStyle {
    /// One flat color.
    Solid(Color),
    /// RGB interpolated from `from` at the lowest scanline toward `to` at the
    /// top of the polygon. Alpha stays `from.a`.
    VerticalGradient {
        /// Color at `ymin`.
        from: Color,
        /// Color at `ymax`.
        to: Color,
    },
}

impl FillStyle {
    /// Color of scanline `y` for a polygon spanning `ymin..ymax`.
    #[must_use]
    pub fn color_at(&self, y: i32, ymin: i32, ymax: i32) -> Color {
        match *self {
            Self::Solid(color) => color,
            Self::VerticalGradient { from, to } => {
                let extent = ymax - ymin;
                if extent == 0 {
                    return from;
                }
                let t = (y - ymin) as f32 / extent as f32;
                from.lerp_rgb(to, t)
            }
        }
    }
}

/// A non-horizontal polygon edge while it is being scan converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Current x-intersection with the scanline.
    pub x: f32,
    /// Inverse slope `dx/dy`, added to `x` per scanline.
    pub inv_slope: f32,
    /// Scanline at which the edge stops being active.
    pub ymax: i32,
}

/// Edges bucketed by the scanline they start on.
#[derive(Debug, Clone, Default)]
pub struct EdgeTable {
    buckets: BTreeMap<i32, Vec<Edge>>,
}

impl EdgeTable {
    /// Build the table for a closed polygon. Horizontal edges (equal rounded
    /// endpoint y) contribute no crossings and are skipped.
    #[must_use]
    pub fn build(vertices: &[Point]) -> Self {
        let mut buckets: BTreeMap<i32, Vec<Edge>> = BTreeMap::new();

        for (i, &a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            let (lower, upper) = if a.y <= b.y { (a, b) } else { (b, a) };
            let y_start = lower.y.round() as i32;
            let y_end = upper.y.round() as i32;

            if y_start == y_end {
                continue;
            }

            buckets.entry(y_start).or_default().push(Edge {
                x: lower.x,
                inv_slope: (upper.x - lower.x) / (upper.y - lower.y),
                ymax: y_end,
            });
        }

        Self { buckets }
    }

    /// Remove and return the edges starting at `y`.
    pub fn take(&mut self, y: i32) -> Vec<Edge> {
        self.buckets.remove(&y).unwrap_or_default()
    }

    /// Total number of edges still in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether every edge has been taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Edges crossing the current scanline, kept sorted by x.
#[derive(Debug, Clone, Default)]
pub struct ActiveEdgeTable {
    edges: Vec<Edge>,
}

impl ActiveEdgeTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add newly started edges.
    pub fn extend(&mut self, edges: impl IntoIterator<Item = Edge>) {
        self.edges.extend(edges);
    }

    /// Drop edges whose `ymax` has been reached.
    pub fn retire(&mut self, y: i32) {
        self.edges.retain(|edge| edge.ymax > y);
    }

    /// Sort by current x.
    pub fn sort(&mut self) {
        self.edges.sort_by(|a, b| a.x.total_cmp(&b.x));
    }

    /// Step every edge to the next scanline.
    pub fn advance(&mut self) {
        for edge in &mut self.edges {
            edge.x += edge.inv_slope;
        }
    }

    /// Active edges in their current order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of active edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no edge is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// One horizontal fill run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Scanline.
    pub y: i32,
    /// Left intersection.
    pub x_left: f32,
    /// Right intersection.
    pub x_right: f32,
}

/// Scan convert a polygon into spans, bottom scanline first.
///
/// Fewer than three vertices yield no spans.
#[must_use]
pub fn scan_spans(vertices: &[Point]) -> Vec<Span> {
    let mut spans = Vec::new();
    scan_with(vertices, |span, _, _| spans.push(span));
    spans
}

/// Fill a polygon on `surface`, one segment per span.
pub fn scan_line_fill<S: Surface + ?Sized>(surface: &mut S, vertices: &[Point], style: FillStyle) {
    scan_with(vertices, |span, ymin, ymax| {
        let y = span.y as f32;
        surface.segment(
            Point::new(span.x_left, y),
            Point::new(span.x_right, y),
            style.color_at(span.y, ymin, ymax),
            1.0,
        );
    });
}

/// Drive the edge table / AET loop, handing each span and the polygon's
/// scanline bounds to `emit`.
fn scan_with(vertices: &[Point], mut emit: impl FnMut(Span, i32, i32)) {
    if vertices.len() < 3 {
        log::debug!("scan fill: {} vertices, nothing to fill", vertices.len());
        return;
    }

    let (lo, hi) = vertices
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));
    let ymin = lo.round() as i32;
    let ymax = hi.round() as i32;

    let mut table = EdgeTable::build(vertices);
    let mut active = ActiveEdgeTable::new();

    for y in ymin..ymax {
        active.extend(table.take(y));
        active.retire(y);
        active.sort();

        if active.len() % 2 == 1 {
            log::warn!("scan fill: odd active edge count {} at y={y}", active.len());
        }

        for pair in active.edges().chunks_exact(2) {
            emit(
                Span {
                    y,
                    x_left: pair[0].x,
                    x_right: pair[1].x,
                },
                ymin,
                ymax,
            );
        }

        active.advance();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::DrawList;
    use approx::assert_abs_diff_eq;

    fn triangle() -> Vec<Point> {
        vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 10.0)]
    }

    #[test]
    fn test_fewer_than_three_vertices_is_noop() {
        let mut list = DrawList::new();
        scan_line_fill(
            &mut list,
            &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
            FillStyle::Solid(Color::RED),
        );
        assert!(list.is_empty());
        assert!(scan_spans(&[]).is_empty());
    }

    #[test]
    fn test_edge_table_skips_horizontal() {
        let mut table = EdgeTable::build(&triangle());
        assert_eq!(table.len(), 2);

        let starting = table.take(0);
        assert_eq!(starting.len(), 2);
        assert!(starting.iter().all(|e| e.ymax == 10));
        assert!(table.is_empty());
    }

    #[test]
    fn test_triangle_spans_narrow_to_apex() {
        let spans = scan_spans(&triangle());

        assert_eq!(spans.len(), 10);
        for span in &spans {
            let y = span.y as f32;
            assert_abs_diff_eq!(span.x_left, 0.5 * y, epsilon = 1e-4);
            assert_abs_diff_eq!(span.x_right, 10.0 - 0.5 * y, epsilon = 1e-4);
        }
        assert_eq!(spans.last().map(|s| s.y), Some(9));
    }

    #[test]
    fn test_rectangle_spans_half_open() {
        let rect = [
            Point::new(2.0, 3.0),
            Point::new(8.0, 3.0),
            Point::new(8.0, 7.0),
            Point::new(2.0, 7.0),
        ];
        let spans = scan_spans(&rect);

        assert_eq!(spans.iter().map(|s| s.y).collect::<Vec<_>>(), vec![3, 4, 5, 6]);
        assert!(spans.iter().all(|s| s.x_left == 2.0 && s.x_right == 8.0));
    }

    #[test]
    fn test_concave_polygon_two_spans() {
        // A "U" shape: the notch splits the upper scanlines.
        let u = [
            Point::new(0.0, 0.0),
            Point::new(9.0, 0.0),
            Point::new(9.0, 6.0),
            Point::new(6.0, 6.0),
            Point::new(6.0, 3.0),
            Point::new(3.0, 3.0),
            Point::new(3.0, 6.0),
            Point::new(0.0, 6.0),
        ];
        let spans = scan_spans(&u);

        assert_eq!(spans.iter().filter(|s| s.y == 1).count(), 1);
        let upper: Vec<_> = spans.iter().filter(|s| s.y == 4).collect();
        assert_eq!(upper.len(), 2);
        assert_eq!((upper[0].x_left, upper[0].x_right), (0.0, 3.0));
        assert_eq!((upper[1].x_left, upper[1].x_right), (6.0, 9.0));
    }

    #[test]
    fn test_gradient_endpoints() {
        let style = FillStyle::VerticalGradient {
            from: Color::rgb(0.0, 0.0, 0.0),
            to: Color::rgb(1.0, 1.0, 1.0),
        };
        assert_eq!(style.color_at(0, 0, 10), Color::rgb(0.0, 0.0, 0.0));

        let top = style.color_at(10, 0, 10);
        assert_abs_diff_eq!(top.r, 1.0);
        let mid = style.color_at(5, 0, 10);
        assert_abs_diff_eq!(mid.g, 0.5);
    }

    #[test]
    fn test_gradient_zero_extent_uses_fill_color() {
        let from = Color::rgb(0.2, 0.3, 0.4);
        let style = FillStyle::VerticalGradient { from, to: Color::WHITE };
        assert_eq!(style.color_at(5, 5, 5), from);
    }

    #[test]
    fn test_gradient_keeps_fill_alpha() {
        let style = FillStyle::VerticalGradient {
            from: Color::new(1.0, 0.0, 0.0, 0.5),
            to: Color::new(0.0, 0.0, 1.0, 1.0),
        };
        assert_abs_diff_eq!(style.color_at(8, 0, 10).a, 0.5);
    }

    #[test]
    fn test_fill_emits_colored_segments() {
        let mut list = DrawList::new();
        scan_line_fill(&mut list, &triangle(), FillStyle::Solid(Color::RED));

        assert_eq!(list.segments().count(), 10);
        assert!(list.colors().all(|c| c == Color::RED));
        let (from, to) = list.segments().next().expect("first span");
        assert_eq!(from, Point::new(0.0, 0.0));
        assert_eq!(to, Point::new(10.0, 0.0));
    }

    #[test]
    fn test_degenerate_sliver_fills_nothing() {
        let sliver = [Point::new(0.0, 4.0), Point::new(5.0, 4.0), Point::new(9.0, 4.2)];
        assert!(scan_spans(&sliver).is_empty());
    }

    #[test]
    fn test_active_edge_table_ops() {
        let mut aet = ActiveEdgeTable::new();
        aet.extend([
            Edge { x: 5.0, inv_slope: -1.0, ymax: 3 },
            Edge { x: 1.0, inv_slope: 1.0, ymax: 1 },
        ]);
        aet.sort();
        assert_eq!(aet.edges()[0].x, 1.0);

        aet.advance();
        assert_eq!(aet.edges()[0].x, 2.0);

        aet.retire(1);
        assert_eq!(aet.len(), 1);
        aet.retire(3);
        assert!(aet.is_empty());
    }
}
