//! Drawing surface abstraction.
//!
//! The rasterizers decide *which* points and segments to emit; a [`Surface`]
//! performs the actual pixel writes, in call order.

use crate::color::Color;
use crate::geometry::Point;

/// Immediate-mode target for the rasterizers.
pub trait Surface {
    /// Plot a point of `size` pixels at `at`. Fractional coordinates are
    /// rounded by the surface.
    fn plot(&mut self, at: Point, color: Color, size: f32);

    /// Draw a straight segment `width` pixels thick.
    fn segment(&mut self, from: Point, to: Point, color: Color, width: f32);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn plot(&mut self, at: Point, color: Color, size: f32) {
        (**self).plot(at, color, size);
    }

    fn segment(&mut self, from: Point, to: Point, color: Color, width: f32) {
        (**self).segment(from, to, color, width);
    }
}

/// A single recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A plotted point.
    Point {
        /// Position.
        at: Point,
        /// Color.
        color: Color,
        /// Point size in pixels.
        size: f32,
    },
    /// A drawn segment.
    Segment {
        /// Start.
        from: Point,
        /// End.
        to: Point,
        /// Color.
        color: Color,
        /// Width in pixels.
        width: f32,
    },
}

/// Surface that records every call instead of rasterizing it.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Positions of the plotted points, in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Point { at, .. } => Some(at),
            DrawCommand::Segment { .. } => None,
        })
    }

    /// Endpoints of the drawn segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|cmd| match *cmd {
            DrawCommand::Segment { from, to, .. } => Some((from, to)),
            DrawCommand::Point { .. } => None,
        })
    }

    /// Colors of every recorded command, in order.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.commands.iter().map(|cmd| match *cmd {
            DrawCommand::Point { color, .. } | DrawCommand::Segment { color, .. } => color,
        })
    }
}

impl Surface for DrawList {
    fn plot(&mut self, at: Point, color: Color, size: f32) {
        self.commands.push(DrawCommand::Point { at, color, size });
    }

    fn segment(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Segment {
            from,
            to,
            color,
            width,
        });
    }
}
