//! The drawing capability shared by every game entity.

use crate::color::Color;
use crate::geometry::{ClipRect, Point};
use crate::surface::Surface;

/// Per-frame camera and clock state handed to every draw hook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    /// World x at the left edge of the viewport.
    pub camera_x: f32,
    /// Renderer clock driving ambient animation.
    pub time: f32,
    /// Screen-space viewport.
    pub viewport: ClipRect,
}

impl View {
    /// Map a world position to screen space (horizontal scroll only).
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(world.x - self.camera_x, world.y)
    }

    /// Whether a screen x lies within the viewport widened by `margin`.
    #[must_use]
    pub fn in_horizontal_range(&self, screen_x: f32, margin: f32) -> bool {
        screen_x > self.viewport.xmin - margin && screen_x < self.viewport.xmax + margin
    }
}

/// Something with a position and color that can draw itself from the
/// rasterization primitives.
pub trait Drawable {
    /// World-space anchor position.
    fn position(&self) -> Point;

    /// Base color.
    fn color(&self) -> Color;

    /// Emit this entity's primitives for the current view.
    fn draw(&self, surface: &mut dyn Surface, view: &View);
}
