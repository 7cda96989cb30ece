//! Static and oscillating platforms.

use super::entity::{Drawable, View};
use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::render::{cohen_sutherland_clip, draw_line_dda, scan_line_fill, FillStyle};
use crate::surface::Surface;

const GROUND: Color = Color::rgb(0.2, 0.7, 0.2);
const WOOD: Color = Color::rgb(0.8, 0.5, 0.2);
const CRYSTAL: Color = Color::rgb(0.6, 0.3, 0.8);
const OUTLINE: Color = Color::rgb(0.1, 0.1, 0.1);

/// Horizontal oscillation `x = origin + sin(phase) * range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillation {
    /// Phase advance per tick.
    pub speed: f32,
    /// Peak displacement from the origin.
    pub range: f32,
    /// Current phase.
    pub phase: f32,
}

/// A solid rectangle the player can stand on.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    /// Current bounds; `y` is the underside, `top()` the walking surface.
    pub rect: Rect,
    /// Base fill color.
    pub color: Color,
    origin_x: f32,
    motion: Option<Oscillation>,
}

impl Platform {
    /// A platform that never moves.
    #[must_use]
    pub fn fixed(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            color,
            origin_x: x,
            motion: None,
        }
    }

    /// A platform swinging horizontally around `x`. Each platform keeps its
    /// own phase.
    #[must_use]
    pub fn oscillating(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        speed: f32,
        range: f32,
    ) -> Self {
        Self {
            motion: Some(Oscillation {
                speed,
                range,
                phase: 0.0,
            }),
            ..Self::fixed(x, y, width, height, color)
        }
    }

    /// Whether this platform moves.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    /// Resting x position.
    #[must_use]
    pub fn origin_x(&self) -> f32 {
        self.origin_x
    }

    /// Advance the oscillation by one tick.
    pub fn tick(&mut self) {
        if let Some(motion) = self.motion.as_mut() {
            motion.phase += motion.speed;
            self.rect.x = self.origin_x + motion.phase.sin() * motion.range;
        }
    }
}

impl Drawable for Platform {
    fn position(&self) -> Point {
        Point::new(self.rect.x, self.rect.y)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface, view: &View) {
        let screen = view.to_screen(self.position());
        let right = screen.x + self.rect.width;
        let top = screen.y + self.rect.height;

        // Cull against the viewport widened by 50 px horizontally.
        let window = view.viewport.widen(50.0);
        if cohen_sutherland_clip(screen, Point::new(right, top), &window).is_none() {
            return;
        }

        let quad = Rect::new(screen.x, screen.y, self.rect.width, self.rect.height).corners();
        scan_line_fill(
            surface,
            &quad,
            FillStyle::VerticalGradient {
                from: self.color,
                to: self.color.lighten(0.3),
            },
        );
        draw_line_dda(surface, quad[0], quad[1], OUTLINE);
        draw_line_dda(surface, quad[1], quad[2], OUTLINE);
    }
}

/// The demo level: three ground slabs, seven wooden ledges (three of them
/// moving) and two high crystal ledges.
#[must_use]
pub fn default_level() -> Vec<Platform> {
    vec![
        Platform::fixed(0.0, 50.0, 400.0, 25.0, GROUND),
        Platform::fixed(450.0, 50.0, 300.0, 25.0, GROUND),
        Platform::fixed(800.0, 50.0, 400.0, 25.0, GROUND),
        Platform::fixed(250.0, 180.0, 120.0, 18.0, WOOD),
        Platform::oscillating(450.0, 250.0, 100.0, 18.0, WOOD, 0.02, 50.0),
        Platform::fixed(200.0, 320.0, 90.0, 18.0, WOOD),
        Platform::oscillating(600.0, 380.0, 130.0, 18.0, WOOD, 0.03, 80.0),
        Platform::fixed(100.0, 450.0, 80.0, 18.0, WOOD),
        Platform::fixed(850.0, 200.0, 100.0, 18.0, WOOD),
        Platform::oscillating(1000.0, 320.0, 120.0, 18.0, WOOD, 0.025, 60.0),
        Platform::fixed(400.0, 500.0, 100.0, 18.0, CRYSTAL),
        Platform::fixed(700.0, 450.0, 90.0, 18.0, CRYSTAL),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ClipRect;
    use crate::surface::DrawList;
    use approx::assert_relative_eq;

    fn view(camera_x: f32) -> View {
        View {
            camera_x,
            time: 0.0,
            viewport: ClipRect::new(0.0, 0.0, 1000.0, 700.0),
        }
    }

    #[test]
    fn test_default_level() {
        let level = default_level();
        assert_eq!(level.len(), 12);
        assert_eq!(level.iter().filter(|p| p.is_moving()).count(), 3);
    }

    #[test]
    fn test_fixed_platform_does_not_move() {
        let mut platform = Platform::fixed(10.0, 20.0, 30.0, 5.0, WOOD);
        platform.tick();
        assert_eq!(platform.rect.x, 10.0);
    }

    #[test]
    fn test_oscillation_phases_are_independent() {
        let mut a = Platform::oscillating(100.0, 0.0, 50.0, 10.0, WOOD, 0.5, 10.0);
        let mut b = Platform::oscillating(300.0, 0.0, 50.0, 10.0, WOOD, 0.5, 10.0);

        a.tick();
        a.tick();
        b.tick();

        assert_relative_eq!(a.rect.x, 100.0 + 1.0_f32.sin() * 10.0);
        assert_relative_eq!(b.rect.x, 300.0 + 0.5_f32.sin() * 10.0);
        assert_eq!(b.origin_x(), 300.0);
    }

    #[test]
    fn test_draw_visible_platform() {
        let platform = Platform::fixed(0.0, 50.0, 100.0, 20.0, GROUND);
        let mut list = DrawList::new();
        platform.draw(&mut list, &view(0.0));

        // 20 gradient rows plus two DDA outlines of 101 and 21 points.
        assert_eq!(list.segments().count(), 20);
        assert_eq!(list.points().count(), 101 + 21);
        assert!(list.colors().any(|c| c == OUTLINE));
    }

    #[test]
    fn test_draw_culls_offscreen_platform() {
        let platform = Platform::fixed(2000.0, 50.0, 100.0, 20.0, GROUND);
        let mut list = DrawList::new();
        platform.draw(&mut list, &view(0.0));
        assert!(list.is_empty());

        // Partially inside the widened window still draws.
        let platform = Platform::fixed(-120.0, 50.0, 100.0, 20.0, GROUND);
        platform.draw(&mut list, &view(0.0));
        assert!(!list.is_empty());
    }
}
