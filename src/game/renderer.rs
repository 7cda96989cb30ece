//! Scene composition: parallax background, then entity layers.

use super::entity::{Drawable, View};
use crate::color::Color;
use crate::geometry::{ClipRect, Point};
use crate::render::{draw_circle_midpoint, draw_line_dda, scan_line_fill, FillStyle};
use crate::surface::Surface;

/// Clear color for the sky.
pub const SKY_COLOR: Color = Color::rgb(0.6, 0.8, 1.0);

const CLOUD_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.8);
const SUN_COLOR: Color = Color::rgb(1.0, 0.9, 0.3);
const SUN_RAY: Color = Color::new(1.0, 1.0, 0.7, 0.6);
const MOUNTAIN_COLOR: Color = Color::new(0.4, 0.3, 0.6, 0.7);

/// `(x, y, parallax factor)` for each cloud.
const CLOUDS: [(f32, f32, f32); 5] = [
    (150.0, 550.0, 0.3),
    (400.0, 520.0, 0.4),
    (700.0, 580.0, 0.25),
    (950.0, 540.0, 0.35),
    (1200.0, 560.0, 0.3),
];

/// Puffs per cloud as `(x offset, radius)`.
const CLOUD_PUFFS: [(f32, i32); 3] = [(0.0, 20), (25.0, 18), (-20.0, 15)];

const SUN_ANCHOR: Point = Point::new(800.0, 600.0);
const SUN_RADIUS: i32 = 30;
const SUN_RAY_COUNT: usize = 8;

const MOUNTAIN_PARALLAX: f32 = 0.2;
const MOUNTAIN_RIDGE: [Point; 4] = [
    Point::new(-100.0, 100.0),
    Point::new(200.0, 300.0),
    Point::new(400.0, 200.0),
    Point::new(600.0, 100.0),
];

/// Draws a frame from the background outward.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneRenderer {
    viewport: ClipRect,
    time: f32,
}

impl SceneRenderer {
    /// Create a renderer for a viewport with its clock at zero.
    #[must_use]
    pub fn new(viewport: ClipRect) -> Self {
        Self {
            viewport,
            time: 0.0,
        }
    }

    /// Renderer clock.
    #[must_use]
    pub const fn time(&self) -> f32 {
        self.time
    }

    /// Advance the clock.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    /// Camera and clock snapshot for draw hooks.
    #[must_use]
    pub fn view(&self, camera_x: f32) -> View {
        View {
            camera_x,
            time: self.time,
            viewport: self.viewport,
        }
    }

    /// Draw the background followed by each layer in order.
    pub fn render(&self, surface: &mut dyn Surface, camera_x: f32, layers: &[&dyn Drawable]) {
        let view = self.view(camera_x);
        self.draw_background(surface, &view);
        for drawable in layers {
            drawable.draw(surface, &view);
        }
    }

    /// Clouds, sun and mountain with parallax against the camera.
    pub fn draw_background(&self, surface: &mut dyn Surface, view: &View) {
        self.draw_clouds(surface, view);
        self.draw_sun(surface, view);
        self.draw_mountain(surface, view);
    }

    fn draw_clouds(&self, surface: &mut dyn Surface, view: &View) {
        let t = self.time;
        for (i, &(x, y, parallax)) in CLOUDS.iter().enumerate() {
            let phase = t + i as f32;
            let cx = x - view.camera_x * parallax + phase.sin() * 10.0;
            let cy = y + (t * 0.5 + i as f32).cos() * 3.0;

            if !view.in_horizontal_range(cx, 100.0) {
                continue;
            }
            for (dx, radius) in CLOUD_PUFFS {
                draw_circle_midpoint(surface, Point::new(cx + dx, cy), radius, CLOUD_COLOR, true);
            }
        }
    }

    fn draw_sun(&self, surface: &mut dyn Surface, view: &View) {
        let t = self.time;
        let sun = Point::new(
            SUN_ANCHOR.x - view.camera_x * 0.1,
            SUN_ANCHOR.y + t.sin() * 5.0,
        );
        draw_circle_midpoint(surface, sun, SUN_RADIUS, SUN_COLOR, true);

        for i in 0..SUN_RAY_COUNT {
            let angle = i as f32 * 0.785 + t;
            let length = 15.0 + (t * 2.0 + i as f32).sin() * 3.0;
            let (sin, cos) = angle.sin_cos();
            let inner = 35.0;
            let outer = inner + length;
            draw_line_dda(
                surface,
                Point::new(sun.x + cos * inner, sun.y + sin * inner),
                Point::new(sun.x + cos * outer, sun.y + sin * outer),
                SUN_RAY,
            );
        }
    }

    fn draw_mountain(&self, surface: &mut dyn Surface, view: &View) {
        let shift = view.camera_x * MOUNTAIN_PARALLAX;
        let ridge = MOUNTAIN_RIDGE.map(|p| Point::new(p.x - shift, p.y));
        scan_line_fill(surface, &ridge, FillStyle::Solid(MOUNTAIN_COLOR));
    }
}
