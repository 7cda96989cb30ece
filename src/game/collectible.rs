//! Spinning coins.

use super::entity::{Drawable, View};
use crate::color::Color;
use crate::config::AnimationConfig;
use crate::geometry::Point;
use crate::render::{draw_circle_midpoint, draw_line_dda};
use crate::surface::Surface;

const COIN_COLOR: Color = Color::rgb(1.0, 0.9, 0.0);
const COIN_SHINE: Color = Color::rgb(1.0, 1.0, 0.8);
const SPARKLE: Color = Color::new(1.0, 1.0, 1.0, 0.8);
const COIN_RADIUS: f32 = 12.0;
const BOB_AMPLITUDE: f32 = 5.0;
const SPARKLE_LENGTH: f32 = 8.0;

/// A coin worth points when the player touches it.
#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    /// Resting centre.
    pub position: Point,
    /// Spin phase.
    pub rotation: f32,
    /// Vertical bob phase.
    pub bob_offset: f32,
    /// Picked up and no longer drawn or updated.
    pub collected: bool,
}

impl Collectible {
    /// A coin at rest at `(x, y)`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
            rotation: 0.0,
            bob_offset: 0.0,
            collected: false,
        }
    }

    /// Advance spin and bob.
    pub fn tick(&mut self, animation: &AnimationConfig) {
        self.rotation += animation.coin_rotation_speed;
        self.bob_offset += animation.coin_bob_speed;
    }

    /// Centre including the bob.
    #[must_use]
    pub fn drawn_position(&self) -> Point {
        Point::new(
            self.position.x,
            self.position.y + self.bob_offset.sin() * BOB_AMPLITUDE,
        )
    }

    /// Pulsing radius in pixels.
    #[must_use]
    pub fn radius(&self) -> i32 {
        (COIN_RADIUS * (1.0 + 0.1 * (self.rotation * 2.0).sin())) as i32
    }

    /// The sparkle shows for the first half of every 2-unit spin period.
    #[must_use]
    pub fn sparkling(&self) -> bool {
        ((self.rotation * 10.0) as i32) % 20 < 10
    }
}

impl Drawable for Collectible {
    fn position(&self) -> Point {
        self.position
    }

    fn color(&self) -> Color {
        COIN_COLOR
    }

    fn draw(&self, surface: &mut dyn Surface, view: &View) {
        if self.collected {
            return;
        }
        let center = view.to_screen(self.drawn_position());
        if !view.in_horizontal_range(center.x, 50.0) {
            return;
        }

        let radius = self.radius();
        draw_circle_midpoint(surface, center, radius, COIN_COLOR, true);
        draw_circle_midpoint(surface, center, radius - 2, COIN_SHINE, true);

        if self.sparkling() {
            draw_line_dda(
                surface,
                Point::new(center.x - SPARKLE_LENGTH, center.y),
                Point::new(center.x + SPARKLE_LENGTH, center.y),
                SPARKLE,
            );
            draw_line_dda(
                surface,
                Point::new(center.x, center.y - SPARKLE_LENGTH),
                Point::new(center.x, center.y + SPARKLE_LENGTH),
                SPARKLE,
            );
        }
    }
}

/// Coin placements for the demo level.
#[must_use]
pub fn default_coins() -> Vec<Collectible> {
    [
        (300.0, 220.0),
        (500.0, 290.0),
        (250.0, 360.0),
        (650.0, 420.0),
        (150.0, 490.0),
        (900.0, 240.0),
        (1050.0, 360.0),
        (450.0, 540.0),
        (750.0, 490.0),
    ]
    .into_iter()
    .map(|(x, y)| Collectible::new(x, y))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ClipRect;
    use crate::surface::DrawList;
    use approx::assert_relative_eq;

    fn view() -> View {
        View {
            camera_x: 0.0,
            time: 0.0,
            viewport: ClipRect::new(0.0, 0.0, 1000.0, 700.0),
        }
    }

    #[test]
    fn test_default_coins() {
        let coins = default_coins();
        assert_eq!(coins.len(), 9);
        assert!(coins.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_tick_advances_phases() {
        let mut coin = Collectible::new(0.0, 0.0);
        coin.tick(&AnimationConfig::default());
        coin.tick(&AnimationConfig::default());

        assert_relative_eq!(coin.rotation, 0.16);
        assert_relative_eq!(coin.bob_offset, 0.2);
    }

    #[test]
    fn test_radius_and_sparkle() {
        let mut coin = Collectible::new(0.0, 0.0);
        assert_eq!(coin.radius(), 12);
        assert!(coin.sparkling());

        coin.rotation = 1.5;
        assert!(!coin.sparkling());

        coin.rotation = 2.05;
        assert!(coin.sparkling());
    }

    #[test]
    fn test_draw_fresh_coin() {
        let coin = Collectible::new(100.0, 100.0);
        let mut list = DrawList::new();
        coin.draw(&mut list, &view());

        // Outer r=12 (25 rows), inner r=10 (21 rows), two 17-sample sparkles.
        assert_eq!(list.segments().count(), 25 + 21);
        assert_eq!(list.points().count(), 17 * 2);
    }

    #[test]
    fn test_collected_or_offscreen_coin_draws_nothing() {
        let mut list = DrawList::new();

        let mut coin = Collectible::new(100.0, 100.0);
        coin.collected = true;
        coin.draw(&mut list, &view());

        Collectible::new(1200.0, 100.0).draw(&mut list, &view());
        assert!(list.is_empty());
    }
}
