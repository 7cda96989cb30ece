//! The player character: physics, double jump and squash animation.

use super::entity::{Drawable, View};
use crate::color::Color;
use crate::config::PhysicsConfig;
use crate::geometry::{Point, Rect, Transform2D};
use crate::render::{draw_circle_midpoint, draw_line_bresenham, scan_line_fill, FillStyle};
use crate::surface::Surface;

/// Half the player's collision width.
pub const PLAYER_HALF_WIDTH: f32 = 12.0;
/// Half the player's collision height.
pub const PLAYER_HALF_HEIGHT: f32 = 18.0;
/// Where the player starts and respawns.
pub const SPAWN_POINT: Point = Point::new(100.0, 400.0);

const PLAYER_COLOR: Color = Color::rgb(0.8, 0.4, 0.4);
const GRADIENT_TOP: Color = Color::rgb(1.0, 0.6, 0.6);
const OUTLINE_COLOR: Color = Color::rgb(0.2, 0.1, 0.1);
const MOVING_THRESHOLD: f32 = 0.5;
const FACING_THRESHOLD: f32 = 0.1;

/// The controllable character.
///
/// Position is the centre of a 24×36 box in world space (y up).
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Centre x.
    pub x: f32,
    /// Centre y.
    pub y: f32,
    /// Horizontal velocity.
    pub vx: f32,
    /// Vertical velocity (positive is up).
    pub vy: f32,
    /// Velocity the player accelerates toward.
    pub target_vx: f32,
    /// Standing on a platform this frame.
    pub on_ground: bool,
    /// Standing on a platform at the start of the last tick.
    pub was_on_ground: bool,
    /// Jumps used since last touching ground.
    pub jump_count: u32,
    /// Horizontal squash factor; the vertical factor is `2 - squash`.
    pub squash: f32,
    /// Advances 0.1 per tick; drives idle and run animation.
    pub animation_timer: f32,
    /// Last horizontal direction of travel.
    pub facing_right: bool,
    /// Body color at the feet; the gradient lightens toward the head.
    pub color: Color,
    max_jumps: u32,
}

impl Player {
    /// Create a player at the spawn point.
    #[must_use]
    pub fn new(max_jumps: u32) -> Self {
        Self {
            x: SPAWN_POINT.x,
            y: SPAWN_POINT.y,
            vx: 0.0,
            vy: 0.0,
            target_vx: 0.0,
            on_ground: false,
            was_on_ground: false,
            jump_count: 0,
            squash: 1.0,
            animation_timer: 0.0,
            facing_right: true,
            color: PLAYER_COLOR,
            max_jumps,
        }
    }

    /// Jumps allowed between landings.
    #[must_use]
    pub const fn max_jumps(&self) -> u32 {
        self.max_jumps
    }

    /// Jumps still available.
    #[must_use]
    pub fn jumps_left(&self) -> u32 {
        self.max_jumps.saturating_sub(self.jump_count)
    }

    /// Return to spawn with zero velocity.
    pub fn reset(&mut self) {
        *self = Self::new(self.max_jumps);
    }

    /// Whether another jump is available.
    #[must_use]
    pub fn can_jump(&self) -> bool {
        self.jump_count < self.max_jumps
    }

    /// Jump if allowed. Returns whether the jump happened.
    pub fn jump(&mut self, physics: &PhysicsConfig) -> bool {
        if !self.can_jump() {
            return false;
        }
        self.vy = physics.jump_velocity;
        self.on_ground = false;
        self.jump_count += 1;
        self.squash = 0.8;
        true
    }

    /// Accelerate toward the left and face that way.
    pub fn move_left(&mut self, physics: &PhysicsConfig) {
        self.target_vx = -physics.player_speed;
        self.facing_right = false;
    }

    /// Accelerate toward the right and face that way.
    pub fn move_right(&mut self, physics: &PhysicsConfig) {
        self.target_vx = physics.player_speed;
        self.facing_right = true;
    }

    /// Decelerate to rest.
    pub fn stop_moving(&mut self) {
        self.target_vx = 0.0;
    }

    /// Advance one frame of physics and animation.
    pub fn tick(&mut self, physics: &PhysicsConfig) {
        self.was_on_ground = self.on_ground;
        self.animation_timer += 0.1;

        if self.on_ground {
            self.vx *= physics.ground_friction;
            self.jump_count = 0;
        } else {
            self.vy = (self.vy - physics.gravity).max(physics.max_fall_speed);
            self.vx *= physics.air_resistance;
        }

        self.vx += (self.target_vx - self.vx) * physics.acceleration;
        self.x += self.vx;
        self.y += self.vy;

        self.squash = if self.on_ground && self.vx.abs() > MOVING_THRESHOLD {
            1.0 + (self.animation_timer * 0.3).sin() * 0.1
        } else if !self.on_ground {
            (1.0 + self.vy * 0.02).clamp(0.7, 1.3)
        } else {
            1.0
        };

        if self.vx > FACING_THRESHOLD {
            self.facing_right = true;
        } else if self.vx < -FACING_THRESHOLD {
            self.facing_right = false;
        }
    }

    /// Collision box.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::centered(
            self.position(),
            PLAYER_HALF_WIDTH * 2.0,
            PLAYER_HALF_HEIGHT * 2.0,
        )
    }

    /// Body quad in screen space after squash.
    fn body(&self, view: &View) -> [Point; 4] {
        let screen = view.to_screen(self.position());
        let to_screen = Transform2D::identity()
            .translate(screen.x, screen.y)
            .scale(self.squash.abs(), 2.0 - self.squash);
        let (w, h) = (PLAYER_HALF_WIDTH, PLAYER_HALF_HEIGHT);
        [
            Point::new(-w, -h),
            Point::new(w, -h),
            Point::new(w, h),
            Point::new(-w, h),
        ]
        .map(|corner| to_screen.apply(corner))
    }
}

impl Drawable for Player {
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn color(&self) -> Color {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface, view: &View) {
        let body = self.body(view);
        scan_line_fill(
            surface,
            &body,
            FillStyle::VerticalGradient {
                from: self.color(),
                to: GRADIENT_TOP,
            },
        );
        draw_line_bresenham(surface, body[0], body[1], OUTLINE_COLOR, 2);

        let screen = view.to_screen(self.position());
        let blink = self.animation_timer.sin() * 0.5;
        let eye_y = (screen.y + 8.0 * (2.0 - self.squash) + blink).trunc();
        let pupil_shift = if self.vx > 0.0 {
            1.0
        } else if self.vx < 0.0 {
            -1.0
        } else {
            0.0
        };

        for side in [-6.0, 6.0] {
            let eye = Point::new(screen.x + side, eye_y);
            draw_circle_midpoint(surface, eye, 3, Color::WHITE, true);
            draw_circle_midpoint(
                surface,
                Point::new(eye.x + pupil_shift, eye.y),
                1,
                Color::BLACK,
                true,
            );
        }
    }
}
