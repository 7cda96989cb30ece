//! Short-lived particle bursts for jumps, landings and pickups.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::entity::{Drawable, View};
use crate::color::Color;
use crate::geometry::Point;
use crate::surface::Surface;

const PARTICLE_GRAVITY: f32 = 0.2;
const PARTICLE_DRAG: f32 = 0.99;
const PARTICLE_SIZE: f32 = 3.0;

const JUMP_DUST: Color = Color::new(0.8, 0.8, 1.0, 0.8);
const LANDING_DIRT: Color = Color::new(0.6, 0.4, 0.2, 0.9);
const COIN_SPARK: Color = Color::rgb(1.0, 1.0, 0.0);

/// A single fading particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// World position.
    pub position: Point,
    /// Velocity per tick.
    pub velocity: Point,
    /// Current color; alpha tracks remaining life.
    pub color: Color,
    /// Ticks left.
    pub life: f32,
    /// Ticks at spawn.
    pub max_life: f32,
}

impl Particle {
    /// Spawn a particle with `life` ticks to live.
    #[must_use]
    pub const fn new(position: Point, velocity: Point, color: Color, life: f32) -> Self {
        Self {
            position,
            velocity,
            color,
            life,
            max_life: life,
        }
    }

    /// Move, apply gravity and drag, and fade.
    pub fn tick(&mut self) {
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.velocity.y -= PARTICLE_GRAVITY;
        self.velocity.x *= PARTICLE_DRAG;
        self.life -= 1.0;
        self.color.a = if self.max_life > 0.0 {
            self.life / self.max_life
        } else {
            0.0
        };
    }

    /// Whether the particle has expired.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

impl Drawable for Particle {
    fn position(&self) -> Point {
        self.position
    }

    fn color(&self) -> Color {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface, view: &View) {
        let screen = view.to_screen(self.position);
        if view.in_horizontal_range(screen.x, 10.0) {
            surface.plot(screen, self.color, PARTICLE_SIZE);
        }
    }
}

/// Owns live particles and the seeded generator that scatters new ones.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    /// Create an empty system with a deterministic generator.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Live particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particles are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Add one particle.
    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Eight puffs fanned around the player's feet.
    pub fn spawn_jump(&mut self, at: Point) {
        for i in 0..8 {
            let angle = i as f32 * 0.785;
            let speed = 2.0 + self.rng.gen_range(0..100) as f32 / 50.0;
            let origin = Point::new(
                at.x + self.rng.gen_range(-10..10) as f32,
                at.y - 15.0,
            );
            let life = (30 + self.rng.gen_range(0..20)) as f32;
            self.spawn(Particle::new(
                origin,
                Point::new(angle.cos() * speed, angle.sin() * speed),
                JUMP_DUST,
                life,
            ));
        }
    }

    /// Twelve dirt chunks kicked up by a hard landing.
    pub fn spawn_landing(&mut self, at: Point) {
        for _ in 0..12 {
            let velocity = Point::new(
                self.rng.gen_range(-100..100) as f32 / 20.0,
                self.rng.gen_range(0..100) as f32 / 10.0,
            );
            let origin = Point::new(
                at.x + self.rng.gen_range(-20..20) as f32,
                at.y - 15.0,
            );
            let life = (40 + self.rng.gen_range(0..30)) as f32;
            self.spawn(Particle::new(origin, velocity, LANDING_DIRT, life));
        }
    }

    /// Fifteen sparks radiating from a collected coin.
    pub fn spawn_collection(&mut self, at: Point) {
        for i in 0..15 {
            let angle = i as f32 * 0.419;
            let speed = 3.0 + self.rng.gen_range(0..100) as f32 / 50.0;
            let life = (50 + self.rng.gen_range(0..30)) as f32;
            self.spawn(Particle::new(
                at,
                Point::new(angle.cos() * speed, angle.sin() * speed),
                COIN_SPARK,
                life,
            ));
        }
    }

    /// Advance every particle and drop the expired ones.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.tick();
        }
        self.particles.retain(|p| !p.is_dead());
    }

    /// Remove all particles.
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_particle_tick() {
        let mut particle = Particle::new(
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Color::RED,
            4.0,
        );
        particle.tick();

        assert_eq!(particle.position, Point::new(1.0, 2.0));
        assert_relative_eq!(particle.velocity.y, 1.8);
        assert_relative_eq!(particle.velocity.x, 0.99);
        assert_relative_eq!(particle.color.a, 0.75);
        assert!(!particle.is_dead());
    }

    #[test]
    fn test_burst_sizes_and_ranges() {
        let mut system = ParticleSystem::new(7);
        let at = Point::new(200.0, 100.0);

        system.spawn_jump(at);
        assert_eq!(system.len(), 8);
        for p in system.particles() {
            assert!((190.0..210.0).contains(&p.position.x));
            assert_eq!(p.position.y, 85.0);
            assert!((30.0..50.0).contains(&p.life));
        }

        system.clear();
        system.spawn_landing(at);
        assert_eq!(system.len(), 12);
        for p in system.particles() {
            assert!((-5.0..5.0).contains(&p.velocity.x));
            assert!((0.0..10.0).contains(&p.velocity.y));
            assert!((40.0..70.0).contains(&p.life));
        }

        system.clear();
        system.spawn_collection(at);
        assert_eq!(system.len(), 15);
        assert!(system.particles().iter().all(|p| p.position == at));
    }

    #[test]
    fn test_particles_expire() {
        let mut system = ParticleSystem::new(1);
        system.spawn_collection(Point::ORIGIN);

        for _ in 0..80 {
            system.tick();
        }
        assert!(system.is_empty());
    }

    #[test]
    fn test_same_seed_same_burst() {
        let mut a = ParticleSystem::new(42);
        let mut b = ParticleSystem::new(42);
        a.spawn_landing(Point::ORIGIN);
        b.spawn_landing(Point::ORIGIN);
        assert_eq!(a.particles(), b.particles());
    }
}
