//! The game world: update order, collisions, pickups and camera.

use super::collectible::{default_coins, Collectible};
use super::entity::Drawable;
use super::input::{Heading, Input, Key};
use super::particle::ParticleSystem;
use super::platform::{default_level, Platform};
use super::player::{Player, PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH};
use super::renderer::SceneRenderer;
use crate::config::GameConfig;
use crate::surface::Surface;

/// Window below a platform top within which a falling player snaps onto it.
const LANDING_TOLERANCE: f32 = 10.0;
/// Window above a platform underside within which a rising player bonks.
const HEAD_TOLERANCE: f32 = 5.0;
/// Downward impact speed that kicks up landing dust.
const HARD_LANDING_SPEED: f32 = -5.0;

/// Game state and per-frame update.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    player: Player,
    platforms: Vec<Platform>,
    coins: Vec<Collectible>,
    particles: ParticleSystem,
    renderer: SceneRenderer,
    input: Input,
    camera_x: f32,
    score: u32,
    frame: u64,
    exit_requested: bool,
}

impl Game {
    /// Build the demo level. `seed` drives particle scatter.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let renderer = SceneRenderer::new(config.window.viewport());
        let player = Player::new(config.physics.max_jumps);
        log::info!(
            "level ready: {}x{} viewport, max {} jumps",
            config.window.width,
            config.window.height,
            config.physics.max_jumps
        );
        Self {
            config,
            player,
            platforms: default_level(),
            coins: default_coins(),
            particles: ParticleSystem::new(seed),
            renderer,
            input: Input::default(),
            camera_x: 0.0,
            score: 0,
            frame: 0,
            exit_requested: false,
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable player, for scripted scenarios.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Level platforms.
    #[must_use]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    /// Level coins, collected ones included.
    #[must_use]
    pub fn coins(&self) -> &[Collectible] {
        &self.coins
    }

    /// Live particles.
    #[must_use]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    /// Current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Camera left edge in world x.
    #[must_use]
    pub const fn camera_x(&self) -> f32 {
        self.camera_x
    }

    /// Frames simulated so far.
    #[must_use]
    pub const fn frame(&self) -> u64 {
        self.frame
    }

    /// Renderer clock.
    #[must_use]
    pub fn time(&self) -> f32 {
        self.renderer.time()
    }

    /// Whether Exit was pressed.
    #[must_use]
    pub const fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Handle a key press. Jumps fire on press; movement is held.
    pub fn handle_key_down(&mut self, key: Key) {
        match key {
            Key::Left | Key::Right => self.input.press(key),
            Key::Jump => {
                if self.player.jump(&self.config.physics) {
                    self.particles.spawn_jump(self.player.position());
                }
            }
            Key::Exit => {
                log::info!("exit requested at frame {}", self.frame);
                self.exit_requested = true;
            }
        }
    }

    /// Handle a key release.
    pub fn handle_key_up(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Turn held keys into the player's target velocity.
    pub fn process_input(&mut self) {
        let physics = &self.config.physics;
        match self.input.heading() {
            Heading::Left => self.player.move_left(physics),
            Heading::Right => self.player.move_right(physics),
            Heading::Idle => self.player.stop_moving(),
        }
    }

    /// Advance one frame.
    pub fn update(&mut self) {
        self.frame += 1;
        self.player.tick(&self.config.physics);
        self.resolve_collisions();
        self.collect_coins();
        self.follow_player();
        self.particles.tick();

        for coin in self.coins.iter_mut().filter(|c| !c.collected) {
            coin.tick(&self.config.animation);
        }
        self.renderer.advance(self.config.animation.time_step);

        if self.player.y < self.config.animation.reset_height {
            log::info!("player fell at x={:.1}; respawning", self.player.x);
            self.player.reset();
        }
    }

    /// Restart the level: player, platforms, coins, particles and score.
    pub fn reset_level(&mut self) {
        self.player.reset();
        self.platforms = default_level();
        self.coins = default_coins();
        self.particles.clear();
        self.camera_x = 0.0;
        self.score = 0;
        log::debug!("level reset");
    }

    /// Draw the frame: background, platforms, coins, particles, player.
    pub fn render(&self, surface: &mut dyn Surface) {
        let mut layers: Vec<&dyn Drawable> = Vec::with_capacity(
            self.platforms.len() + self.coins.len() + self.particles.len() + 1,
        );
        layers.extend(self.platforms.iter().map(|p| p as &dyn Drawable));
        layers.extend(self.coins.iter().map(|c| c as &dyn Drawable));
        layers.extend(self.particles.particles().iter().map(|p| p as &dyn Drawable));
        layers.push(&self.player);

        self.renderer.render(surface, self.camera_x, &layers);
    }

    /// Overlay text: score, jumps left, algorithms and controls.
    #[must_use]
    pub fn hud_lines(&self) -> Vec<String> {
        vec![
            format!("Score: {}", self.score),
            format!(
                "Jumps: {}/{}",
                self.player.jumps_left(),
                self.player.max_jumps()
            ),
            "Algorithms: DDA, Bresenham, Midpoint Circle, Scan Fill, 2D Transform, Clipping"
                .to_string(),
            "Controls: A/D-Move, W/Space-Jump (Double Jump!), ESC-Exit".to_string(),
        ]
    }

    /// Land on, bonk against or push out of every overlapping platform.
    ///
    /// Platforms advance before they are tested, so the player collides with
    /// this frame's positions.
    fn resolve_collisions(&mut self) {
        let player = &mut self.player;
        let was_on_ground = player.was_on_ground;
        player.on_ground = false;

        for platform in &mut self.platforms {
            platform.tick();
            let rect = platform.rect;
            if !player.bounds().intersects(&rect) {
                continue;
            }

            let feet = player.y - PLAYER_HALF_HEIGHT;
            let head = player.y + PLAYER_HALF_HEIGHT;

            if player.vy <= 0.0 && feet < rect.top() && player.y > rect.top() - LANDING_TOLERANCE
            {
                let impact = player.vy;
                player.y = rect.top() + PLAYER_HALF_HEIGHT;
                player.vy = 0.0;
                player.on_ground = true;

                if !was_on_ground && impact < HARD_LANDING_SPEED {
                    self.particles.spawn_landing(player.position());
                }
            } else if player.vy > 0.0 && head > rect.y && player.y < rect.y + HEAD_TOLERANCE {
                player.y = rect.y - PLAYER_HALF_HEIGHT;
                player.vy = 0.0;
            } else if feet < rect.top() && head > rect.y {
                player.x = if player.x < rect.x {
                    rect.x - PLAYER_HALF_WIDTH
                } else {
                    rect.right() + PLAYER_HALF_WIDTH
                };
                player.vx = 0.0;
            }
        }
    }

    fn collect_coins(&mut self) {
        let radius = self.config.animation.collect_radius;
        let player = self.player.position();

        for coin in self.coins.iter_mut().filter(|c| !c.collected) {
            if player.distance(coin.position) < radius {
                coin.collected = true;
                self.score += self.config.animation.coin_score;
                self.particles.spawn_collection(coin.position);
                log::info!(
                    "coin at ({}, {}) collected; score {}",
                    coin.position.x,
                    coin.position.y,
                    self.score
                );
            }
        }
    }

    fn follow_player(&mut self) {
        let half_width = self.config.window.width as f32 / 2.0;
        let target = (self.player.x - half_width).max(0.0);
        self.camera_x += (target - self.camera_x) * self.config.animation.camera_smoothing;
    }
}
