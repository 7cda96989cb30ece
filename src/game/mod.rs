//! Side-scrolling platformer built on the rasterization primitives.
//!
//! Every entity implements [`Drawable`] and draws itself through a
//! [`Surface`](crate::surface::Surface), so the same frame can be rasterized
//! into a [`Framebuffer`](crate::framebuffer::Framebuffer) or recorded into a
//! [`DrawList`](crate::surface::DrawList).
//!
//! # Frame order
//!
//! Input is turned into a target velocity, then [`Game::update`] runs player
//! physics, platform motion and collisions, coin pickup, camera follow,
//! particles, coin animation and the renderer clock, in that order.
//! [`Game::render`] draws background, platforms, coins, particles and finally
//! the player.

mod collectible;
mod entity;
mod input;
mod particle;
mod platform;
mod player;
mod renderer;
mod world;

pub use collectible::{default_coins, Collectible};
pub use entity::{Drawable, View};
pub use input::{Heading, Input, Key};
pub use particle::{Particle, ParticleSystem};
pub use platform::{default_level, Oscillation, Platform};
pub use player::{Player, PLAYER_HALF_HEIGHT, PLAYER_HALF_WIDTH, SPAWN_POINT};
pub use renderer::{SceneRenderer, SKY_COLOR};
pub use world::Game;
