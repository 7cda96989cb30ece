//! Game configuration.
//!
//! Supports YAML configuration with precedence: file > defaults.
//! Every field has a default, so a partial file only overrides what it names.

use crate::error::{Error, Result};
use crate::geometry::ClipRect;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Window (viewport) settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Viewport width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Viewport height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    1000
}
fn default_height() -> u32 {
    700
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowConfig {
    /// The full viewport as a clip window.
    #[must_use]
    pub fn viewport(&self) -> ClipRect {
        ClipRect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }
}

/// Player physics, in units per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration while airborne.
    #[serde(default = "default_gravity")]
    pub gravity: f32,

    /// Upward velocity applied by a jump.
    #[serde(default = "default_jump_velocity")]
    pub jump_velocity: f32,

    /// Horizontal target speed while a direction is held.
    #[serde(default = "default_player_speed")]
    pub player_speed: f32,

    /// Horizontal velocity factor per airborne frame.
    #[serde(default = "default_air_resistance")]
    pub air_resistance: f32,

    /// Horizontal velocity factor per grounded frame.
    #[serde(default = "default_ground_friction")]
    pub ground_friction: f32,

    /// Fraction of the gap to the target velocity closed per frame.
    #[serde(default = "default_acceleration")]
    pub acceleration: f32,

    /// Terminal (most negative) vertical velocity.
    #[serde(default = "default_max_fall_speed")]
    pub max_fall_speed: f32,

    /// Jumps available before touching ground again.
    #[serde(default = "default_max_jumps")]
    pub max_jumps: u32,
}

fn default_gravity() -> f32 {
    0.6
}
fn default_jump_velocity() -> f32 {
    16.0
}
fn default_player_speed() -> f32 {
    4.5
}
fn default_air_resistance() -> f32 {
    0.98
}
fn default_ground_friction() -> f32 {
    0.8
}
fn default_acceleration() -> f32 {
    0.8
}
fn default_max_fall_speed() -> f32 {
    -20.0
}
fn default_max_jumps() -> u32 {
    2
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: default_gravity(),
            jump_velocity: default_jump_velocity(),
            player_speed: default_player_speed(),
            air_resistance: default_air_resistance(),
            ground_friction: default_ground_friction(),
            acceleration: default_acceleration(),
            max_fall_speed: default_max_fall_speed(),
            max_jumps: default_max_jumps(),
        }
    }
}

/// Animation and gameplay tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Coin spin per frame.
    #[serde(default = "default_coin_rotation_speed")]
    pub coin_rotation_speed: f32,

    /// Coin bob phase per frame.
    #[serde(default = "default_coin_bob_speed")]
    pub coin_bob_speed: f32,

    /// Renderer clock advance per frame (drives clouds, sun, rays).
    #[serde(default = "default_time_step")]
    pub time_step: f32,

    /// Fraction of the gap to the camera target closed per frame.
    #[serde(default = "default_camera_smoothing")]
    pub camera_smoothing: f32,

    /// Pickup distance between player and coin centres.
    #[serde(default = "default_collect_radius")]
    pub collect_radius: f32,

    /// Points per coin.
    #[serde(default = "default_coin_score")]
    pub coin_score: u32,

    /// The player respawns after falling below this height.
    #[serde(default = "default_reset_height")]
    pub reset_height: f32,
}

fn default_coin_rotation_speed() -> f32 {
    0.08
}
fn default_coin_bob_speed() -> f32 {
    0.1
}
fn default_time_step() -> f32 {
    0.01
}
fn default_camera_smoothing() -> f32 {
    0.08
}
fn default_collect_radius() -> f32 {
    25.0
}
fn default_coin_score() -> u32 {
    100
}
fn default_reset_height() -> f32 {
    -100.0
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            coin_rotation_speed: default_coin_rotation_speed(),
            coin_bob_speed: default_coin_bob_speed(),
            time_step: default_time_step(),
            camera_smoothing: default_camera_smoothing(),
            collect_radius: default_collect_radius(),
            coin_score: default_coin_score(),
            reset_height: default_reset_height(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Viewport settings.
    #[serde(default)]
    pub window: WindowConfig,

    /// Player physics.
    #[serde(default)]
    pub physics: PhysicsConfig,

    /// Animation and gameplay tuning.
    #[serde(default)]
    pub animation: AnimationConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            window: WindowConfig::default(),
            physics: PhysicsConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl GameConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(err) => {
                log::debug!("using default configuration: {err}");
                Self::default()
            }
        }
    }

    /// Checks value ranges the simulation relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for an empty window and
    /// [`Error::ConfigInvalid`] for out-of-range physics values.
    pub fn validate(&self) -> Result<()> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.window.width,
                height: self.window.height,
            });
        }

        if self.physics.max_jumps == 0 {
            return Err(invalid("physics.max_jumps", "must be at least 1"));
        }

        let factors = [
            ("physics.air_resistance", self.physics.air_resistance),
            ("physics.ground_friction", self.physics.ground_friction),
            ("physics.acceleration", self.physics.acceleration),
            ("animation.camera_smoothing", self.animation.camera_smoothing),
        ];
        for (key, value) in factors {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(key, &format!("{value} is outside [0, 1]")));
            }
        }

        if self.physics.max_fall_speed > 0.0 {
            return Err(invalid("physics.max_fall_speed", "must not be positive"));
        }

        Ok(())
    }
}

fn invalid(key: &str, message: &str) -> Error {
    Error::ConfigInvalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}
