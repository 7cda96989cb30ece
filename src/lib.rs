//! # Pixel-Platformer
//!
//! Software rasterization of classic 2D primitives, and a side-scrolling
//! platformer that renders exclusively through them.
//!
//! ## Features
//!
//! - **Lines**: DDA sampling and integer Bresenham (plus the midpoint form)
//! - **Circles**: Midpoint circle, stroked or filled
//! - **Polygons**: Scan-line fill with an edge table and active edge table,
//!   solid or with a vertical gradient
//! - **Clipping**: Cohen–Sutherland line clipping against a window
//! - **Game**: Player physics with double jump, moving platforms, coins,
//!   particles and a parallax background, rendered headlessly to PNG
//!
//! ## Quick Start
//!
//! ```rust
//! use pixel_platformer::prelude::*;
//!
//! let mut fb = Framebuffer::new(100, 100)?;
//! draw_line_bresenham(&mut fb, Point::new(0.0, 0.0), Point::new(99.0, 40.0), Color::RED, 1);
//! draw_circle_midpoint(&mut fb, Point::new(50.0, 50.0), 20, Color::BLUE, true);
//!
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert_eq!(&png[1..4], b"PNG");
//! # Ok::<(), pixel_platformer::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): the `platformer` binary and [`logging`] setup
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal* 4(1).
//! - Foley, J. D., van Dam, A., Feiner, S. K., & Hughes, J. F. (1990).
//!   *Computer Graphics: Principles and Practice*. Addison-Wesley.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and conversions.
pub mod color;

/// Software framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives and 2D transforms.
pub mod geometry;

/// The drawing surface the rasterizers emit into.
pub mod surface;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization and clipping algorithms.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Game
// ============================================================================

/// The platformer built on the rasterizers.
pub mod game;

// ============================================================================
// Configuration, Errors and Logging
// ============================================================================

/// YAML game configuration.
pub mod config;

/// Error types for rendering, encoding and configuration.
pub mod error;

/// Logger initialization for binaries.
#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod logging;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use pixel_platformer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Color, Rgba};
    pub use crate::config::GameConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::game::{Drawable, Game, Key, View};
    pub use crate::geometry::{ClipRect, Line, Point, Rect, Transform2D};
    pub use crate::output::PngEncoder;
    pub use crate::render::{
        cohen_sutherland_clip, draw_circle_midpoint, draw_line_bresenham, draw_line_dda,
        scan_line_fill, FillStyle,
    };
    pub use crate::surface::{DrawList, Surface};
}
