//! Software RGBA framebuffer.
//!
//! The headless host surface the game renders into. Coordinates are logical:
//! x grows to the right and y grows *upward* from the bottom-left corner, the
//! same orientation as an orthographic `(0, W, 0, H)` projection. Rows are
//! stored bottom-up; [`Framebuffer::to_top_down_pixels`] flips them for image
//! encoders.

use crate::color::{Color, Rgba};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::BresenhamLine;
use crate::surface::Surface;

/// RGBA pixel buffer with alpha-blended writes.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels, bottom row first. Each pixel is 4 bytes: [R, G, B, A].
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new framebuffer cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_platformer::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(1000, 700).unwrap();
    /// assert_eq!(fb.width(), 1000);
    /// assert_eq!(fb.height(), 700);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Raw pixel data, bottom row first.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba().to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    /// Get the color at a logical pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let idx = self.pixel_index(x, y)?;
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Overwrite the color at a logical pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if let Some(idx) = self.pixel_index(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Blend a color over the pixel at a logical coordinate.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        let Some(idx) = self.pixel_index(x, y) else {
            return;
        };

        if color.a == u8::MAX {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
            return;
        }

        let src_a = f32::from(color.a) / 255.0;
        let dst_a = f32::from(self.pixels[idx + 3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        if out_a > 0.0 {
            let blend = |src: u8, dst: u8| -> u8 {
                let src_f = f32::from(src) / 255.0;
                let dst_f = f32::from(dst) / 255.0;
                let out = (src_f * src_a + dst_f * dst_a * (1.0 - src_a)) / out_a;
                (out * 255.0).round() as u8
            };

            self.pixels[idx] = blend(color.r, self.pixels[idx]);
            self.pixels[idx + 1] = blend(color.g, self.pixels[idx + 1]);
            self.pixels[idx + 2] = blend(color.b, self.pixels[idx + 2]);
            self.pixels[idx + 3] = (out_a * 255.0).round() as u8;
        }
    }

    /// Blend a horizontal run `x0..=x1` on row `y`, in either order.
    pub fn fill_span(&mut self, x0: i32, x1: i32, y: i32, color: Rgba) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let start = x0.min(x1).max(0);
        let end = x0.max(x1).min(self.width as i32 - 1);
        for x in start..=end {
            self.blend_pixel(x, y, color);
        }
    }

    /// Number of pixels equal to `color`.
    #[must_use]
    pub fn count_pixels(&self, color: Rgba) -> usize {
        let target = color.to_array();
        self.pixels.chunks_exact(4).filter(|px| *px == target).count()
    }

    /// Pixel data with the top row first, as image formats expect.
    #[must_use]
    pub fn to_top_down_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        self.pixels
            .chunks_exact(row_bytes)
            .rev()
            .flatten()
            .copied()
            .collect()
    }

    /// Calculate the byte index for a logical pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + x as usize) * 4)
    }

    /// Blend an `n`×`n` square centred on a grid position.
    fn stamp(&mut self, (px, py): (i32, i32), n: i32, color: Rgba) {
        let x0 = px - (n - 1) / 2;
        let y0 = py - (n - 1) / 2;
        for y in y0..y0 + n {
            for x in x0..x0 + n {
                self.blend_pixel(x, y, color);
            }
        }
    }
}

/// Pixel extent of a point or line width.
#[inline]
fn pixel_extent(size: f32) -> i32 {
    (size.round() as i32).max(1)
}

impl Surface for Framebuffer {
    fn plot(&mut self, at: Point, color: Color, size: f32) {
        self.stamp(at.to_grid(), pixel_extent(size), color.to_rgba());
    }

    fn segment(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let rgba = color.to_rgba();
        let n = pixel_extent(width);
        let a = from.to_grid();
        let b = to.to_grid();

        if a.1 == b.1 {
            let y0 = a.1 - (n - 1) / 2;
            for y in y0..y0 + n {
                self.fill_span(a.0, b.0, y, rgba);
            }
            return;
        }

        for pixel in BresenhamLine::new(a, b) {
            self.stamp(pixel, n, rgba);
        }
    }
}
