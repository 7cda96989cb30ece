//! Cohen–Sutherland line clipping against an axis-aligned window.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::geometry::{ClipRect, Line, Point};

/// Upper bound on clip passes; a rectangle needs at most two per endpoint.
const MAX_CLIP_PASSES: usize = 8;

/// Position of a point relative to the clip window's four half-planes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OutCode(u8);

impl OutCode {
    /// Inside the window.
    pub const INSIDE: Self = Self(0b0000);
    /// Left of `xmin`.
    pub const LEFT: Self = Self(0b0001);
    /// Right of `xmax`.
    pub const RIGHT: Self = Self(0b0010);
    /// Below `ymin`.
    pub const BOTTOM: Self = Self(0b0100);
    /// Above `ymax`.
    pub const TOP: Self = Self(0b1000);

    /// Raw 4-bit mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether no bit is set.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for OutCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for OutCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for OutCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for OutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OutCode({:04b})", self.0)
    }
}

/// Classify `p` against `rect`. LEFT/RIGHT and BOTTOM/TOP are mutually
/// exclusive; points on a boundary are inside.
#[must_use]
pub fn compute_out_code(p: Point, rect: &ClipRect) -> OutCode {
    let mut code = OutCode::INSIDE;

    if p.x < rect.xmin {
        code |= OutCode::LEFT;
    } else if p.x > rect.xmax {
        code |= OutCode::RIGHT;
    }

    if p.y < rect.ymin {
        code |= OutCode::BOTTOM;
    } else if p.y > rect.ymax {
        code |= OutCode::TOP;
    }

    code
}

/// Clip the segment `p1`–`p2` to `rect`.
///
/// Returns the visible part, or `None` when the segment lies entirely outside.
/// Outside endpoints are moved onto one boundary per pass, checked in the
/// order TOP, BOTTOM, RIGHT, LEFT, with `p1` handled before `p2`.
#[must_use]
pub fn cohen_sutherland_clip(p1: Point, p2: Point, rect: &ClipRect) -> Option<Line> {
    let mut a = p1;
    let mut b = p2;
    let mut code_a = compute_out_code(a, rect);
    let mut code_b = compute_out_code(b, rect);

    for _ in 0..MAX_CLIP_PASSES {
        if (code_a | code_b).is_inside() {
            return Some(Line::new(a, b));
        }
        if !(code_a & code_b).is_inside() {
            return None;
        }

        let out = if code_a.is_inside() { code_b } else { code_a };
        let Some(hit) = boundary_intersection(a, b, out, rect) else {
            log::trace!("clip: parallel boundary for {out:?}, rejecting");
            return None;
        };

        if out == code_a {
            a = hit;
            code_a = compute_out_code(a, rect);
        } else {
            b = hit;
            code_b = compute_out_code(b, rect);
        }
    }

    log::debug!("clip: no convergence after {MAX_CLIP_PASSES} passes");
    None
}

/// Intersect segment `a`–`b` with the single boundary flagged in `out`.
///
/// Returns `None` when the segment runs parallel to that boundary.
fn boundary_intersection(a: Point, b: Point, out: OutCode, rect: &ClipRect) -> Option<Point> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;

    if out.contains(OutCode::TOP) || out.contains(OutCode::BOTTOM) {
        if dy == 0.0 {
            return None;
        }
        let y = if out.contains(OutCode::TOP) { rect.ymax } else { rect.ymin };
        Some(Point::new(a.x + dx * (y - a.y) / dy, y))
    } else {
        if dx == 0.0 {
            return None;
        }
        let x = if out.contains(OutCode::RIGHT) { rect.xmax } else { rect.xmin };
        Some(Point::new(x, a.y + dy * (x - a.x) / dx))
    }
}
