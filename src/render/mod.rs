//! Rasterization algorithms.
//!
//! Every routine is synchronous and pure apart from its writes to the
//! [`Surface`](crate::surface::Surface) it is given. Degenerate input draws
//! nothing rather than failing.
//!
//! # Algorithms
//!
//! - **DDA Line**: uniform floating-point steps along the dominant axis
//! - **Bresenham's Line**: integer error-term line drawing (plus the
//!   slope-aware decision-variable form)
//! - **Midpoint Circle**: stroked (8-way symmetric) and filled circles
//! - **Scan-line Fill**: edge table / active edge table polygon fill with an
//!   optional vertical gradient
//! - **Cohen–Sutherland**: outcode-based line clipping against a rectangle
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Cohen, D. & Sutherland, I. (1967). Line clipping, in Newman & Sproull,
//!   *Principles of Interactive Computer Graphics*.

pub mod circle;
pub mod clip;
pub mod line;
pub mod scanfill;

pub use circle::{draw_circle_midpoint, octant_points, MidpointCircle, CIRCLE_POINT_SIZE};
pub use clip::{cohen_sutherland_clip, compute_out_code, OutCode};
pub use line::{
    draw_line_bresenham, draw_line_dda, BresenhamLine, DdaLine, MidpointLine, DDA_POINT_SIZE,
};
pub use scanfill::{
    scan_line_fill, scan_spans, ActiveEdgeTable, Edge, EdgeTable, FillStyle, Span,
};
