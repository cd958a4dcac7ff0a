// File: crates/plot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::types::Insets;

/// Pixel-space rectangle with subpixel precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PixelRect {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot-area rectangle for a figure of the given pixel size with margins applied.
    pub fn from_figure(width: u32, height: u32, insets: &Insets) -> Self {
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: (width - insets.right.min(width)) as f32,
            bottom: (height - insets.bottom.min(height)) as f32,
        }
    }

    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}
