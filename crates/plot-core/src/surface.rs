// File: crates/plot-core/src/surface.rs
// Summary: Raster backend boundary; the core emits geometry through this trait only.

use crate::types::{Color, LineStyle, MarkerShape};

/// Stroke settings for connecting lines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    pub style: LineStyle,
    /// Quality hint; backends may ignore it.
    pub anti_alias: bool,
}

/// Drawing primitives a raster backend must provide.
///
/// Points are pixel-space `(x, y)` pairs already mapped through a
/// [`crate::PlotDimensions`] snapshot. Backends own clipping to their bounds.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn clear(&mut self, color: Color);

    /// Draw a connected polyline through `points`. Fewer than two points draws nothing.
    fn draw_polyline(&mut self, points: &[(f32, f32)], stroke: &Stroke);

    /// Draw one marker per point. `MarkerShape::None` or non-positive size draws nothing.
    fn draw_markers(&mut self, points: &[(f32, f32)], shape: MarkerShape, size: f32, color: Color);

    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: Color);

    /// Fill a circular wedge. Angles in degrees, measured clockwise from 12 o'clock.
    fn fill_wedge(&mut self, cx: f32, cy: f32, radius: f32, start_deg: f32, sweep_deg: f32, color: Color);

    /// Draw a text label. Text shaping is backend-dependent; the default is a no-op.
    fn draw_text(&mut self, _x: f32, _y: f32, _text: &str, _size: f32, _color: Color) {}
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Polyline { points: Vec<(f32, f32)>, stroke: Stroke },
    Markers { points: Vec<(f32, f32)>, shape: MarkerShape, size: f32, color: Color },
    Rect { left: f32, top: f32, right: f32, bottom: f32, color: Color },
    Wedge { cx: f32, cy: f32, radius: f32, start_deg: f32, sweep_deg: f32, color: Color },
    Text { x: f32, y: f32, text: String, size: f32, color: Color },
}

/// Surface that records draw calls instead of rasterizing them.
/// Used by tests to assert emitted geometry without a pixel backend.
pub struct RecordingSurface {
    width: u32,
    height: u32,
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ops: Vec::new() }
    }

    /// Recorded polylines, in draw order.
    pub fn polylines(&self) -> Vec<&[(f32, f32)]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn draw_polyline(&mut self, points: &[(f32, f32)], stroke: &Stroke) {
        self.ops.push(DrawOp::Polyline { points: points.to_vec(), stroke: *stroke });
    }

    fn draw_markers(&mut self, points: &[(f32, f32)], shape: MarkerShape, size: f32, color: Color) {
        self.ops.push(DrawOp::Markers { points: points.to_vec(), shape, size, color });
    }

    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: Color) {
        self.ops.push(DrawOp::Rect { left, top, right, bottom, color });
    }

    fn fill_wedge(&mut self, cx: f32, cy: f32, radius: f32, start_deg: f32, sweep_deg: f32, color: Color) {
        self.ops.push(DrawOp::Wedge { cx, cy, radius, start_deg, sweep_deg, color });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, size: f32, color: Color) {
        self.ops.push(DrawOp::Text { x, y, text: text.to_string(), size, color });
    }
}
