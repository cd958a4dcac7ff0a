// File: crates/plot-core/src/scatter.rs
// Summary: Discrete XY series rendered as a connected polyline and/or per-point markers.

use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::plottable::{AxisLimits, LegendItem};
use crate::surface::{Stroke, Surface};
use crate::types::{Color, LineStyle, MarkerShape};

/// Explicit coordinate-array series.
///
/// `xs` and `ys` are parallel and must be equal length (empty is valid).
/// Non-finite points break the connecting line: the runs on either side are
/// drawn, nothing is interpolated across the gap.
pub struct Scatter {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: Color,
    pub line_width: f32,
    pub line_style: LineStyle,
    pub marker_shape: MarkerShape,
    pub marker_size: f32,
    pub label: String,
    pub visible: bool,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
}

impl Scatter {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, color: Color) -> Self {
        Self {
            xs,
            ys,
            color,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            marker_shape: MarkerShape::FilledCircle,
            marker_size: 5.0,
            label: String::new(),
            visible: true,
            x_axis_index: 0,
            y_axis_index: 0,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn validate_data(&self) -> Result<(), PlotError> {
        if self.xs.len() != self.ys.len() {
            return Err(PlotError::LengthMismatch { xs: self.xs.len(), ys: self.ys.len() });
        }
        Ok(())
    }

    pub fn axis_limits(&self) -> AxisLimits {
        AxisLimits::from_points(self.xs.iter().zip(self.ys.iter()))
    }

    pub fn legend_items(&self) -> Vec<LegendItem> {
        if self.label.trim().is_empty() {
            return Vec::new();
        }
        vec![LegendItem {
            label: self.label.clone(),
            color: self.color,
            line_style: self.line_style,
            line_width: self.line_width,
            marker_shape: self.marker_shape,
        }]
    }

    pub fn render(
        &mut self,
        dims: &PlotDimensions,
        surface: &mut dyn Surface,
        low_quality: bool,
    ) -> Result<(), PlotError> {
        self.validate_data()?;

        let stroke = Stroke {
            color: self.color,
            width: self.line_width,
            style: self.line_style,
            anti_alias: !low_quality,
        };

        // Connect contiguous finite runs; a non-finite point ends the run.
        if self.line_width > 0.0 {
            let mut run: Vec<(f32, f32)> = Vec::new();
            for (&x, &y) in self.xs.iter().zip(self.ys.iter()) {
                if x.is_finite() && y.is_finite() {
                    run.push((dims.get_pixel_x(x), dims.get_pixel_y(y)));
                } else if !run.is_empty() {
                    surface.draw_polyline(&run, &stroke);
                    run.clear();
                }
            }
            if !run.is_empty() {
                surface.draw_polyline(&run, &stroke);
            }
        }

        if self.marker_size > 0.0 && self.marker_shape != MarkerShape::None {
            let points: Vec<(f32, f32)> = self
                .xs
                .iter()
                .zip(self.ys.iter())
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|(&x, &y)| (dims.get_pixel_x(x), dims.get_pixel_y(y)))
                .collect();
            surface.draw_markers(&points, self.marker_shape, self.marker_size, self.color);
        }

        Ok(())
    }
}
