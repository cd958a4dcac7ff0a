// File: crates/plot-core/src/signal.rs
// Summary: Evenly spaced Y series; X positions are derived from a sample period.

use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::plottable::{AxisLimits, LegendItem};
use crate::surface::{Stroke, Surface};
use crate::types::{Color, LineStyle, MarkerShape};

/// Signal series: `x_i = x_offset + i * period`.
pub struct Signal {
    pub ys: Vec<f64>,
    /// Horizontal spacing between consecutive samples, in data units. Must be positive.
    pub period: f64,
    pub x_offset: f64,
    pub color: Color,
    pub line_width: f32,
    pub line_style: LineStyle,
    pub label: String,
    pub visible: bool,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
}

impl Signal {
    pub fn new(ys: Vec<f64>, period: f64, color: Color) -> Self {
        Self {
            ys,
            period,
            x_offset: 0.0,
            color,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            label: String::new(),
            visible: true,
            x_axis_index: 0,
            y_axis_index: 0,
        }
    }

    #[inline]
    fn x_at(&self, index: usize) -> f64 {
        self.x_offset + index as f64 * self.period
    }

    pub fn validate_data(&self) -> Result<(), PlotError> {
        if !(self.period > 0.0) {
            return Err(PlotError::NonPositivePeriod(self.period));
        }
        Ok(())
    }

    pub fn axis_limits(&self) -> AxisLimits {
        let mut limits = AxisLimits::none();
        for (i, &y) in self.ys.iter().enumerate() {
            if !y.is_finite() {
                continue;
            }
            let x = self.x_at(i);
            limits.expand(&AxisLimits::new(x, x, y, y));
        }
        limits
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
            marker_shape: MarkerShape::None,
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

        let mut run: Vec<(f32, f32)> = Vec::with_capacity(self.ys.len());
        for (i, &y) in self.ys.iter().enumerate() {
            if y.is_finite() {
                run.push((dims.get_pixel_x(self.x_at(i)), dims.get_pixel_y(y)));
            } else if !run.is_empty() {
                surface.draw_polyline(&run, &stroke);
                run.clear();
            }
        }
        if !run.is_empty() {
            surface.draw_polyline(&run, &stroke);
        }

        Ok(())
    }
}
