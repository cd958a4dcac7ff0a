// File: crates/plot-core/src/function.rs
// Summary: Continuous function sampled at one-pixel cadence into a discrete curve.

use tracing::trace;

use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::plottable::LegendItem;
use crate::scatter::Scatter;
use crate::surface::Surface;
use crate::types::{Color, LineStyle, MarkerShape};

/// Y as a function of X, or `None` where the function is undefined.
pub type PlotFn = Box<dyn Fn(f64) -> Option<f64>>;

/// A curve displayed by evaluating a function across the visible window.
///
/// Sampling density is tied to rendering resolution: one sample per horizontal
/// pixel of the sampled interval, so zooming in increases fidelity and zooming
/// out reduces sampling cost proportionally.
///
/// Undefined (`None`) and non-finite samples are dropped and break the curve;
/// the sub-curves on either side of a gap are never connected across it.
pub struct FunctionPlot {
    /// The function to evaluate. Validation fails while this is `None`.
    pub function: Option<PlotFn>,
    /// Domain restriction. Infinite bounds fall back to the visible window of
    /// the coordinate snapshot, so an unrestricted function follows pan/zoom.
    pub x_min: f64,
    pub x_max: f64,
    pub color: Color,
    pub line_width: f32,
    pub line_style: LineStyle,
    pub label: String,
    pub visible: bool,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
    point_count: usize,
}

impl FunctionPlot {
    pub fn new(function: impl Fn(f64) -> Option<f64> + 'static) -> Self {
        Self {
            function: Some(Box::new(function)),
            x_min: f64::NEG_INFINITY,
            x_max: f64::INFINITY,
            color: Color::BLACK,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            label: String::new(),
            visible: true,
            x_axis_index: 0,
            y_axis_index: 0,
            point_count: 0,
        }
    }

    /// Construct without a function; validation fails until one is assigned.
    pub fn empty() -> Self {
        Self {
            function: None,
            x_min: f64::NEG_INFINITY,
            x_max: f64::INFINITY,
            color: Color::BLACK,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            label: String::new(),
            visible: true,
            x_axis_index: 0,
            y_axis_index: 0,
            point_count: 0,
        }
    }

    /// Restrict sampling to `[x_min, x_max]` instead of the visible window.
    pub fn with_domain(mut self, x_min: f64, x_max: f64) -> Self {
        self.x_min = x_min;
        self.x_max = x_max;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Number of samples attempted during the last render pass.
    /// Diagnostic only; includes samples that were later dropped.
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    pub fn validate_data(&self) -> Result<(), PlotError> {
        if self.function.is_none() {
            return Err(PlotError::MissingFunction);
        }
        Ok(())
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
        let function = self.function.as_ref().ok_or(PlotError::MissingFunction)?;

        let x_start = if self.x_min.is_finite() { self.x_min } else { dims.x_min };
        let x_end = if self.x_max.is_finite() { self.x_max } else { dims.x_max };
        let width = x_end - x_start;

        // One sample per horizontal pixel; a zero-width interval still yields one.
        self.point_count = (width * dims.px_per_unit_x) as usize + 1;

        // Contiguous segments of kept samples. A dropped sample ends the
        // current segment so the curve gets a gap instead of a bridge.
        let mut segments: Vec<(Vec<f64>, Vec<f64>)> = Vec::new();
        let mut xs: Vec<f64> = Vec::new();
        let mut ys: Vec<f64> = Vec::new();

        for column_index in 0..self.point_count {
            let x = column_index as f64 * dims.units_per_px_x + x_start;
            match function(x) {
                None => {
                    trace!(x, "sample dropped: function undefined");
                    if !xs.is_empty() {
                        segments.push((std::mem::take(&mut xs), std::mem::take(&mut ys)));
                    }
                }
                Some(y) if !y.is_finite() => {
                    trace!(x, y, "sample dropped: not a finite real number");
                    if !xs.is_empty() {
                        segments.push((std::mem::take(&mut xs), std::mem::take(&mut ys)));
                    }
                }
                Some(y) => {
                    xs.push(x);
                    ys.push(y);
                }
            }
        }
        if !xs.is_empty() {
            segments.push((xs, ys));
        }

        // Delegate drawing to a temporary scatter per segment: curve only,
        // no marker per sample (samples are rendering artifacts, not data).
        for (seg_xs, seg_ys) in segments {
            let mut scatter = Scatter::new(seg_xs, seg_ys, self.color);
            scatter.line_width = self.line_width;
            scatter.line_style = self.line_style;
            scatter.marker_shape = MarkerShape::None;
            scatter.marker_size = 0.0;
            scatter.label = self.label.clone();
            scatter.render(dims, surface, low_quality)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for FunctionPlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionPlot")
            .field("has_function", &self.function.is_some())
            .field("x_min", &self.x_min)
            .field("x_max", &self.x_max)
            .field("label", &self.label)
            .field("point_count", &self.point_count)
            .finish()
    }
}
