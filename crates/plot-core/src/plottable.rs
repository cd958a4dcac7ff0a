// File: crates/plot-core/src/plottable.rs
// Summary: Closed set of renderable chart elements and the operations shared by all of them.

use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::function::FunctionPlot;
use crate::heatmap::Heatmap;
use crate::legend::Legend;
use crate::pie::Pie;
use crate::scatter::Scatter;
use crate::signal::Signal;
use crate::surface::Surface;
use crate::types::{Color, LineStyle, MarkerShape};

/// Intrinsic data extent a plottable reports for autoscaling.
/// NaN fields mean "no opinion on this axis".
#[derive(Clone, Copy, Debug)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl AxisLimits {
    /// No intrinsic extent; never influences autoscale.
    pub fn none() -> Self {
        Self { x_min: f64::NAN, x_max: f64::NAN, y_min: f64::NAN, y_max: f64::NAN }
    }

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    pub fn has_x(&self) -> bool { self.x_min.is_finite() && self.x_max.is_finite() }
    pub fn has_y(&self) -> bool { self.y_min.is_finite() && self.y_max.is_finite() }

    /// Extent over finite `(x, y)` points; NaN limits if none are finite.
    pub fn from_points<'a>(points: impl Iterator<Item = (&'a f64, &'a f64)>) -> Self {
        let mut limits = Self::none();
        for (&x, &y) in points {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            limits.x_min = if limits.x_min.is_nan() { x } else { limits.x_min.min(x) };
            limits.x_max = if limits.x_max.is_nan() { x } else { limits.x_max.max(x) };
            limits.y_min = if limits.y_min.is_nan() { y } else { limits.y_min.min(y) };
            limits.y_max = if limits.y_max.is_nan() { y } else { limits.y_max.max(y) };
        }
        limits
    }

    /// Union with another extent, ignoring NaN sides.
    pub fn expand(&mut self, other: &AxisLimits) {
        let fold = |acc: f64, v: f64, min: bool| -> f64 {
            if v.is_nan() { acc }
            else if acc.is_nan() { v }
            else if min { acc.min(v) }
            else { acc.max(v) }
        };
        self.x_min = fold(self.x_min, other.x_min, true);
        self.x_max = fold(self.x_max, other.x_max, false);
        self.y_min = fold(self.y_min, other.y_min, true);
        self.y_max = fold(self.y_max, other.y_max, false);
    }
}

/// One legend entry exported by a plottable.
#[derive(Clone, Debug)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
    pub line_style: LineStyle,
    pub line_width: f32,
    pub marker_shape: MarkerShape,
}

/// Any self-contained renderable chart element.
///
/// The set is closed: rendering dispatches by `match` on the variant rather
/// than probing capabilities, so every operation below is total over kinds.
pub enum Plottable {
    Function(FunctionPlot),
    Scatter(Scatter),
    Signal(Signal),
    Heatmap(Heatmap),
    Pie(Pie),
    Legend(Legend),
}

impl Plottable {
    /// Render into `surface` using the per-pass coordinate snapshot.
    ///
    /// `&mut self` because rendering updates per-pass diagnostics
    /// (e.g. [`FunctionPlot::point_count`]).
    pub fn render(
        &mut self,
        dims: &PlotDimensions,
        surface: &mut dyn Surface,
        low_quality: bool,
    ) -> Result<(), PlotError> {
        match self {
            Plottable::Function(p) => p.render(dims, surface, low_quality),
            Plottable::Scatter(p) => p.render(dims, surface, low_quality),
            Plottable::Signal(p) => p.render(dims, surface, low_quality),
            Plottable::Heatmap(p) => p.render(dims, surface, low_quality),
            Plottable::Pie(p) => p.render(dims, surface, low_quality),
            Plottable::Legend(p) => p.render(dims, surface, low_quality),
        }
    }

    /// Fail fast on malformed configuration, before any render attempt.
    pub fn validate_data(&self) -> Result<(), PlotError> {
        match self {
            Plottable::Function(p) => p.validate_data(),
            Plottable::Scatter(p) => p.validate_data(),
            Plottable::Signal(p) => p.validate_data(),
            Plottable::Heatmap(p) => p.validate_data(),
            Plottable::Pie(p) => p.validate_data(),
            Plottable::Legend(_) => Ok(()),
        }
    }

    pub fn axis_limits(&self) -> AxisLimits {
        match self {
            // A function has no intrinsic extent; it follows the visible window.
            Plottable::Function(_) => AxisLimits::none(),
            Plottable::Scatter(p) => p.axis_limits(),
            Plottable::Signal(p) => p.axis_limits(),
            Plottable::Heatmap(p) => p.axis_limits(),
            Plottable::Pie(p) => p.axis_limits(),
            Plottable::Legend(_) => AxisLimits::none(),
        }
    }

    pub fn legend_items(&self) -> Vec<LegendItem> {
        match self {
            Plottable::Function(p) => p.legend_items(),
            Plottable::Scatter(p) => p.legend_items(),
            Plottable::Signal(p) => p.legend_items(),
            Plottable::Heatmap(_) => Vec::new(),
            Plottable::Pie(p) => p.legend_items(),
            Plottable::Legend(_) => Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Plottable::Function(p) => p.visible,
            Plottable::Scatter(p) => p.visible,
            Plottable::Signal(p) => p.visible,
            Plottable::Heatmap(p) => p.visible,
            Plottable::Pie(p) => p.visible,
            Plottable::Legend(p) => p.visible,
        }
    }

    /// `(x_axis_index, y_axis_index)` pair this plottable maps through.
    pub fn axes(&self) -> (usize, usize) {
        match self {
            Plottable::Function(p) => (p.x_axis_index, p.y_axis_index),
            Plottable::Scatter(p) => (p.x_axis_index, p.y_axis_index),
            Plottable::Signal(p) => (p.x_axis_index, p.y_axis_index),
            Plottable::Heatmap(p) => (p.x_axis_index, p.y_axis_index),
            Plottable::Pie(p) => (p.x_axis_index, p.y_axis_index),
            Plottable::Legend(_) => (0, 0),
        }
    }
}
