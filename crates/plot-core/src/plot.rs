// File: crates/plot-core/src/plot.rs
// Summary: Figure composition: plottable collection, render pass, autoscale, and the factory.

use crate::axis::Axis;
use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::function::FunctionPlot;
use crate::geometry::PixelRect;
use crate::heatmap::Heatmap;
use crate::legend::Legend;
use crate::palette::Palette;
use crate::pie::{Pie, PieSlice};
use crate::plottable::{AxisLimits, LegendItem, Plottable};
use crate::scatter::Scatter;
use crate::signal::Signal;
use crate::surface::Surface;
use crate::types::{Color, Insets};

/// One figure: exclusively owns its plottable collection.
///
/// Insertion order is significant: it fixes render order and the palette
/// index used for automatic color assignment.
///
/// Single-threaded by design; a figure must not be rendered concurrently.
/// Independent figures may render on independent threads.
pub struct Plot {
    pub plottables: Vec<Plottable>,
    pub x_axes: Vec<Axis>,
    pub y_axes: Vec<Axis>,
    pub palette: Palette,
    pub insets: Insets,
    pub background: Color,
}

impl Plot {
    pub fn new() -> Self {
        Self {
            plottables: Vec::new(),
            x_axes: vec![Axis::default_x()],
            y_axes: vec![Axis::default_y()],
            palette: Palette::default(),
            insets: Insets::default(),
            background: Color::WHITE,
        }
    }

    /// Factory for constructing plottables registered into this figure.
    pub fn add(&mut self) -> PlottableFactory<'_> {
        PlottableFactory { plot: self }
    }

    /// Render every visible plottable, in insertion order, into `surface`.
    ///
    /// All plottables are validated before anything is drawn, so a fatal
    /// configuration error (e.g. a missing function) fails loudly up front
    /// and never leaves a half-drawn surface or masquerades as an empty chart.
    pub fn render(&mut self, surface: &mut dyn Surface, low_quality: bool) -> Result<(), PlotError> {
        for plottable in &self.plottables {
            plottable.validate_data()?;
            let (xi, yi) = plottable.axes();
            if xi >= self.x_axes.len() || yi >= self.y_axes.len() {
                return Err(PlotError::AxisOutOfRange {
                    x_index: xi,
                    y_index: yi,
                    x_count: self.x_axes.len(),
                    y_count: self.y_axes.len(),
                });
            }
        }

        surface.clear(self.background);
        let width = surface.width();
        let height = surface.height();
        let area = PixelRect::from_figure(width, height, &self.insets);

        for plottable in &mut self.plottables {
            if !plottable.is_visible() {
                continue;
            }
            // Fresh snapshot per plottable: each axis pair maps independently.
            let (xi, yi) = plottable.axes();
            let x_axis = &self.x_axes[xi];
            let y_axis = &self.y_axes[yi];
            let dims = PlotDimensions::new(
                width,
                height,
                area,
                x_axis.min,
                x_axis.max,
                y_axis.min,
                y_axis.max,
            );
            plottable.render(&dims, surface, low_quality)?;
        }

        Ok(())
    }

    /// Fit every axis to the union of the intrinsic extents of the plottables
    /// mapped through it, padded by `margin` (fraction of the span).
    /// Accumulation is per axis, not per axis pair: an x-axis unions extents
    /// across every y-axis it is paired with, and vice versa. Plottables
    /// without an extent (function plots, legends) never influence the
    /// result; an axis nothing reports on falls back to a 0..1 span, and
    /// degenerate spans are widened. Fallback and repair run only after the
    /// full union, so one empty pairing cannot discard another's extent.
    pub fn autoscale(&mut self, margin: f64) {
        for xi in 0..self.x_axes.len() {
            let mut limits = AxisLimits::none();
            for plottable in &self.plottables {
                if plottable.axes().0 == xi {
                    limits.expand(&plottable.axis_limits());
                }
            }
            let (mut min, mut max) = if limits.has_x() {
                (limits.x_min, limits.x_max)
            } else {
                (0.0, 1.0)
            };
            if (max - min).abs() < 1e-9 {
                max = min + 1.0;
            }
            let m = (max - min) * margin;
            self.x_axes[xi].min = min - m;
            self.x_axes[xi].max = max + m;
        }

        for yi in 0..self.y_axes.len() {
            let mut limits = AxisLimits::none();
            for plottable in &self.plottables {
                if plottable.axes().1 == yi {
                    limits.expand(&plottable.axis_limits());
                }
            }
            let (mut min, mut max) = if limits.has_y() {
                (limits.y_min, limits.y_max)
            } else {
                (0.0, 1.0)
            };
            if (max - min).abs() < 1e-9 {
                max = min + 1.0;
            }
            let m = (max - min) * margin;
            self.y_axes[yi].min = min - m;
            self.y_axes[yi].max = max + m;
        }
    }

    /// All legend entries exported by the figure's plottables, in order.
    /// Entries with empty labels are already suppressed at the source.
    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.plottables.iter().flat_map(|p| p.legend_items()).collect()
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}

/// Constructs plottables, assigns palette colors, and registers them into the
/// owning plot. Each method returns the constructed instance for fluent
/// configuration.
///
/// Automatic colors use `palette.get_color(n)` where `n` is the collection
/// size at construction time, read immediately before the append; removals
/// are never compensated.
pub struct PlottableFactory<'plot> {
    plot: &'plot mut Plot,
}

impl<'plot> PlottableFactory<'plot> {
    fn next_color(&self) -> Color {
        self.plot.palette.get_color(self.plot.plottables.len())
    }

    pub fn function(
        self,
        function: impl Fn(f64) -> Option<f64> + 'static,
        color: Option<Color>,
    ) -> &'plot mut FunctionPlot {
        let color = color.unwrap_or_else(|| self.next_color());
        let mut plottable = FunctionPlot::new(function);
        plottable.color = color;
        self.plot.plottables.push(Plottable::Function(plottable));
        match self.plot.plottables.last_mut() {
            Some(Plottable::Function(p)) => p,
            _ => unreachable!(),
        }
    }

    pub fn scatter(self, xs: Vec<f64>, ys: Vec<f64>, color: Option<Color>) -> &'plot mut Scatter {
        let color = color.unwrap_or_else(|| self.next_color());
        self.plot.plottables.push(Plottable::Scatter(Scatter::new(xs, ys, color)));
        match self.plot.plottables.last_mut() {
            Some(Plottable::Scatter(p)) => p,
            _ => unreachable!(),
        }
    }

    pub fn signal(self, ys: Vec<f64>, period: f64, color: Option<Color>) -> &'plot mut Signal {
        let color = color.unwrap_or_else(|| self.next_color());
        self.plot.plottables.push(Plottable::Signal(Signal::new(ys, period, color)));
        match self.plot.plottables.last_mut() {
            Some(Plottable::Signal(p)) => p,
            _ => unreachable!(),
        }
    }

    pub fn heatmap(self, intensities: Vec<Vec<f64>>) -> &'plot mut Heatmap {
        self.plot.plottables.push(Plottable::Heatmap(Heatmap::new(intensities)));
        match self.plot.plottables.last_mut() {
            Some(Plottable::Heatmap(p)) => p,
            _ => unreachable!(),
        }
    }

    /// Slices without an explicit color get consecutive palette colors by
    /// slice index.
    pub fn pie(self, mut slices: Vec<PieSlice>) -> &'plot mut Pie {
        for (i, slice) in slices.iter_mut().enumerate() {
            if slice.color.is_none() {
                slice.color = Some(self.plot.palette.get_color(i));
            }
        }
        self.plot.plottables.push(Plottable::Pie(Pie::new(slices)));
        match self.plot.plottables.last_mut() {
            Some(Plottable::Pie(p)) => p,
            _ => unreachable!(),
        }
    }

    /// `None` snapshots the figure's current legend items; later additions do
    /// not appear retroactively.
    pub fn legend(self, items: Option<Vec<LegendItem>>) -> &'plot mut Legend {
        let items = items.unwrap_or_else(|| self.plot.legend_items());
        self.plot.plottables.push(Plottable::Legend(Legend::new(items)));
        match self.plot.plottables.last_mut() {
            Some(Plottable::Legend(p)) => p,
            _ => unreachable!(),
        }
    }
}
