// File: crates/plot-core/src/heatmap.rs
// Summary: Rectangular intensity grid rendered as colormapped cells.

use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::plottable::AxisLimits;
use crate::surface::Surface;
use crate::types::Color;

/// 2D intensity grid. Row 0 is rendered at the top; each cell covers one
/// data unit, so the grid occupies `[0, cols] x [0, rows]`.
pub struct Heatmap {
    /// Row-major intensities. Must be non-empty and rectangular.
    pub intensities: Vec<Vec<f64>>,
    /// Colormap endpoints: cell color is the gradient position of its value
    /// within the grid's finite value range.
    pub color_low: Color,
    pub color_high: Color,
    pub visible: bool,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
}

impl Heatmap {
    pub fn new(intensities: Vec<Vec<f64>>) -> Self {
        Self {
            intensities,
            color_low: Color::from_rgb(13, 8, 135),
            color_high: Color::from_rgb(240, 249, 33),
            visible: true,
            x_axis_index: 0,
            y_axis_index: 0,
        }
    }

    fn rows(&self) -> usize { self.intensities.len() }
    fn cols(&self) -> usize { self.intensities.first().map_or(0, |r| r.len()) }

    pub fn validate_data(&self) -> Result<(), PlotError> {
        let cols = self.cols();
        if self.rows() == 0 || cols == 0 {
            return Err(PlotError::MalformedGrid);
        }
        if self.intensities.iter().any(|row| row.len() != cols) {
            return Err(PlotError::MalformedGrid);
        }
        Ok(())
    }

    pub fn axis_limits(&self) -> AxisLimits {
        if self.rows() == 0 || self.cols() == 0 {
            return AxisLimits::none();
        }
        AxisLimits::new(0.0, self.cols() as f64, 0.0, self.rows() as f64)
    }

    /// Finite value range across the grid, or `None` when every cell is NaN.
    fn value_range(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.intensities {
            for &v in row {
                if v.is_finite() {
                    min = min.min(v);
                    max = max.max(v);
                }
            }
        }
        (min <= max).then_some((min, max))
    }

    pub fn render(
        &mut self,
        dims: &PlotDimensions,
        surface: &mut dyn Surface,
        _low_quality: bool,
    ) -> Result<(), PlotError> {
        self.validate_data()?;

        let Some((min, max)) = self.value_range() else {
            return Ok(());
        };
        let span = (max - min).max(f64::EPSILON);
        let rows = self.rows();

        for (r, row) in self.intensities.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                // NaN cells are holes, not zeroes.
                if !value.is_finite() {
                    continue;
                }
                let color = self.color_low.lerp(self.color_high, (value - min) / span);
                // Row 0 at the top: cell (r, c) spans y in [rows-1-r, rows-r].
                let y_top = (rows - r) as f64;
                let y_bottom = (rows - 1 - r) as f64;
                surface.fill_rect(
                    dims.get_pixel_x(c as f64),
                    dims.get_pixel_y(y_top),
                    dims.get_pixel_x((c + 1) as f64),
                    dims.get_pixel_y(y_bottom),
                    color,
                );
            }
        }

        Ok(())
    }
}
