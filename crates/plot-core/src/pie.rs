// File: crates/plot-core/src/pie.rs
// Summary: Labeled value slices rendered as wedges of a unit circle.

use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::plottable::{AxisLimits, LegendItem};
use crate::surface::Surface;
use crate::types::{Color, LineStyle, MarkerShape};

#[derive(Clone, Debug)]
pub struct PieSlice {
    pub value: f64,
    pub label: String,
    /// Assigned from the palette by the factory when left unset.
    pub color: Option<Color>,
}

impl PieSlice {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into(), color: None }
    }
}

/// Pie chart: a unit circle centered at the data-space origin, wedges laid
/// out clockwise from 12 o'clock in slice order.
pub struct Pie {
    pub slices: Vec<PieSlice>,
    pub visible: bool,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
}

impl Pie {
    pub fn new(slices: Vec<PieSlice>) -> Self {
        Self { slices, visible: true, x_axis_index: 0, y_axis_index: 0 }
    }

    pub fn validate_data(&self) -> Result<(), PlotError> {
        let valid = |s: &PieSlice| s.value.is_finite() && s.value >= 0.0;
        if self.slices.is_empty() || !self.slices.iter().all(valid) {
            return Err(PlotError::MalformedSlices);
        }
        if self.slices.iter().map(|s| s.value).sum::<f64>() <= 0.0 {
            return Err(PlotError::MalformedSlices);
        }
        Ok(())
    }

    /// Padded unit-circle extent so a lone autoscaled pie is not clipped.
    pub fn axis_limits(&self) -> AxisLimits {
        AxisLimits::new(-1.5, 1.5, -1.5, 1.5)
    }

    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.slices
            .iter()
            .filter(|s| !s.label.trim().is_empty())
            .map(|s| LegendItem {
                label: s.label.clone(),
                color: s.color.unwrap_or(Color::BLACK),
                line_style: LineStyle::Solid,
                line_width: 0.0,
                marker_shape: MarkerShape::FilledSquare,
            })
            .collect()
    }

    pub fn render(
        &mut self,
        dims: &PlotDimensions,
        surface: &mut dyn Surface,
        _low_quality: bool,
    ) -> Result<(), PlotError> {
        self.validate_data()?;

        let total: f64 = self.slices.iter().map(|s| s.value).sum();
        let cx = dims.get_pixel_x(0.0);
        let cy = dims.get_pixel_y(0.0);
        // Unit radius in pixels; the smaller scale wins so the circle stays round.
        let radius = dims.px_per_unit_x.min(dims.px_per_unit_y) as f32;

        let mut start_deg = 0.0f32;
        for (i, slice) in self.slices.iter().enumerate() {
            let sweep_deg = (slice.value / total * 360.0) as f32;
            let color = slice.color.unwrap_or(Color::BLACK);
            surface.fill_wedge(cx, cy, radius, start_deg, sweep_deg, color);
            // Accumulate exactly so the last slice closes the circle.
            start_deg = if i + 1 == self.slices.len() { 360.0 } else { start_deg + sweep_deg };
        }

        Ok(())
    }
}
