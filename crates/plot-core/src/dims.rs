// File: crates/plot-core/src/dims.rs
// Summary: Per-render-pass snapshot mapping data space to pixel space and back.

use crate::geometry::PixelRect;

/// Immutable coordinate snapshot for one render pass.
///
/// Built fresh by [`crate::Plot::render`] every pass (figure size and visible
/// ranges may change between passes); plottables borrow it for the duration of
/// their render call and must not cache it.
///
/// Invariant (guaranteed by the owning plot, not checked here):
/// `x_max > x_min` and `y_max > y_min`.
///
/// The Y axis is flipped: pixel rows grow downward while data Y grows upward,
/// so `get_pixel_y` measures from the bottom edge of the plot area.
#[derive(Clone, Copy, Debug)]
pub struct PlotDimensions {
    /// Figure size in pixels.
    pub figure_width: u32,
    pub figure_height: u32,
    /// Plot-area rectangle inside the figure (figure minus insets).
    pub area: PixelRect,
    /// Visible data-space bounds.
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Forward scale factors (pixels per data unit).
    pub px_per_unit_x: f64,
    pub px_per_unit_y: f64,
    /// Inverse scale factors (data units per pixel).
    pub units_per_px_x: f64,
    pub units_per_px_y: f64,
}

impl PlotDimensions {
    pub fn new(
        figure_width: u32,
        figure_height: u32,
        area: PixelRect,
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    ) -> Self {
        let px_per_unit_x = area.width() as f64 / (x_max - x_min);
        let px_per_unit_y = area.height() as f64 / (y_max - y_min);
        Self {
            figure_width,
            figure_height,
            area,
            x_min,
            x_max,
            y_min,
            y_max,
            px_per_unit_x,
            px_per_unit_y,
            units_per_px_x: 1.0 / px_per_unit_x,
            units_per_px_y: 1.0 / px_per_unit_y,
        }
    }

    /// Data X to pixel column.
    #[inline]
    pub fn get_pixel_x(&self, x: f64) -> f32 {
        self.area.left + ((x - self.x_min) * self.px_per_unit_x) as f32
    }

    /// Data Y to pixel row (flipped: larger Y is closer to the top edge).
    #[inline]
    pub fn get_pixel_y(&self, y: f64) -> f32 {
        self.area.bottom - ((y - self.y_min) * self.px_per_unit_y) as f32
    }

    /// Pixel column to data X.
    #[inline]
    pub fn get_coordinate_x(&self, px: f32) -> f64 {
        self.x_min + (px - self.area.left) as f64 * self.units_per_px_x
    }

    /// Pixel row to data Y.
    #[inline]
    pub fn get_coordinate_y(&self, py: f32) -> f64 {
        self.y_min + (self.area.bottom - py) as f64 * self.units_per_px_y
    }

    /// Visible data-space width in units.
    pub fn x_span(&self) -> f64 { self.x_max - self.x_min }
    /// Visible data-space height in units.
    pub fn y_span(&self) -> f64 { self.y_max - self.y_min }
}
