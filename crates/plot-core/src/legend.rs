// File: crates/plot-core/src/legend.rs
// Summary: Legend plottable drawing swatch + label rows in the plot area corner.

use crate::dims::PlotDimensions;
use crate::error::PlotError;
use crate::plottable::LegendItem;
use crate::surface::{Stroke, Surface};
use crate::types::{Color, MarkerShape};

const ROW_HEIGHT: f32 = 18.0;
const SWATCH_WIDTH: f32 = 24.0;
const PADDING: f32 = 8.0;
const FONT_SIZE: f32 = 12.0;

/// Legend block anchored to the top-right of the plot area.
///
/// Holds a fixed item list snapshotted at construction (the factory gathers
/// the figure's items when the caller supplies none); later plottable
/// additions do not appear retroactively.
pub struct Legend {
    pub items: Vec<LegendItem>,
    pub background: Color,
    pub visible: bool,
}

impl Legend {
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            items,
            background: Color::from_argb(220, 255, 255, 255),
            visible: true,
        }
    }

    pub fn render(
        &mut self,
        dims: &PlotDimensions,
        surface: &mut dyn Surface,
        low_quality: bool,
    ) -> Result<(), PlotError> {
        if self.items.is_empty() {
            return Ok(());
        }

        // Label width is approximated; backends without text shaping draw
        // swatches only, which keeps layout deterministic across backends.
        let label_chars = self
            .items
            .iter()
            .map(|i| i.label.chars().count())
            .max()
            .unwrap_or(0);
        let width = PADDING * 3.0 + SWATCH_WIDTH + label_chars as f32 * FONT_SIZE * 0.6;
        let height = PADDING * 2.0 + self.items.len() as f32 * ROW_HEIGHT;

        let right = dims.area.right - PADDING;
        let top = dims.area.top + PADDING;
        let left = right - width;
        surface.fill_rect(left, top, right, top + height, self.background);

        for (row, item) in self.items.iter().enumerate() {
            let y = top + PADDING + row as f32 * ROW_HEIGHT + ROW_HEIGHT * 0.5;
            let sx0 = left + PADDING;
            let sx1 = sx0 + SWATCH_WIDTH;

            if item.line_width > 0.0 {
                let stroke = Stroke {
                    color: item.color,
                    width: item.line_width,
                    style: item.line_style,
                    anti_alias: !low_quality,
                };
                surface.draw_polyline(&[(sx0, y), (sx1, y)], &stroke);
            }
            if item.marker_shape != MarkerShape::None {
                let size = if item.line_width > 0.0 { 5.0 } else { 9.0 };
                surface.draw_markers(&[((sx0 + sx1) * 0.5, y)], item.marker_shape, size, item.color);
            }
            surface.draw_text(
                sx1 + PADDING,
                y + FONT_SIZE * 0.35,
                &item.label,
                FONT_SIZE,
                Color::BLACK,
            );
        }

        Ok(())
    }
}
