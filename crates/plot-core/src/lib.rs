// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the plottable pipeline and figure API.

pub mod axis;
pub mod dims;
pub mod error;
pub mod function;
pub mod geometry;
pub mod heatmap;
pub mod legend;
pub mod palette;
pub mod pie;
pub mod plot;
pub mod plottable;
pub mod scatter;
pub mod signal;
pub mod surface;
pub mod types;

pub use axis::Axis;
pub use dims::PlotDimensions;
pub use error::PlotError;
pub use function::FunctionPlot;
pub use heatmap::Heatmap;
pub use legend::Legend;
pub use palette::Palette;
pub use pie::{Pie, PieSlice};
pub use plot::{Plot, PlottableFactory};
pub use plottable::{AxisLimits, LegendItem, Plottable};
pub use scatter::Scatter;
pub use signal::Signal;
pub use surface::{DrawOp, RecordingSurface, Stroke, Surface};
pub use types::{Color, Insets, LineStyle, MarkerShape};
