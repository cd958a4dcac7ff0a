// File: crates/plot-core/src/error.rs
// Summary: Fatal configuration errors surfaced before any drawing happens.

use thiserror::Error;

/// Configuration errors detected at validation time.
///
/// Per-sample anomalies (undefined or non-finite function outputs) are never
/// errors; they are dropped during sampling with a trace diagnostic.
#[derive(Debug, Error, PartialEq)]
pub enum PlotError {
    #[error("function plot has no function to evaluate")]
    MissingFunction,

    #[error("series arrays differ in length: {xs} xs vs {ys} ys")]
    LengthMismatch { xs: usize, ys: usize },

    #[error("signal sample period must be positive, got {0}")]
    NonPositivePeriod(f64),

    #[error("heatmap grid must be rectangular and non-empty")]
    MalformedGrid,

    #[error("pie requires at least one slice with a finite non-negative value")]
    MalformedSlices,

    #[error("plottable references axis pair ({x_index}, {y_index}) but the figure has {x_count} x-axes and {y_count} y-axes")]
    AxisOutOfRange {
        x_index: usize,
        y_index: usize,
        x_count: usize,
        y_count: usize,
    },
}
