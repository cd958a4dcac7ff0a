// File: crates/plot-core/tests/validate.rs
// Purpose: Fatal configuration errors surface at validation time, before any drawing.

use plot_core::{
    FunctionPlot, Heatmap, Pie, PieSlice, Plot, PlotError, Plottable, RecordingSurface, Scatter,
    Signal, Color,
};

#[test]
fn missing_function_is_a_configuration_error() {
    let plot = FunctionPlot::empty();
    assert_eq!(plot.validate_data(), Err(PlotError::MissingFunction));
}

#[test]
fn missing_function_fails_before_any_render_attempt() {
    let mut plot = Plot::new();
    plot.plottables.push(Plottable::Function(FunctionPlot::empty()));

    let mut surface = RecordingSurface::new(400, 300);
    let err = plot.render(&mut surface, false).unwrap_err();
    assert_eq!(err, PlotError::MissingFunction);
    // Fails loudly and early: not even the background was cleared, so a
    // missing function can never be mistaken for an empty chart.
    assert!(surface.ops.is_empty());
}

#[test]
fn mismatched_series_lengths_fail_fast() {
    let scatter = Scatter::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0], Color::BLACK);
    assert_eq!(
        scatter.validate_data(),
        Err(PlotError::LengthMismatch { xs: 3, ys: 2 })
    );
}

#[test]
fn mismatched_lengths_abort_the_whole_pass_up_front() {
    let mut plot = Plot::new();
    plot.add().function(|x| Some(x), None);
    plot.add().scatter(vec![1.0, 2.0], vec![1.0], None);

    let mut surface = RecordingSurface::new(400, 300);
    assert!(plot.render(&mut surface, false).is_err());
    assert!(surface.ops.is_empty(), "nothing drawn, not a half-rendered figure");
}

#[test]
fn empty_series_is_valid() {
    let scatter = Scatter::new(Vec::new(), Vec::new(), Color::BLACK);
    assert!(scatter.validate_data().is_ok());
}

#[test]
fn non_positive_signal_period_is_rejected() {
    let signal = Signal::new(vec![1.0, 2.0], 0.0, Color::BLACK);
    assert_eq!(signal.validate_data(), Err(PlotError::NonPositivePeriod(0.0)));
}

#[test]
fn ragged_or_empty_heatmap_grid_is_rejected() {
    assert_eq!(Heatmap::new(Vec::new()).validate_data(), Err(PlotError::MalformedGrid));
    let ragged = Heatmap::new(vec![vec![1.0, 2.0], vec![3.0]]);
    assert_eq!(ragged.validate_data(), Err(PlotError::MalformedGrid));
    let ok = Heatmap::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    assert!(ok.validate_data().is_ok());
}

#[test]
fn pie_rejects_negative_and_all_zero_slices() {
    let negative = Pie::new(vec![PieSlice::new(-1.0, "a")]);
    assert_eq!(negative.validate_data(), Err(PlotError::MalformedSlices));
    let zeros = Pie::new(vec![PieSlice::new(0.0, "a"), PieSlice::new(0.0, "b")]);
    assert_eq!(zeros.validate_data(), Err(PlotError::MalformedSlices));
}

#[test]
fn unknown_axis_index_is_reported() {
    let mut plot = Plot::new();
    let scatter = plot.add().scatter(vec![0.0], vec![0.0], None);
    scatter.y_axis_index = 3;

    let mut surface = RecordingSurface::new(400, 300);
    let err = plot.render(&mut surface, false).unwrap_err();
    assert!(matches!(err, PlotError::AxisOutOfRange { y_index: 3, .. }));
}
