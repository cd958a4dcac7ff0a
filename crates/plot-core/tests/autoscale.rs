// File: crates/plot-core/tests/autoscale.rs
// Purpose: Validate autoscale over mixed plottable kinds.

use plot_core::{Plot, RecordingSurface};

#[test]
fn autoscale_mixed_plottables() {
    let mut plot = Plot::new();

    plot.add().scatter(vec![0.0, 5.0], vec![1.0, 3.0], None);
    plot.add().signal(vec![2.0, 6.0, 4.0], 1.0, None);

    plot.autoscale(0.0);

    // X spans 0..5 from the scatter vs 0..2 from the signal => expect 0..5.
    assert!(plot.x_axes[0].min <= 0.0 + 1e-9);
    assert!(plot.x_axes[0].max >= 5.0 - 1e-9);

    // Y min 1.0 (scatter) and Y max 6.0 (signal).
    assert!(plot.y_axes[0].min <= 1.0 + 1e-9);
    assert!(plot.y_axes[0].max >= 6.0 - 1e-9);
}

#[test]
fn function_plot_never_influences_autoscale() {
    let mut plot = Plot::new();
    plot.add().scatter(vec![0.0, 2.0], vec![0.0, 2.0], None);
    // Enormous values if it were sampled for limits; it declares no extent.
    plot.add().function(|x| Some(x * 1e9), None);

    plot.autoscale(0.0);

    assert!((plot.x_axes[0].max - 2.0).abs() < 1e-9);
    assert!((plot.y_axes[0].max - 2.0).abs() < 1e-9);
}

#[test]
fn only_functions_fall_back_to_unit_span() {
    let mut plot = Plot::new();
    plot.add().function(|x| Some(x.sin()), None);

    plot.autoscale(0.0);

    assert_eq!(plot.x_axes[0].min, 0.0);
    assert_eq!(plot.x_axes[0].max, 1.0);
    assert_eq!(plot.y_axes[0].min, 0.0);
    assert_eq!(plot.y_axes[0].max, 1.0);
}

#[test]
fn degenerate_extents_are_widened() {
    let mut plot = Plot::new();
    plot.add().scatter(vec![2.0], vec![7.0], None);

    plot.autoscale(0.0);

    assert!(plot.x_axes[0].max - plot.x_axes[0].min >= 1.0 - 1e-9);
    assert!(plot.y_axes[0].max - plot.y_axes[0].min >= 1.0 - 1e-9);
}

#[test]
fn margin_pads_proportionally() {
    let mut plot = Plot::new();
    plot.add().scatter(vec![0.0, 10.0], vec![0.0, 10.0], None);

    plot.autoscale(0.1);

    assert!((plot.x_axes[0].min - -1.0).abs() < 1e-9);
    assert!((plot.x_axes[0].max - 11.0).abs() < 1e-9);
}

#[test]
fn empty_second_axis_keeps_shared_axis_extent() {
    use plot_core::Axis;

    // A second y-axis with nothing mapped through it must not reset the
    // x-axis limits computed from the plottables on the first pair.
    let mut plot = Plot::new();
    plot.y_axes.push(Axis::new("right", 0.0, 1.0));
    plot.add().scatter(vec![0.0, 5.0], vec![1.0, 3.0], None);

    plot.autoscale(0.0);

    assert!((plot.x_axes[0].min - 0.0).abs() < 1e-9);
    assert!((plot.x_axes[0].max - 5.0).abs() < 1e-9);
    assert!((plot.y_axes[0].min - 1.0).abs() < 1e-9);
    assert!((plot.y_axes[0].max - 3.0).abs() < 1e-9);
    // The unused axis falls back to the unit span.
    assert_eq!(plot.y_axes[1].min, 0.0);
    assert_eq!(plot.y_axes[1].max, 1.0);
}

#[test]
fn overlaid_axis_pairs_scale_independently_but_union_shared_axes() {
    use plot_core::Axis;

    let mut plot = Plot::new();
    plot.y_axes.push(Axis::new("right", 0.0, 1.0));

    plot.add().scatter(vec![0.0, 5.0], vec![1.0, 3.0], None);
    let overlaid = plot.add().scatter(vec![2.0, 8.0], vec![100.0, 300.0], None);
    overlaid.y_axis_index = 1;

    plot.autoscale(0.0);

    // Both plottables share x-axis 0: its extent is the union 0..8.
    assert!((plot.x_axes[0].min - 0.0).abs() < 1e-9);
    assert!((plot.x_axes[0].max - 8.0).abs() < 1e-9);
    // Each y-axis fits only its own plottable.
    assert!((plot.y_axes[0].min - 1.0).abs() < 1e-9);
    assert!((plot.y_axes[0].max - 3.0).abs() < 1e-9);
    assert!((plot.y_axes[1].min - 100.0).abs() < 1e-9);
    assert!((plot.y_axes[1].max - 300.0).abs() < 1e-9);
}

#[test]
fn autoscaled_plot_renders_cleanly() {
    let mut plot = Plot::new();
    plot.add().scatter(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.5], None);
    plot.add().function(|x| Some(x.cos()), None);
    plot.autoscale(0.05);

    let mut surface = RecordingSurface::new(640, 480);
    plot.render(&mut surface, false).unwrap();
    assert!(!surface.ops.is_empty());
}
