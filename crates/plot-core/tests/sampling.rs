// File: crates/plot-core/tests/sampling.rs
// Purpose: Validate function sampling density, spacing, gap behavior, and diagnostics.

use std::cell::RefCell;
use std::rc::Rc;

use plot_core::dims::PlotDimensions;
use plot_core::geometry::PixelRect;
use plot_core::{FunctionPlot, RecordingSurface};

/// Snapshot with `px_per_unit` pixels per data unit on both axes.
fn dims_with_density(x_min: f64, x_max: f64, px_per_unit: f64) -> PlotDimensions {
    let width_px = ((x_max - x_min) * px_per_unit) as f32;
    let area = PixelRect::from_ltrb(0.0, 0.0, width_px, 400.0);
    PlotDimensions::new(width_px as u32, 400, area, x_min, x_max, -10.0, 10.0)
}

#[test]
fn one_sample_per_horizontal_pixel() {
    // f(x) = x^2 over [-2, 2] at 100 px/unit: floor(4 * 100) + 1 = 401 samples.
    let mut plot = FunctionPlot::new(|x| Some(x * x)).with_domain(-2.0, 2.0);
    let dims = dims_with_density(-2.0, 2.0, 100.0);
    let mut surface = RecordingSurface::new(400, 400);

    plot.render(&dims, &mut surface, false).unwrap();

    assert_eq!(plot.point_count(), 401);
    let lines = surface.polylines();
    assert_eq!(lines.len(), 1, "all samples finite: a single connected curve");
    assert_eq!(lines[0].len(), 401);
}

#[test]
fn samples_are_evenly_spaced_at_pixel_cadence() {
    let mut plot = FunctionPlot::new(|x| Some(x)).with_domain(0.0, 4.0);
    let dims = dims_with_density(0.0, 4.0, 50.0);
    let mut surface = RecordingSurface::new(200, 400);

    plot.render(&dims, &mut surface, false).unwrap();

    let lines = surface.polylines();
    let points = lines[0];
    for pair in points.windows(2) {
        // 1/d data units apart means exactly one pixel apart on screen.
        assert!((pair[1].0 - pair[0].0 - 1.0).abs() < 1e-3);
    }
    assert!((points[0].0 - dims.get_pixel_x(0.0)).abs() < 1e-3, "sampling starts at the interval start");
}

#[test]
fn zero_width_interval_yields_one_sample() {
    let mut plot = FunctionPlot::new(|x| Some(x + 1.0)).with_domain(2.0, 2.0);
    let dims = dims_with_density(0.0, 4.0, 100.0);
    let mut surface = RecordingSurface::new(400, 400);

    plot.render(&dims, &mut surface, false).unwrap();
    assert_eq!(plot.point_count(), 1);
}

#[test]
fn all_undefined_function_renders_nothing_without_error() {
    let mut plot = FunctionPlot::new(|_| None).with_domain(0.0, 4.0);
    let dims = dims_with_density(0.0, 4.0, 25.0);
    let mut surface = RecordingSurface::new(100, 400);

    plot.render(&dims, &mut surface, false).unwrap();

    assert_eq!(plot.point_count(), 101, "attempted samples are still counted");
    assert!(surface.polylines().is_empty(), "no drawn points");
}

#[test]
fn singularity_splits_the_curve_into_two_sub_curves() {
    // f(x) = 1/x over [-1, 1] at 10 px/unit hits x = 0 exactly; that one
    // sample is dropped and the halves are not connected across it.
    let mut plot = FunctionPlot::new(|x| Some(1.0 / x)).with_domain(-1.0, 1.0);
    let dims = dims_with_density(-1.0, 1.0, 10.0);
    let mut surface = RecordingSurface::new(20, 400);

    plot.render(&dims, &mut surface, false).unwrap();

    assert_eq!(plot.point_count(), 21);
    let lines = surface.polylines();
    assert_eq!(lines.len(), 2, "gap at the singularity");
    assert_eq!(lines[0].len() + lines[1].len(), 20, "exactly one sample dropped");
}

#[test]
fn nan_range_produces_gap_with_neighbors_connected() {
    // NaN for x in [1, 2]; valid samples on each side stay connected to their
    // own side only.
    let f = |x: f64| {
        if (1.0..=2.0).contains(&x) {
            Some(f64::NAN)
        } else {
            Some(x)
        }
    };
    let mut plot = FunctionPlot::new(f).with_domain(0.0, 4.0);
    let dims = dims_with_density(0.0, 4.0, 10.0);
    let mut surface = RecordingSurface::new(40, 400);

    plot.render(&dims, &mut surface, false).unwrap();

    assert_eq!(plot.point_count(), 41);
    let lines = surface.polylines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].len(), 10, "samples at x = 0.0 .. 0.9");
    assert_eq!(lines[1].len(), 20, "samples at x = 2.1 .. 4.0");
}

#[test]
fn unbounded_domain_follows_visible_window() {
    // An unrestricted function resamples against the mapper's current X
    // range, so panning changes which xs get evaluated.
    let seen: Rc<RefCell<Vec<f64>>> = Rc::new(RefCell::new(Vec::new()));
    let probe = Rc::clone(&seen);
    let mut plot = FunctionPlot::new(move |x| {
        probe.borrow_mut().push(x);
        Some(x.sin())
    });

    let mut surface = RecordingSurface::new(400, 400);
    plot.render(&dims_with_density(0.0, 4.0, 100.0), &mut surface, false).unwrap();
    assert_eq!(plot.point_count(), 401);
    assert!((seen.borrow()[0] - 0.0).abs() < 1e-12);

    seen.borrow_mut().clear();
    plot.render(&dims_with_density(2.0, 6.0, 100.0), &mut surface, false).unwrap();
    assert_eq!(plot.point_count(), 401);
    assert!((seen.borrow()[0] - 2.0).abs() < 1e-12, "sampling now starts at the panned window");
}

#[test]
fn curve_is_drawn_without_markers() {
    use plot_core::DrawOp;
    let mut plot = FunctionPlot::new(|x| Some(x)).with_domain(0.0, 1.0);
    let dims = dims_with_density(0.0, 1.0, 50.0);
    let mut surface = RecordingSurface::new(50, 400);

    plot.render(&dims, &mut surface, false).unwrap();

    let any_markers = surface.ops.iter().any(|op| matches!(op, DrawOp::Markers { .. }));
    assert!(!any_markers, "samples are rendering artifacts, not data points");
}
