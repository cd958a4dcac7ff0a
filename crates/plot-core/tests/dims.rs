// File: crates/plot-core/tests/dims.rs
// Purpose: Validate the coordinate snapshot's forward/inverse mapping and Y flip.

use plot_core::dims::PlotDimensions;
use plot_core::geometry::PixelRect;

fn dims() -> PlotDimensions {
    // 800x600 figure, full-figure plot area, x in 0..8, y in 0..6.
    let area = PixelRect::from_ltrb(0.0, 0.0, 800.0, 600.0);
    PlotDimensions::new(800, 600, area, 0.0, 8.0, 0.0, 6.0)
}

#[test]
fn scale_factors_are_reciprocal() {
    let d = dims();
    assert!((d.px_per_unit_x * d.units_per_px_x - 1.0).abs() < 1e-12);
    assert!((d.px_per_unit_y * d.units_per_px_y - 1.0).abs() < 1e-12);
    assert!((d.px_per_unit_x - 100.0).abs() < 1e-9);
    assert!((d.px_per_unit_y - 100.0).abs() < 1e-9);
}

#[test]
fn x_mapping_is_affine_and_orientation_preserving() {
    let d = dims();
    assert!((d.get_pixel_x(0.0) - 0.0).abs() < 1e-6);
    assert!((d.get_pixel_x(4.0) - 400.0).abs() < 1e-6);
    assert!((d.get_pixel_x(8.0) - 800.0).abs() < 1e-6);
}

#[test]
fn y_mapping_is_flipped() {
    let d = dims();
    // Data y_min maps to the bottom pixel row, y_max to the top.
    assert!((d.get_pixel_y(0.0) - 600.0).abs() < 1e-6);
    assert!((d.get_pixel_y(6.0) - 0.0).abs() < 1e-6);
    assert!((d.get_pixel_y(3.0) - 300.0).abs() < 1e-6);
}

#[test]
fn pixel_to_data_round_trips() {
    let d = dims();
    for &(x, y) in &[(0.5, 0.25), (3.75, 5.5), (7.99, 0.01)] {
        let px = d.get_pixel_x(x);
        let py = d.get_pixel_y(y);
        assert!((d.get_coordinate_x(px) - x).abs() < 1e-4);
        assert!((d.get_coordinate_y(py) - y).abs() < 1e-4);
    }
}

#[test]
fn area_respects_insets() {
    use plot_core::Insets;
    let area = PixelRect::from_figure(1024, 640, &Insets::new(72, 24, 24, 56));
    assert_eq!(area.left, 72.0);
    assert_eq!(area.top, 24.0);
    assert_eq!(area.right, 1000.0);
    assert_eq!(area.bottom, 584.0);
    assert_eq!(area.width(), 928.0);
    assert_eq!(area.height(), 560.0);
}
