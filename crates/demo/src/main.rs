// File: crates/demo/src/main.rs
// Summary: Demo renders a function/scatter/signal figure and a heatmap/pie figure to PNGs.

use anyhow::Result;
use plot_core::{Color, LineStyle, MarkerShape, PieSlice, Plot};
use plot_raster::RasterSurface;
use std::path::PathBuf;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let out_dir = PathBuf::from(
        std::env::args().nth(1).unwrap_or_else(|| "target/demo".to_string()),
    );

    // 1) Curves: a sampled function, noisy measurements, and a signal trace.
    let mut plot = Plot::new();
    plot.x_axes[0].label = "t".to_string();
    plot.y_axes[0].label = "amplitude".to_string();

    let (xs, ys) = noisy_sine(60, 0.25);
    let scatter = plot.add().scatter(xs, ys, None);
    scatter.label = "measured".to_string();
    scatter.line_width = 0.0;
    scatter.marker_shape = MarkerShape::OpenCircle;

    let fit = plot.add().function(|x| Some(x.sin()), None);
    fit.label = "sin(t)".to_string();
    fit.line_width = 2.0;

    let damped = plot.add().function(|x| Some((x * 3.0).cos() * (-x / 8.0).exp()), None);
    damped.label = "damped".to_string();
    damped.line_style = LineStyle::Dashed;

    // 1/sqrt(t) is undefined for t <= 0; the curve simply starts later.
    let partial = plot.add().function(|x| (x > 0.0).then(|| 1.0 / x.sqrt()), None);
    partial.label = "1/sqrt(t)".to_string();
    partial.line_style = LineStyle::Dotted;

    plot.autoscale(0.05);
    plot.add().legend(None);

    let mut surface = RasterSurface::new(1024, 640);
    plot.render(&mut surface, false)?;
    let out = out_dir.join("curves.png");
    surface.save_png(&out)?;
    println!("Wrote {}", out.display());
    if let Some(plot_core::Plottable::Function(f)) = plot.plottables.get(1) {
        println!("  sin(t) sampled at {} points", f.point_count());
    }

    // 2) Grid and parts-of-whole figures.
    let mut heat = Plot::new();
    heat.add().heatmap(gaussian_bump(24, 32));
    heat.autoscale(0.0);
    let mut heat_surface = RasterSurface::new(640, 480);
    heat.render(&mut heat_surface, false)?;
    let out = out_dir.join("heatmap.png");
    heat_surface.save_png(&out)?;
    println!("Wrote {}", out.display());

    let mut pie = Plot::new();
    pie.background = Color::from_rgb(250, 250, 252);
    pie.add().pie(vec![
        PieSlice::new(42.0, "alpha"),
        PieSlice::new(27.0, "beta"),
        PieSlice::new(18.0, "gamma"),
        PieSlice::new(13.0, "delta"),
    ]);
    pie.autoscale(0.0);
    pie.add().legend(None);
    let mut pie_surface = RasterSurface::new(480, 480);
    pie.render(&mut pie_surface, false)?;
    let out = out_dir.join("pie.png");
    pie_surface.save_png(&out)?;
    println!("Wrote {}", out.display());

    Ok(())
}

/// Sine samples with deterministic pseudo-noise (no RNG dependency needed).
fn noisy_sine(n: usize, amplitude: f64) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for i in 0..n {
        let x = i as f64 * 12.0 / n as f64;
        let noise = ((i as f64 * 12.9898).sin() * 43758.5453).fract() - 0.5;
        xs.push(x);
        ys.push(x.sin() + noise * amplitude);
    }
    (xs, ys)
}

/// Radially symmetric bump for the heatmap demo.
fn gaussian_bump(rows: usize, cols: usize) -> Vec<Vec<f64>> {
    let mut grid = Vec::with_capacity(rows);
    for r in 0..rows {
        let mut row = Vec::with_capacity(cols);
        for c in 0..cols {
            let dr = (r as f64 - rows as f64 / 2.0) / (rows as f64 / 4.0);
            let dc = (c as f64 - cols as f64 / 2.0) / (cols as f64 / 4.0);
            row.push((-(dr * dr + dc * dc)).exp());
        }
        grid.push(row);
    }
    grid
}
