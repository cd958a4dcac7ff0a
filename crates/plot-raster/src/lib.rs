// File: crates/plot-raster/src/lib.rs
// Summary: CPU rasterizer for the core Surface trait; RGBA buffer plus PNG export.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use plot_core::{Color, MarkerShape, Stroke, Surface};

/// Step, in pixels, between stamped discs when walking a stroked segment.
const STROKE_STEP: f32 = 0.75;

/// Software raster surface backed by an RGBA image.
pub struct RasterSurface {
    img: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { img: RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255])) }
    }

    /// Raw RGBA8 pixels, row-major, stride = width * 4.
    pub fn as_rgba8(&self) -> &[u8] {
        self.img.as_raw()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let p = self.img.get_pixel(x, y).0;
        Color::from_argb(p[3], p[0], p[1], p[2])
    }

    pub fn to_png_bytes(&self) -> image::ImageResult<Vec<u8>> {
        let mut bytes = Cursor::new(Vec::new());
        self.img.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent).map_err(image::ImageError::IoError)?;
        }
        self.img.save_with_format(path, ImageFormat::Png)
    }

    fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let dst = self.img.get_pixel_mut(x as u32, y as u32);
        if color.a == 255 {
            *dst = Rgba([color.r, color.g, color.b, 255]);
            return;
        }
        let a = color.a as u32;
        let inv = 255 - a;
        let mix = |s: u8, d: u8| -> u8 { ((s as u32 * a + d as u32 * inv) / 255) as u8 };
        let d = dst.0;
        *dst = Rgba([mix(color.r, d[0]), mix(color.g, d[1]), mix(color.b, d[2]), 255]);
    }

    /// Stamp a filled disc; the building block for strokes and round markers.
    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        let r = radius.max(0.5);
        let x0 = (cx - r).floor() as i64;
        let x1 = (cx + r).ceil() as i64;
        let y0 = (cy - r).floor() as i64;
        let y1 = (cy + r).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r * r {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Walk one segment, honoring the dash pattern; `pattern_pos` carries the
    /// dash phase across segments so corners do not restart the pattern.
    fn stroke_segment(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        stroke: &Stroke,
        pattern_pos: &mut f32,
    ) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let len = (dx * dx + dy * dy).sqrt();
        let radius = (stroke.width * 0.5).max(0.5);
        let pattern = stroke.style.dash_pattern();

        if len < f32::EPSILON {
            if dash_on(pattern, *pattern_pos) {
                self.stamp_disc(from.0, from.1, radius, stroke.color);
            }
            return;
        }

        let steps = (len / STROKE_STEP).ceil() as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            if dash_on(pattern, *pattern_pos + len * t) {
                self.stamp_disc(from.0 + dx * t, from.1 + dy * t, radius, stroke.color);
            }
        }
        *pattern_pos += len;
    }
}

/// Whether a point `pos` pixels along the stroke falls on an "on" run.
fn dash_on(pattern: Option<&'static [f32]>, pos: f32) -> bool {
    let Some(pattern) = pattern else {
        return true;
    };
    let total: f32 = pattern.iter().sum();
    let mut p = pos % total;
    for (i, &run) in pattern.iter().enumerate() {
        if p < run {
            return i % 2 == 0;
        }
        p -= run;
    }
    true
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.img.width()
    }

    fn height(&self) -> u32 {
        self.img.height()
    }

    fn clear(&mut self, color: Color) {
        for px in self.img.pixels_mut() {
            *px = Rgba([color.r, color.g, color.b, color.a]);
        }
    }

    fn draw_polyline(&mut self, points: &[(f32, f32)], stroke: &Stroke) {
        if points.len() < 2 || stroke.width <= 0.0 {
            return;
        }
        let mut pattern_pos = 0.0f32;
        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1], stroke, &mut pattern_pos);
        }
    }

    fn draw_markers(&mut self, points: &[(f32, f32)], shape: MarkerShape, size: f32, color: Color) {
        if shape == MarkerShape::None || size <= 0.0 {
            return;
        }
        let half = size * 0.5;
        for &(x, y) in points {
            match shape {
                MarkerShape::None => {}
                MarkerShape::FilledCircle => self.stamp_disc(x, y, half, color),
                MarkerShape::OpenCircle => {
                    // Ring: outer disc minus an inner hole one pixel smaller.
                    let outer = half;
                    let inner = (half - 1.2).max(0.0);
                    let x0 = (x - outer).floor() as i64;
                    let x1 = (x + outer).ceil() as i64;
                    let y0 = (y - outer).floor() as i64;
                    let y1 = (y + outer).ceil() as i64;
                    for py in y0..=y1 {
                        for px in x0..=x1 {
                            let dx = px as f32 + 0.5 - x;
                            let dy = py as f32 + 0.5 - y;
                            let d2 = dx * dx + dy * dy;
                            if d2 <= outer * outer && d2 >= inner * inner {
                                self.blend_pixel(px, py, color);
                            }
                        }
                    }
                }
                MarkerShape::FilledSquare => {
                    self.fill_rect(x - half, y - half, x + half, y + half, color);
                }
                MarkerShape::Cross => {
                    let stroke = Stroke {
                        color,
                        width: 1.0,
                        style: plot_core::LineStyle::Solid,
                        anti_alias: false,
                    };
                    self.draw_polyline(&[(x - half, y), (x + half, y)], &stroke);
                    self.draw_polyline(&[(x, y - half), (x, y + half)], &stroke);
                }
            }
        }
    }

    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, color: Color) {
        let x0 = left.round() as i64;
        let x1 = right.round() as i64;
        let y0 = top.round() as i64;
        let y1 = bottom.round() as i64;
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend_pixel(x, y, color);
            }
        }
    }

    fn fill_wedge(&mut self, cx: f32, cy: f32, radius: f32, start_deg: f32, sweep_deg: f32, color: Color) {
        if sweep_deg <= 0.0 || radius <= 0.0 {
            return;
        }
        let end_deg = start_deg + sweep_deg;
        let x0 = (cx - radius).floor() as i64;
        let x1 = (cx + radius).ceil() as i64;
        let y0 = (cy - radius).floor() as i64;
        let y1 = (cy + radius).ceil() as i64;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                // Clockwise angle from 12 o'clock.
                let mut angle = dx.atan2(-dy).to_degrees();
                if angle < 0.0 {
                    angle += 360.0;
                }
                if angle >= start_deg && angle < end_deg {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }
}
