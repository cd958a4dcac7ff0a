// File: crates/plot-core/src/palette.rs
// Summary: Ordered, cyclic color sequences for automatic series coloring.

use crate::types::Color;

/// Ordered, finite color sequence indexed modulo its length, so any index is
/// valid and lookups are deterministic.
#[derive(Clone, Debug)]
pub struct Palette {
    pub name: &'static str,
    colors: Vec<Color>,
}

impl Palette {
    /// The Category10 palette (matplotlib/d3 default): ten colors chosen so
    /// adjacent series remain distinguishable.
    pub fn category10() -> Self {
        Self {
            name: "category10",
            colors: vec![
                Color::from_rgb(0x1f, 0x77, 0xb4),
                Color::from_rgb(0xff, 0x7f, 0x0e),
                Color::from_rgb(0x2c, 0xa0, 0x2c),
                Color::from_rgb(0xd6, 0x27, 0x28),
                Color::from_rgb(0x94, 0x67, 0xbd),
                Color::from_rgb(0x8c, 0x56, 0x4b),
                Color::from_rgb(0xe3, 0x77, 0xc2),
                Color::from_rgb(0x7f, 0x7f, 0x7f),
                Color::from_rgb(0xbc, 0xbd, 0x22),
                Color::from_rgb(0x17, 0xbe, 0xcf),
            ],
        }
    }

    /// Brighter variant suited to dark backgrounds.
    pub fn dark() -> Self {
        Self {
            name: "dark",
            colors: vec![
                Color::from_rgb(0x40, 0xa0, 0xff),
                Color::from_rgb(0xff, 0xb0, 0x30),
                Color::from_rgb(0x28, 0xc8, 0x78),
                Color::from_rgb(0xff, 0x60, 0x60),
                Color::from_rgb(0xc0, 0x90, 0xff),
                Color::from_rgb(0xd0, 0xa0, 0x70),
                Color::from_rgb(0xff, 0x90, 0xd0),
                Color::from_rgb(0xb0, 0xb0, 0xb8),
                Color::from_rgb(0xd8, 0xd8, 0x40),
                Color::from_rgb(0x30, 0xd8, 0xe8),
            ],
        }
    }

    /// Caller-supplied sequence. An empty sequence falls back to category10 so
    /// `get_color` can never fail.
    pub fn custom(colors: Vec<Color>) -> Self {
        if colors.is_empty() {
            return Self::category10();
        }
        Self { name: "custom", colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `index`, wrapping modulo the palette length.
    pub fn get_color(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::category10()
    }
}
