/// RGBA colour used by the SVG canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Grey level in `[0, 1]`, the way style sheets write `".8"`.
    pub fn grey(level: f64) -> Self {
        let v = (level.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgb(v, v, v)
    }

    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

// --- Palettes ---

/// Muted categorical palette ("deep").
pub const DEEP: [Color; 10] = [
    Color::rgb(76, 114, 176),
    Color::rgb(221, 132, 82),
    Color::rgb(85, 168, 104),
    Color::rgb(196, 78, 82),
    Color::rgb(129, 114, 179),
    Color::rgb(147, 120, 96),
    Color::rgb(218, 139, 195),
    Color::rgb(140, 140, 140),
    Color::rgb(204, 185, 116),
    Color::rgb(100, 181, 205),
];

/// Colour for the `index`-th category level; cycles past the palette length.
pub fn palette_color(palette: &[Color], index: usize) -> Color {
    if palette.is_empty() {
        return Color::default();
    }
    palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_starts_with_blue() {
        assert_eq!(DEEP[0].to_svg_fill(), "#4c72b0");
        assert_eq!(DEEP[3].to_svg_fill(), "#c44e52");
    }

    #[test]
    fn svg_fill_opaque() {
        assert_eq!(Color::rgb(29, 78, 216).to_svg_fill(), "#1d4ed8");
        assert_eq!(Color::grey(0.8).to_svg_fill(), "#cccccc");
    }

    #[test]
    fn svg_fill_alpha() {
        let c = Color::rgb(29, 78, 216).with_alpha(0.5);
        assert_eq!(c.to_svg_fill(), "rgba(29,78,216,0.500)");
    }

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(&DEEP, 0), DEEP[0]);
        assert_eq!(palette_color(&DEEP, 12), DEEP[2]);
        assert_eq!(palette_color(&[], 3), Color::default());
    }
}
