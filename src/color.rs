// Simple color struct with fractional opacity, serialized as a CSS
// rgba() string for canvas fill/stroke styles

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// The three translucent colors particles are drawn in, picked uniformly
/// at spawn time.
pub const PALETTE: [Color; 3] = [
    Color { r: 108, g: 99, b: 255, a: 0.5 },
    Color { r: 255, g: 101, b: 132, a: 0.5 },
    Color { r: 54, g: 209, b: 220, a: 0.5 },
];

/// Base color of the connection lines; the alpha here is the opacity at
/// zero distance and fades out with separation.
pub const LINK_COLOR: Color = Color { r: 108, g: 99, b: 255, a: 0.2 };

impl Color {
    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Same color with a different opacity.
    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}
