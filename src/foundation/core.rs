pub use kurbo::Point;

/// Straight-alpha RGBA8 color as the host reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Replace the alpha channel.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Scale the existing alpha by `opacity` in `[0, 1]`.
    pub fn fade(self, opacity: f32) -> Self {
        let a = (f32::from(self.a) * clamp_unit(opacity)).round() as u8;
        self.with_alpha(a)
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Horizontal layout direction of the host line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Left-to-right: the leading edge is the line's left.
    #[default]
    Ltr,
    /// Right-to-left: the leading edge is the line's right.
    Rtl,
}

/// Horizontal extent of one laid-out line.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineGeometry {
    /// Left x-coordinate of the line's ink.
    pub left: f32,
    /// Right x-coordinate of the line's ink.
    pub right: f32,
}

impl LineGeometry {
    /// Leading edge for `dir`: left for LTR, right for RTL.
    pub fn leading_edge(self, dir: LayoutDirection) -> f32 {
        match dir {
            LayoutDirection::Ltr => self.left,
            LayoutDirection::Rtl => self.right,
        }
    }
}

/// Host view size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Clamp `v` into `[0, 1]`; NaN maps to 0.
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
