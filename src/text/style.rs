use std::sync::Arc;

use crate::foundation::core::Rgba8;

/// Opaque font handle.
///
/// Two handles are equal when they are both the host default or share the same font bytes.
#[derive(Clone, Debug, Default)]
pub enum FontRef {
    /// Whatever the host draws with by default.
    #[default]
    Default,
    /// Raw TTF/OTF bytes, shared between snapshots.
    Bytes(Arc<[u8]>),
}

impl FontRef {
    /// Wrap owned font bytes.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Font bytes, if any.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Default => None,
            Self::Bytes(b) => Some(b),
        }
    }
}

impl PartialEq for FontRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Default, Self::Default) => true,
            (Self::Bytes(a), Self::Bytes(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Style values the host exposes for its current text paint.
pub trait StyleProvider {
    /// Text size in pixels.
    fn text_size(&self) -> f32;
    /// Current text color.
    fn text_color(&self) -> Rgba8;
    /// Current font.
    fn font(&self) -> FontRef;
    /// Horizontal glyph scale.
    fn text_scale_x(&self) -> f32 {
        1.0
    }
    /// Extra spacing between characters, in em.
    fn letter_spacing(&self) -> f32 {
        0.0
    }
}

/// Immutable style captured for one generation of text.
///
/// The same snapshot is used to measure a string and to draw it, so animated glyph positions
/// line up with the final static rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleSnapshot {
    /// Text size in pixels.
    pub size: f32,
    /// Text color.
    pub color: Rgba8,
    /// Font handle.
    pub font: FontRef,
    /// Horizontal glyph scale (1 = unscaled).
    pub scale_x: f32,
    /// Extra per-character spacing in em.
    pub letter_spacing: f32,
}

impl StyleSnapshot {
    /// Snapshot the host's current style.
    ///
    /// Non-finite or negative sizes become 0, a non-positive or non-finite `scale_x` becomes 1,
    /// and a non-finite letter spacing becomes 0.
    pub fn capture<P: StyleProvider + ?Sized>(provider: &P) -> Self {
        let size = provider.text_size();
        let scale_x = provider.text_scale_x();
        let letter_spacing = provider.letter_spacing();
        Self {
            size: if size.is_finite() && size > 0.0 {
                size
            } else {
                0.0
            },
            color: provider.text_color(),
            font: provider.font(),
            scale_x: if scale_x.is_finite() && scale_x > 0.0 {
                scale_x
            } else {
                1.0
            },
            letter_spacing: if letter_spacing.is_finite() {
                letter_spacing
            } else {
                0.0
            },
        }
    }

    /// Turn an unspaced, unscaled advance into the advance this style draws with.
    pub fn styled_advance(&self, advance: f32) -> f32 {
        (advance + self.letter_spacing * self.size) * self.scale_x
    }
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Rgba8::BLACK,
            font: FontRef::Default,
            scale_x: 1.0,
            letter_spacing: 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/style.rs"]
mod tests;
