use crate::foundation::core::{Point, Rgba8};
use crate::text::style::StyleSnapshot;
use crate::transition::state::Generation;

/// One glyph to draw this frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphDraw {
    /// Character to draw.
    pub ch: char,
    /// Index of the character within its generation's text.
    pub index: usize,
    /// Generation the character belongs to.
    pub generation: Generation,
    /// Left end of the glyph on its baseline.
    pub origin: Point,
    /// Text size to draw at.
    pub size: f32,
    /// Color with the frame's opacity folded into alpha.
    pub color: Rgba8,
}

/// Receives glyph draw instructions from a variant.
///
/// `style` is the snapshot of the glyph's generation, so implementations draw with the same
/// font, scale and spacing that produced the measurements.
pub trait DrawSurface {
    /// Draw one glyph.
    fn draw_glyph(&mut self, glyph: &GlyphDraw, style: &StyleSnapshot);
}

impl DrawSurface for Vec<GlyphDraw> {
    fn draw_glyph(&mut self, glyph: &GlyphDraw, _style: &StyleSnapshot) {
        self.push(glyph.clone());
    }
}

/// Surface that records every glyph it is asked to draw.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    glyphs: Vec<GlyphDraw>,
}

impl RecordingSurface {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Glyphs recorded since the last [`take`](Self::take).
    pub fn glyphs(&self) -> &[GlyphDraw] {
        &self.glyphs
    }

    /// Drain the recorded glyphs.
    pub fn take(&mut self) -> Vec<GlyphDraw> {
        std::mem::take(&mut self.glyphs)
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_glyph(&mut self, glyph: &GlyphDraw, _style: &StyleSnapshot) {
        self.glyphs.push(glyph.clone());
    }
}

/// A frame captured by a [`RecordingSurface`] at a given progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RecordedFrame {
    /// Progress the frame was drawn at.
    pub progress: f32,
    /// Glyphs drawn, in draw order.
    pub glyphs: Vec<GlyphDraw>,
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
