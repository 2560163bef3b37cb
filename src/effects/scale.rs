use std::time::Duration;

use crate::effects::diff::slide_x;
use crate::effects::stagger::{PreparedGlyphs, StaggerTiming};
use crate::effects::{Frame, FrameGeometry, Variant, emit};
use crate::foundation::core::Point;
use crate::render::surface::{DrawSurface, GlyphDraw};
use crate::text::metrics::GlyphMeasure;
use crate::transition::state::{Generation, TransitionState};

/// Old characters shrink away in place while new ones grow in, staggered left to right.
#[derive(Clone, Debug)]
pub struct Scale {
    timing: StaggerTiming,
    geometry: FrameGeometry,
    prepared: PreparedGlyphs,
}

impl Scale {
    /// 400 ms per character, 20 characters per character-time.
    pub const DEFAULT_TIMING: StaggerTiming = StaggerTiming {
        char_time_ms: 400.0,
        most_count: 20,
    };

    /// Scale with custom timing.
    pub fn new(timing: StaggerTiming) -> Self {
        Self {
            timing,
            geometry: FrameGeometry::default(),
            prepared: PreparedGlyphs::default(),
        }
    }

    /// Timing in use.
    pub fn timing(&self) -> StaggerTiming {
        self.timing
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMING)
    }
}

impl Variant for Scale {
    fn name(&self) -> &'static str {
        "scale"
    }

    fn init_variables(&mut self, geometry: &FrameGeometry) {
        self.geometry = *geometry;
    }

    fn animate_prepare(&mut self, state: &TransitionState, measure: &mut dyn GlyphMeasure) {
        // Scale never moves glyphs vertically; the height is only kept for parity.
        let fallback = if self.geometry.text_size > 0.0 {
            self.geometry.text_size
        } else {
            state.new_style().size
        };
        self.prepared = PreparedGlyphs::prepare(state, measure, fallback);
    }

    fn animate_start(&mut self, state: &TransitionState) -> Duration {
        self.timing.duration(state.new_chars().len())
    }

    fn draw_frame(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) {
        let state = frame.state;
        let p = state.progress();
        let y = f64::from(frame.baseline);
        let old = state.old_chars();
        let new = state.new_chars();

        for i in 0..old.len().max(new.len()) {
            if let Some(&ch) = old.get(i) {
                let style = state.old_style();
                let glyph = match self.prepared.diff.need_move(i) {
                    Some(to) => GlyphDraw {
                        ch,
                        index: i,
                        generation: Generation::Old,
                        origin: Point::new(f64::from(slide_x(state, i, to)), y),
                        size: style.size,
                        color: style.color,
                    },
                    None => {
                        let k = 1.0 - p;
                        let slot = state.old_widths().get(i);
                        let x = state.slot_x(Generation::Old, i)
                            + self.prepared.centering(Generation::Old, i, slot, k);
                        GlyphDraw {
                            ch,
                            index: i,
                            generation: Generation::Old,
                            origin: Point::new(f64::from(x), y),
                            size: style.size * k,
                            color: style.color.fade(k),
                        }
                    }
                };
                emit(surface, glyph, style);
            }

            if let Some(&ch) = new.get(i)
                && !self.prepared.diff.stays(i)
            {
                let style = state.new_style();
                let k = self.timing.char_fraction(p, new.len(), i);
                let slot = state.new_widths().get(i);
                let x = state.slot_x(Generation::New, i)
                    + self.prepared.centering(Generation::New, i, slot, k);
                let glyph = GlyphDraw {
                    ch,
                    index: i,
                    generation: Generation::New,
                    origin: Point::new(f64::from(x), y),
                    size: style.size * k,
                    color: style.color.fade(k),
                };
                emit(surface, glyph, style);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/scale.rs"]
mod tests;
