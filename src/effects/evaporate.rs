use std::time::Duration;

use crate::effects::diff::slide_x;
use crate::effects::stagger::{PreparedGlyphs, StaggerTiming};
use crate::effects::{Frame, FrameGeometry, Variant, emit};
use crate::foundation::core::Point;
use crate::render::surface::{DrawSurface, GlyphDraw};
use crate::text::metrics::GlyphMeasure;
use crate::transition::state::{Generation, TransitionState};

/// Old characters float up and fade away while new ones rise into place one after another.
///
/// Characters shared by both texts slide from their old slot to their new slot instead.
#[derive(Clone, Debug)]
pub struct Evaporate {
    timing: StaggerTiming,
    geometry: FrameGeometry,
    prepared: PreparedGlyphs,
}

impl Evaporate {
    /// 300 ms per character, 20 characters per character-time.
    pub const DEFAULT_TIMING: StaggerTiming = StaggerTiming {
        char_time_ms: 300.0,
        most_count: 20,
    };

    /// Evaporate with custom timing.
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

    fn fallback_height(&self, state: &TransitionState) -> f32 {
        if self.geometry.text_size > 0.0 {
            self.geometry.text_size
        } else {
            state.new_style().size
        }
    }
}

impl Default for Evaporate {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TIMING)
    }
}

impl Variant for Evaporate {
    fn name(&self) -> &'static str {
        "evaporate"
    }

    fn init_variables(&mut self, geometry: &FrameGeometry) {
        self.geometry = *geometry;
    }

    fn animate_prepare(&mut self, state: &TransitionState, measure: &mut dyn GlyphMeasure) {
        let fallback = self.fallback_height(state);
        self.prepared = PreparedGlyphs::prepare(state, measure, fallback);
    }

    fn animate_start(&mut self, state: &TransitionState) -> Duration {
        self.timing.duration(state.new_chars().len())
    }

    fn draw_frame(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface) {
        let state = frame.state;
        let p = state.progress();
        let rise = self.prepared.text_height;
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
                        origin: Point::new(
                            f64::from(slide_x(state, i, to)),
                            f64::from(frame.baseline),
                        ),
                        size: style.size,
                        color: style.color,
                    },
                    None => {
                        let slot = state.old_widths().get(i);
                        let x = state.slot_x(Generation::Old, i)
                            + self.prepared.centering(Generation::Old, i, slot, 1.0);
                        GlyphDraw {
                            ch,
                            index: i,
                            generation: Generation::Old,
                            origin: Point::new(f64::from(x), f64::from(frame.baseline - p * rise)),
                            size: style.size,
                            color: style.color.fade(1.0 - p),
                        }
                    }
                };
                emit(surface, glyph, style);
            }

            if let Some(&ch) = new.get(i)
                && !self.prepared.diff.stays(i)
            {
                let style = state.new_style();
                let alpha = self.timing.char_fraction(p, new.len(), i);
                let slot = state.new_widths().get(i);
                let x = state.slot_x(Generation::New, i)
                    + self.prepared.centering(Generation::New, i, slot, 1.0);
                let y = frame.baseline + rise - p * rise;
                let glyph = GlyphDraw {
                    ch,
                    index: i,
                    generation: Generation::New,
                    origin: Point::new(f64::from(x), f64::from(y)),
                    size: style.size,
                    color: style.color.fade(alpha),
                };
                emit(surface, glyph, style);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/evaporate.rs"]
mod tests;
