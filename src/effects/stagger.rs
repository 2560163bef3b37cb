use std::time::Duration;

use crate::effects::diff::CharDiff;
use crate::foundation::core::clamp_unit;
use crate::text::metrics::{GlyphMeasure, measure_with};
use crate::transition::state::{Generation, TransitionState};

/// Per-character staggered reveal timing.
///
/// Character `i` starts `char_time / most_count * i` into the ramp and takes `char_time` to
/// fully appear; the ramp lasts until the last character is done.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerTiming {
    /// Reveal time of a single character, in milliseconds.
    pub char_time_ms: f64,
    /// Number of characters whose reveal windows fit in one `char_time`.
    pub most_count: u32,
}

impl StaggerTiming {
    fn step_ms(&self) -> f64 {
        self.char_time_ms / f64::from(self.most_count.max(1))
    }

    /// Ramp length in milliseconds for a text of `len` chars (at least one char's worth).
    pub fn duration_ms(&self, len: usize) -> f64 {
        let n = len.max(1) as f64;
        self.char_time_ms + self.step_ms() * (n - 1.0)
    }

    /// Ramp length for a text of `len` chars, saturating at [`Duration::MAX`].
    pub fn duration(&self, len: usize) -> Duration {
        let ms = self.duration_ms(len);
        if ms.is_nan() || ms <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
    }

    /// How far character `i`'s own reveal window has run at `progress`, in `[0, 1]`.
    pub fn char_fraction(&self, progress: f32, len: usize, i: usize) -> f32 {
        if self.char_time_ms <= 0.0 {
            return clamp_unit(progress);
        }
        let t = f64::from(progress) * self.duration_ms(len);
        let start = self.step_ms() * i as f64;
        clamp_unit(((t - start) / self.char_time_ms) as f32)
    }
}

/// Per-transition data shared by the staggered variants.
#[derive(Clone, Debug, Default)]
pub struct PreparedGlyphs {
    /// Old/new character pairing.
    pub diff: CharDiff,
    /// Width of each old char measured on its own.
    pub old_isolated: Vec<f32>,
    /// Width of each new char measured on its own.
    pub new_isolated: Vec<f32>,
    /// Vertical travel distance for rising/falling glyphs.
    pub text_height: f32,
}

impl PreparedGlyphs {
    /// Diff the generations and measure every character in isolation.
    ///
    /// `fallback_height` is used when the backend cannot report a text height.
    pub fn prepare(
        state: &TransitionState,
        measure: &mut dyn GlyphMeasure,
        fallback_height: f32,
    ) -> Self {
        let diff = CharDiff::compute(state.old_chars(), state.new_chars());
        let old_isolated = isolated_widths(state, Generation::Old, measure);
        let new_isolated = isolated_widths(state, Generation::New, measure);
        let text_height = match measure.text_height(state.new_text(), state.new_style()) {
            Ok(h) if h.is_finite() => h,
            Ok(_) => fallback_height,
            Err(err) => {
                tracing::warn!(error = %err, "text height unavailable; using fallback");
                fallback_height
            }
        };

        Self {
            diff,
            old_isolated,
            new_isolated,
            text_height,
        }
    }

    /// Offset that centres char `i`, drawn at `scale` of its snapshot size, in its slot.
    pub fn centering(&self, generation: Generation, i: usize, slot: f32, scale: f32) -> f32 {
        let isolated = match generation {
            Generation::Old => self.old_isolated.get(i),
            Generation::New => self.new_isolated.get(i),
        }
        .copied()
        .unwrap_or(slot);
        (slot - isolated * scale) / 2.0
    }
}

fn isolated_widths(
    state: &TransitionState,
    generation: Generation,
    measure: &mut dyn GlyphMeasure,
) -> Vec<f32> {
    let (chars, widths, style) = match generation {
        Generation::Old => (state.old_chars(), state.old_widths(), state.old_style()),
        Generation::New => (state.new_chars(), state.new_widths(), state.new_style()),
    };
    let mut buf = [0u8; 4];
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let single: &str = c.encode_utf8(&mut buf);
            match measure_with(&mut *measure, single, style) {
                Ok(w) => w.get(0),
                Err(_) => widths.get(i),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/stagger.rs"]
mod tests;
