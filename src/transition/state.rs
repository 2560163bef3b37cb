use crate::foundation::core::{LayoutDirection, clamp_unit};
use crate::text::metrics::{GlyphMeasure, GlyphWidths, measure_with};
use crate::text::style::StyleSnapshot;

/// Generation number of a transition, increasing with every `animate_text`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct TransitionId(pub u64);

/// Which generation of text a glyph belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    /// The text being replaced.
    Old,
    /// The text being revealed.
    New,
}

/// The two text generations a transition morphs between, with their measurements.
///
/// Only one prior generation is kept: every [`begin_transition`](Self::begin_transition)
/// overwrites the old text with the previous new text.
#[derive(Clone, Debug)]
pub struct TransitionState {
    id: TransitionId,
    new_text: String,
    old_text: String,
    new_chars: Vec<char>,
    old_chars: Vec<char>,
    new_widths: GlyphWidths,
    old_widths: GlyphWidths,
    new_style: StyleSnapshot,
    old_style: StyleSnapshot,
    progress: f32,
    start_offset_x: f32,
    old_start_offset_x: f32,
    direction: LayoutDirection,
    old_direction: LayoutDirection,
}

impl TransitionState {
    /// Initial state: `text` is current, nothing is being replaced, progress is 1.
    pub fn new<M: GlyphMeasure + ?Sized>(
        text: &str,
        style: StyleSnapshot,
        measure: &mut M,
        direction: LayoutDirection,
    ) -> Self {
        let new_widths = measure_or_zeros(measure, text, &style);
        Self {
            id: TransitionId(0),
            new_text: text.to_owned(),
            old_text: String::new(),
            new_chars: text.chars().collect(),
            old_chars: Vec::new(),
            new_widths,
            old_widths: GlyphWidths::default(),
            old_style: style.clone(),
            new_style: style,
            progress: 1.0,
            start_offset_x: 0.0,
            old_start_offset_x: 0.0,
            direction,
            old_direction: direction,
        }
    }

    /// Shift the current text to the old slot and install `text` as the new one.
    ///
    /// Both width sequences are re-measured, each with its own generation's snapshot.
    /// `leading` is the leading edge of the freshly laid-out line, `None` when the host has no
    /// layout yet. Progress is reset to 0.
    pub fn begin_transition<M: GlyphMeasure + ?Sized>(
        &mut self,
        id: TransitionId,
        text: &str,
        style: StyleSnapshot,
        measure: &mut M,
        leading: Option<f32>,
        direction: LayoutDirection,
    ) {
        self.id = id;
        self.old_text = std::mem::replace(&mut self.new_text, text.to_owned());
        self.old_chars = std::mem::replace(&mut self.new_chars, text.chars().collect());
        self.old_style = std::mem::replace(&mut self.new_style, style);

        self.new_widths = measure_or_zeros(measure, &self.new_text, &self.new_style);
        self.old_widths = measure_or_zeros(measure, &self.old_text, &self.old_style);

        self.old_start_offset_x = self.start_offset_x;
        self.start_offset_x = leading.unwrap_or(0.0);
        self.old_direction = std::mem::replace(&mut self.direction, direction);
        self.progress = 0.0;
    }

    /// Re-measure both generations under `style` without changing text or progress.
    pub fn remeasure<M: GlyphMeasure + ?Sized>(&mut self, style: StyleSnapshot, measure: &mut M) {
        self.new_widths = measure_or_zeros(measure, &self.new_text, &style);
        self.old_widths = measure_or_zeros(measure, &self.old_text, &style);
        self.old_style = style.clone();
        self.new_style = style;
    }

    /// Pin both leading edges to `x`; used once the host's first layout is known.
    pub fn anchor_leading_edge(&mut self, x: f32) {
        self.start_offset_x = x;
        self.old_start_offset_x = x;
    }

    /// Set progress, clamped into `[0, 1]`.
    pub fn set_progress(&mut self, p: f32) {
        self.progress = clamp_unit(p);
    }

    /// Generation number of the current transition (0 before any).
    pub fn id(&self) -> TransitionId {
        self.id
    }

    /// Text being revealed.
    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    /// Text being replaced.
    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    /// Characters of the new text.
    pub fn new_chars(&self) -> &[char] {
        &self.new_chars
    }

    /// Characters of the old text.
    pub fn old_chars(&self) -> &[char] {
        &self.old_chars
    }

    /// Advance widths of the new text.
    pub fn new_widths(&self) -> &GlyphWidths {
        &self.new_widths
    }

    /// Advance widths of the old text.
    pub fn old_widths(&self) -> &GlyphWidths {
        &self.old_widths
    }

    /// Style the new text is measured and drawn with.
    pub fn new_style(&self) -> &StyleSnapshot {
        &self.new_style
    }

    /// Style the old text is measured and drawn with.
    pub fn old_style(&self) -> &StyleSnapshot {
        &self.old_style
    }

    /// Current progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Leading edge of the new text's line.
    pub fn start_offset_x(&self) -> f32 {
        self.start_offset_x
    }

    /// Leading edge the old text was laid out at.
    pub fn old_start_offset_x(&self) -> f32 {
        self.old_start_offset_x
    }

    /// Layout direction of the new text.
    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Layout direction the old text was laid out with.
    pub fn old_direction(&self) -> LayoutDirection {
        self.old_direction
    }

    /// Left x of character `i`'s slot in the given generation.
    ///
    /// LTR slots grow rightwards from the leading edge, RTL slots leftwards. Each generation
    /// keeps the direction it was laid out with.
    pub fn slot_x(&self, generation: Generation, i: usize) -> f32 {
        let (leading, widths, direction) = match generation {
            Generation::Old => (self.old_start_offset_x, &self.old_widths, self.old_direction),
            Generation::New => (self.start_offset_x, &self.new_widths, self.direction),
        };
        let before = widths.prefix(i);
        match direction {
            LayoutDirection::Ltr => leading + before,
            LayoutDirection::Rtl => leading - before - widths.get(i),
        }
    }
}

fn measure_or_zeros<M: GlyphMeasure + ?Sized>(
    measure: &mut M,
    text: &str,
    style: &StyleSnapshot,
) -> GlyphWidths {
    match measure_with(measure, text, style) {
        Ok(widths) => widths,
        Err(err) => {
            tracing::warn!(error = %err, "glyph measurement failed; using zero widths");
            GlyphWidths::zeros(text.chars().count())
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/state.rs"]
mod tests;
