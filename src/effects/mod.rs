//! Transition effect variants.
//!
//! A variant turns a [`TransitionState`] and its progress into glyph draw instructions. The
//! engine drives every variant through the same four hooks:
//!
//! 1. [`Variant::init_variables`] once, after the host's first layout pass;
//! 2. [`Variant::animate_prepare`] when a new text is installed;
//! 3. [`Variant::animate_start`] right after, to choose the ramp duration;
//! 4. [`Variant::draw_frame`] every time the host repaints.

use std::time::Duration;

use crate::foundation::core::{LayoutDirection, Viewport};
use crate::render::surface::{DrawSurface, GlyphDraw};
use crate::text::metrics::GlyphMeasure;
use crate::text::style::StyleSnapshot;
use crate::transition::state::TransitionState;

/// Character pairing between old and new text.
pub mod diff;
/// Rising evaporate effect.
pub mod evaporate;
/// Shrinking/growing scale effect.
pub mod scale;
/// Staggered per-character timing and shared per-transition data.
pub mod stagger;

pub use evaporate::Evaporate;
pub use scale::Scale;

/// Host geometry known after the first layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameGeometry {
    /// View size.
    pub viewport: Viewport,
    /// Host text size at first layout.
    pub text_size: f32,
    /// Leading edge of the first line at first layout.
    pub leading_x: f32,
    /// Layout direction at first layout.
    pub direction: LayoutDirection,
}

/// Everything a variant needs to draw one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Transition being drawn; progress included.
    pub state: &'a TransitionState,
    /// Host geometry, default until the first layout.
    pub geometry: FrameGeometry,
    /// Baseline y of the first line.
    pub baseline: f32,
}

/// A pluggable transition effect.
pub trait Variant: std::fmt::Debug {
    /// Stable effect name.
    fn name(&self) -> &'static str;

    /// Record host geometry; called exactly once after the first layout.
    fn init_variables(&mut self, geometry: &FrameGeometry);

    /// Precompute per-transition data for the state's current generations.
    fn animate_prepare(&mut self, state: &TransitionState, measure: &mut dyn GlyphMeasure);

    /// Ramp duration for the transition about to start.
    fn animate_start(&mut self, state: &TransitionState) -> Duration;

    /// Emit the glyphs of `frame` at its progress.
    fn draw_frame(&self, frame: &Frame<'_>, surface: &mut dyn DrawSurface);
}

/// Forward `glyph` unless it would be invisible.
pub(crate) fn emit(surface: &mut dyn DrawSurface, glyph: GlyphDraw, style: &StyleSnapshot) {
    if glyph.size.is_nan() || glyph.size <= 0.0 || glyph.color.a == 0 {
        return;
    }
    surface.draw_glyph(&glyph, style);
}
