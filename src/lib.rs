//! HText is a per-character text transition engine.
//!
//! An engine attaches to a host view, keeps the previous and the next text with their glyph
//! widths, and asks a pluggable effect to draw every frame in between:
//!
//! - Attach an [`HText`] to a [`HostView`]
//! - Call [`HText::animate_text`] to morph to a new string
//! - Drive the ramp with [`HText::tick`] and paint with [`HText::on_draw`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Progress ramp and easing.
pub mod animation;
/// Engine configuration.
pub mod config;
pub mod effects;
/// Host-facing engine.
pub mod engine;
/// Shared value types and errors.
pub mod foundation;
pub mod host;
/// Glyph draw sinks.
pub mod render;
/// Text style and glyph measurement.
pub mod text;
/// Old/new text generations.
pub mod transition;

pub use crate::animation::controller::{AnimationController, RampState, Tick};
pub use crate::animation::ease::Ease;
pub use crate::config::{EngineConfig, VariantConfig};
pub use crate::effects::stagger::StaggerTiming;
pub use crate::effects::{Evaporate, Frame, FrameGeometry, Scale, Variant};
pub use crate::engine::{AnimationListener, HText};
pub use crate::foundation::core::{LayoutDirection, LineGeometry, Point, Rgba8, Viewport};
pub use crate::foundation::error::{HTextError, HTextResult};
pub use crate::host::{HeadlessHost, HostView};
pub use crate::render::surface::{DrawSurface, GlyphDraw, RecordedFrame, RecordingSurface};
pub use crate::text::metrics::{
    GlyphMeasure, GlyphWidths, HeuristicMeasure, TableMeasure, measure_with,
};
pub use crate::text::parley_measure::ParleyMeasure;
pub use crate::text::style::{FontRef, StyleProvider, StyleSnapshot};
pub use crate::transition::state::{Generation, TransitionId, TransitionState};
