//! The host-facing text transition engine.

use std::time::Duration;

use crate::animation::controller::{AnimationController, Tick};
use crate::animation::ease::Ease;
use crate::config::EngineConfig;
use crate::effects::{Frame, FrameGeometry, Variant};
use crate::host::HostView;
use crate::render::surface::DrawSurface;
use crate::text::metrics::{GlyphMeasure, HeuristicMeasure};
use crate::text::style::StyleSnapshot;
use crate::transition::state::{TransitionId, TransitionState};

/// Receives a call when a transition ramp finishes on its own.
pub trait AnimationListener {
    /// Transition `id` reached progress 1 by ticking.
    fn on_animation_end(&mut self, id: TransitionId);
}

impl<F: FnMut(TransitionId)> AnimationListener for F {
    fn on_animation_end(&mut self, id: TransitionId) {
        self(id)
    }
}

/// Text transition engine attached to one host view.
///
/// All calls happen on the host's UI thread. The engine never schedules work: the host calls
/// [`tick`](Self::tick) once per frame while [`is_animating`](Self::is_animating) and
/// [`on_draw`](Self::on_draw) whenever it repaints.
pub struct HText<H: HostView> {
    host: H,
    state: TransitionState,
    controller: AnimationController,
    variant: Box<dyn Variant>,
    measure: Box<dyn GlyphMeasure>,
    geometry: Option<FrameGeometry>,
    listener: Option<Box<dyn AnimationListener>>,
    next_id: u64,
}

impl<H: HostView> std::fmt::Debug for HText<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HText")
            .field("state", &self.state)
            .field("controller", &self.controller)
            .field("variant", &self.variant)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

impl<H: HostView> HText<H> {
    /// Attach to `host` with heuristic glyph measurement.
    pub fn init(host: H, config: &EngineConfig) -> Self {
        Self::init_with_measure(host, config, HeuristicMeasure::default())
    }

    /// Attach to `host`, measuring glyphs with `measure`.
    pub fn init_with_measure(
        host: H,
        config: &EngineConfig,
        measure: impl GlyphMeasure + 'static,
    ) -> Self {
        Self::from_parts(host, config.variant.build(), Box::new(measure), config.ease())
    }

    /// Attach to `host` with an explicit variant and measurement backend.
    ///
    /// The host's current text is installed as the new text with nothing to replace, so the
    /// first frame is static.
    pub fn from_parts(
        host: H,
        mut variant: Box<dyn Variant>,
        mut measure: Box<dyn GlyphMeasure>,
        ease: Ease,
    ) -> Self {
        let style = StyleSnapshot::capture(&host);
        let text = host.text();
        let state = TransitionState::new(&text, style, measure.as_mut(), host.layout_direction());
        variant.animate_prepare(&state, measure.as_mut());
        tracing::debug!(
            variant = variant.name(),
            chars = state.new_chars().len(),
            "htext init"
        );

        Self {
            host,
            state,
            controller: AnimationController::new(ease),
            variant,
            measure,
            geometry: None,
            listener: None,
            next_id: 1,
        }
    }

    /// Capture host geometry after its first layout pass and hand it to the variant.
    ///
    /// Only the first call has an effect.
    pub fn on_first_layout(&mut self) {
        if self.geometry.is_some() {
            tracing::trace!("first layout already captured");
            return;
        }

        let direction = self.host.layout_direction();
        let leading_x = self.query_leading_edge().unwrap_or(0.0);
        let geometry = FrameGeometry {
            viewport: self.host.viewport(),
            text_size: self.host.text_size(),
            leading_x,
            direction,
        };

        self.state.anchor_leading_edge(leading_x);
        self.variant.init_variables(&geometry);
        self.geometry = Some(geometry);
        tracing::debug!(
            width = geometry.viewport.width,
            height = geometry.viewport.height,
            leading_x,
            "first layout captured"
        );
    }

    /// Morph to `text`. `None` is treated as the empty string.
    ///
    /// With `animated == false` the transition is fully prepared but progress jumps straight
    /// to 1, so only the final state is ever drawn and no completion is reported.
    #[tracing::instrument(skip(self, text))]
    pub fn animate_text<'a>(
        &mut self,
        text: impl Into<Option<&'a str>>,
        animated: bool,
    ) -> TransitionId {
        let text = text.into().unwrap_or_default();
        self.host.set_text(text);

        let style = StyleSnapshot::capture(&self.host);
        let direction = self.host.layout_direction();
        let leading = if self.geometry.is_some() {
            self.query_leading_edge()
        } else {
            None
        };

        let id = TransitionId(self.next_id);
        self.next_id += 1;

        self.state.begin_transition(
            id,
            text,
            style,
            self.measure.as_mut(),
            leading,
            direction,
        );
        self.variant.animate_prepare(&self.state, self.measure.as_mut());
        let duration = self.variant.animate_start(&self.state);
        self.controller.start(duration);
        self.sync_progress();
        tracing::debug!(
            id = id.0,
            old = self.state.old_chars().len(),
            new = self.state.new_chars().len(),
            duration_ms = duration.as_millis() as u64,
            "transition started"
        );

        if animated {
            self.host.request_redraw();
        } else {
            self.set_progress(1.0);
        }
        id
    }

    /// Force progress to `p` (clamped into `[0, 1]`), stop any running ramp and redraw.
    ///
    /// Forcing progress never reports completion.
    pub fn set_progress(&mut self, p: f32) {
        self.controller.set_progress(p);
        self.sync_progress();
        self.host.request_redraw();
    }

    /// Register the completion listener, replacing any previous one.
    pub fn set_animation_listener(&mut self, listener: impl AnimationListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Advance the running ramp by `dt`.
    ///
    /// Returns the transition id on the tick the ramp completes; the listener, if any, is
    /// called with the same id.
    pub fn tick(&mut self, dt: Duration) -> Option<TransitionId> {
        match self.controller.tick(dt) {
            Tick::Idle => None,
            Tick::Advanced => {
                self.sync_progress();
                self.host.request_redraw();
                tracing::trace!(progress = self.state.progress(), "tick");
                None
            }
            Tick::Completed => {
                self.sync_progress();
                self.host.request_redraw();
                let id = self.state.id();
                tracing::debug!(id = id.0, "transition completed");
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_animation_end(id);
                }
                Some(id)
            }
        }
    }

    /// Draw the current frame onto `surface`.
    pub fn on_draw(&self, surface: &mut dyn DrawSurface) {
        let frame = Frame {
            state: &self.state,
            geometry: self.geometry.unwrap_or_default(),
            baseline: self.host.baseline(),
        };
        self.variant.draw_frame(&frame, surface);
    }

    /// Re-snapshot the host style and re-measure both generations.
    pub fn restyle(&mut self) {
        let style = StyleSnapshot::capture(&self.host);
        self.state.remeasure(style, self.measure.as_mut());
        self.variant.animate_prepare(&self.state, self.measure.as_mut());
        self.host.request_redraw();
    }

    /// Transition state, progress included.
    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    /// Current progress.
    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    /// `true` while a ramp is running.
    pub fn is_animating(&self) -> bool {
        self.controller.is_running()
    }

    /// Geometry captured at first layout.
    pub fn geometry(&self) -> Option<FrameGeometry> {
        self.geometry
    }

    /// Name of the active effect.
    pub fn variant_name(&self) -> &'static str {
        self.variant.name()
    }

    /// The attached host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The attached host, mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn sync_progress(&mut self) {
        self.state.set_progress(self.controller.progress());
    }

    fn query_leading_edge(&self) -> Option<f32> {
        let direction = self.host.layout_direction();
        match self.host.first_line() {
            Ok(line) => line.map(|l| l.leading_edge(direction)),
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "line geometry unavailable; leading edge defaults to 0"
                );
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
