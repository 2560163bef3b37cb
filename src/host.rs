//! The view an engine is attached to.

use crate::foundation::core::{LayoutDirection, LineGeometry, Rgba8, Viewport};
use crate::foundation::error::HTextResult;
use crate::text::style::{FontRef, StyleProvider};

/// Host view queried by the engine.
///
/// The engine reads style, size and line geometry, and pushes only two things back: the text
/// to lay out and redraw requests.
pub trait HostView: StyleProvider {
    /// Text the host currently holds.
    fn text(&self) -> String;

    /// Replace the host's text; the host lays it out on its own schedule.
    fn set_text(&mut self, text: &str);

    /// View size.
    fn viewport(&self) -> Viewport;

    /// Layout direction of the text.
    fn layout_direction(&self) -> LayoutDirection {
        LayoutDirection::Ltr
    }

    /// Geometry of the first laid-out line; `Ok(None)` before any layout.
    fn first_line(&self) -> HTextResult<Option<LineGeometry>>;

    /// Baseline y of the first line.
    fn baseline(&self) -> f32;

    /// Ask for another frame.
    fn request_redraw(&mut self);
}

/// Host without a window, for offscreen frame generation and tests.
///
/// Every field is plain data; `redraw_requests` counts calls to
/// [`HostView::request_redraw`].
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    /// Current text.
    pub text: String,
    /// Text size in pixels.
    pub size: f32,
    /// Text color.
    pub color: Rgba8,
    /// Font handle.
    pub font: FontRef,
    /// Horizontal glyph scale.
    pub scale_x: f32,
    /// Letter spacing in em.
    pub letter_spacing: f32,
    /// View size.
    pub viewport: Viewport,
    /// Layout direction.
    pub direction: LayoutDirection,
    /// First line geometry, `None` until "laid out".
    pub line: Option<LineGeometry>,
    /// Baseline y.
    pub baseline: f32,
    /// Number of redraw requests received.
    pub redraw_requests: u64,
}

impl HeadlessHost {
    /// Host holding `text` at `size` px, laid out from x = 0 across a `width`-wide view.
    pub fn new(text: impl Into<String>, size: f32, width: f32) -> Self {
        Self {
            text: text.into(),
            size,
            color: Rgba8::BLACK,
            font: FontRef::Default,
            scale_x: 1.0,
            letter_spacing: 0.0,
            viewport: Viewport {
                width,
                height: size * 2.0,
            },
            direction: LayoutDirection::Ltr,
            line: Some(LineGeometry {
                left: 0.0,
                right: width,
            }),
            baseline: size,
            redraw_requests: 0,
        }
    }
}

impl StyleProvider for HeadlessHost {
    fn text_size(&self) -> f32 {
        self.size
    }

    fn text_color(&self) -> Rgba8 {
        self.color
    }

    fn font(&self) -> FontRef {
        self.font.clone()
    }

    fn text_scale_x(&self) -> f32 {
        self.scale_x
    }

    fn letter_spacing(&self) -> f32 {
        self.letter_spacing
    }
}

impl HostView for HeadlessHost {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    fn first_line(&self) -> HTextResult<Option<LineGeometry>> {
        Ok(self.line)
    }

    fn baseline(&self) -> f32 {
        self.baseline
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
