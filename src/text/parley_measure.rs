use crate::foundation::error::{HTextError, HTextResult};
use crate::text::metrics::{GlyphMeasure, GlyphWidths};
use crate::text::style::{FontRef, StyleSnapshot};

/// Glyph measurement backed by Parley shaping.
///
/// Fonts come from [`FontRef::Bytes`]; no system font source is compiled in, so
/// [`FontRef::Default`] is a measurement error. Registered families are cached per font handle.
pub struct ParleyMeasure {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    families: Vec<(FontRef, String)>,
}

impl Default for ParleyMeasure {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParleyMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyMeasure")
            .field("families", &self.families.len())
            .finish_non_exhaustive()
    }
}

impl ParleyMeasure {
    /// Fresh Parley contexts with no registered fonts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: Vec::new(),
        }
    }

    fn family_for(&mut self, font: &FontRef) -> HTextResult<String> {
        if let Some((_, name)) = self.families.iter().find(|(f, _)| f == font) {
            return Ok(name.clone());
        }

        let bytes = font.bytes().ok_or_else(|| {
            HTextError::measurement("parley measurement requires font bytes")
        })?;

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            HTextError::measurement("no font families registered from font bytes")
        })?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| HTextError::measurement("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family_name, "registered font for measurement");
        self.families.push((font.clone(), family_name.clone()));
        Ok(family_name)
    }

    fn layout(&mut self, text: &str, style: &StyleSnapshot) -> HTextResult<parley::Layout<()>> {
        if !style.size.is_finite() || style.size <= 0.0 {
            return Err(HTextError::measurement(
                "text size must be finite and > 0",
            ));
        }

        let family_name = self.family_for(&style.font)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size));
        builder.push_default(parley::style::StyleProperty::LetterSpacing(
            style.letter_spacing * style.size,
        ));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

impl GlyphMeasure for ParleyMeasure {
    fn measure(&mut self, text: &str, style: &StyleSnapshot) -> HTextResult<GlyphWidths> {
        let layout = self.layout(text, style)?;

        // Byte offset of every char, to map cluster text ranges onto char indices.
        let starts: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        let mut widths = vec![0.0f32; starts.len()];

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                for cluster in run.run().clusters() {
                    let range = cluster.text_range();
                    let Ok(first) = starts.binary_search(&range.start) else {
                        continue;
                    };
                    let count = text
                        .get(range.clone())
                        .map(|s| s.chars().count())
                        .unwrap_or(1)
                        .max(1);
                    // Ligatures split their advance evenly across the chars they cover.
                    let share = cluster.advance() / count as f32;
                    for w in widths.iter_mut().skip(first).take(count) {
                        *w += share;
                    }
                }
            }
        }

        Ok(widths
            .into_iter()
            .map(|w| w * style.scale_x)
            .collect::<Vec<_>>()
            .into())
    }

    fn text_height(&mut self, text: &str, style: &StyleSnapshot) -> HTextResult<f32> {
        if text.is_empty() {
            return Ok(style.size);
        }
        Ok(self.layout(text, style)?.height())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/parley_measure.rs"]
mod tests;
