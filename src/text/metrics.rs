use std::collections::HashMap;

use crate::foundation::error::{HTextError, HTextResult};
use crate::text::style::StyleSnapshot;

/// Advance widths, one per `char` of the associated string.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct GlyphWidths(Vec<f32>);

impl GlyphWidths {
    /// Wrap a width sequence.
    pub fn new(widths: Vec<f32>) -> Self {
        Self(widths)
    }

    /// `n` zero widths; keeps the length invariant when measurement failed.
    pub fn zeros(n: usize) -> Self {
        Self(vec![0.0; n])
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the empty sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Width of character `i`, 0 when out of range.
    pub fn get(&self, i: usize) -> f32 {
        self.0.get(i).copied().unwrap_or(0.0)
    }

    /// Sum of the first `n` widths.
    pub fn prefix(&self, n: usize) -> f32 {
        self.0.iter().take(n).sum()
    }

    /// Sum of all widths.
    pub fn total(&self) -> f32 {
        self.0.iter().sum()
    }

    /// Widths as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for GlyphWidths {
    fn from(v: Vec<f32>) -> Self {
        Self(v)
    }
}

/// Backend producing per-character advance widths.
///
/// Implementations must apply letter spacing and horizontal scale exactly like the eventual
/// draw call does.
pub trait GlyphMeasure {
    /// Advance width of every `char` in `text` under `style`.
    fn measure(&mut self, text: &str, style: &StyleSnapshot) -> HTextResult<GlyphWidths>;

    /// Vertical extent of `text`, used by variants that move glyphs vertically.
    fn text_height(&mut self, _text: &str, style: &StyleSnapshot) -> HTextResult<f32> {
        Ok(style.size)
    }
}

/// Measure `text` through `backend`, enforcing the width-sequence invariants.
///
/// Empty text never reaches the backend.
pub fn measure_with<M: GlyphMeasure + ?Sized>(
    backend: &mut M,
    text: &str,
    style: &StyleSnapshot,
) -> HTextResult<GlyphWidths> {
    if text.is_empty() {
        return Ok(GlyphWidths::default());
    }

    let widths = backend.measure(text, style)?;
    let n = text.chars().count();
    if widths.len() != n {
        return Err(HTextError::measurement(format!(
            "backend returned {} widths for {n} chars",
            widths.len()
        )));
    }
    Ok(widths)
}

/// Estimate every glyph as a fixed fraction of an em.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicMeasure {
    /// Advance of a non-whitespace glyph, in em.
    pub em_advance: f32,
}

impl Default for HeuristicMeasure {
    fn default() -> Self {
        Self { em_advance: 0.6 }
    }
}

impl GlyphMeasure for HeuristicMeasure {
    fn measure(&mut self, text: &str, style: &StyleSnapshot) -> HTextResult<GlyphWidths> {
        let full = self.em_advance * style.size;
        Ok(text
            .chars()
            .map(|c| {
                let base = if c.is_whitespace() { full * 0.5 } else { full };
                style.styled_advance(base)
            })
            .collect::<Vec<_>>()
            .into())
    }
}

/// Per-character width table recorded at a reference text size.
///
/// Widths scale linearly with the snapshot's size; unknown characters use `fallback`.
#[derive(Clone, Debug, PartialEq)]
pub struct TableMeasure {
    reference_size: f32,
    fallback: f32,
    widths: HashMap<char, f32>,
}

impl TableMeasure {
    /// Empty table measured at `reference_size` pixels.
    pub fn new(reference_size: f32, fallback: f32) -> Self {
        Self {
            reference_size,
            fallback,
            widths: HashMap::new(),
        }
    }

    /// Add or replace the width of `c`.
    pub fn with(mut self, c: char, width: f32) -> Self {
        self.widths.insert(c, width);
        self
    }

    /// Build a table from `(char, width)` pairs.
    pub fn from_pairs(
        reference_size: f32,
        fallback: f32,
        pairs: impl IntoIterator<Item = (char, f32)>,
    ) -> Self {
        let mut table = Self::new(reference_size, fallback);
        table.widths.extend(pairs);
        table
    }
}

impl GlyphMeasure for TableMeasure {
    fn measure(&mut self, text: &str, style: &StyleSnapshot) -> HTextResult<GlyphWidths> {
        if !self.reference_size.is_finite() || self.reference_size <= 0.0 {
            return Err(HTextError::measurement(
                "table reference size must be finite and > 0",
            ));
        }
        let k = style.size / self.reference_size;
        Ok(text
            .chars()
            .map(|c| {
                let w = self.widths.get(&c).copied().unwrap_or(self.fallback);
                style.styled_advance(w * k)
            })
            .collect::<Vec<_>>()
            .into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
