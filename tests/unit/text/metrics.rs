use super::*;

struct Panicking;

impl GlyphMeasure for Panicking {
    fn measure(&mut self, _text: &str, _style: &StyleSnapshot) -> HTextResult<GlyphWidths> {
        panic!("backend must not be called for empty text");
    }
}

struct Short;

impl GlyphMeasure for Short {
    fn measure(&mut self, _text: &str, _style: &StyleSnapshot) -> HTextResult<GlyphWidths> {
        Ok(GlyphWidths::new(vec![1.0]))
    }
}

#[test]
fn empty_text_skips_backend() {
    let widths = measure_with(&mut Panicking, "", &StyleSnapshot::default()).unwrap();
    assert!(widths.is_empty());
}

#[test]
fn length_matches_char_count() {
    let style = StyleSnapshot::default();
    for s in ["a", "hello", "héllo wörld", "日本語", "a\u{301}b"] {
        let w = measure_with(&mut HeuristicMeasure::default(), s, &style).unwrap();
        assert_eq!(w.len(), s.chars().count(), "{s}");
    }
}

#[test]
fn wrong_length_is_a_measurement_error() {
    let err = measure_with(&mut Short, "abc", &StyleSnapshot::default()).unwrap_err();
    assert!(matches!(err, HTextError::Measurement(_)));
}

#[test]
fn heuristic_halves_whitespace() {
    let style = StyleSnapshot {
        size: 10.0,
        ..StyleSnapshot::default()
    };
    let w = HeuristicMeasure { em_advance: 0.5 }
        .measure("a b", &style)
        .unwrap();
    assert_eq!(w.as_slice(), &[5.0, 2.5, 5.0]);
}

#[test]
fn table_scales_with_size_and_applies_spacing() {
    let mut table = TableMeasure::new(10.0, 5.0).with('A', 10.0).with('B', 12.0);
    let style = StyleSnapshot {
        size: 20.0,
        letter_spacing: 0.1,
        ..StyleSnapshot::default()
    };
    let w = table.measure("ABz", &style).unwrap();
    assert_eq!(w.as_slice(), &[22.0, 26.0, 12.0]);
}

#[test]
fn table_rejects_bad_reference_size() {
    let mut table = TableMeasure::new(0.0, 5.0);
    assert!(table.measure("a", &StyleSnapshot::default()).is_err());
}

#[test]
fn prefix_and_get_are_total() {
    let w = GlyphWidths::new(vec![10.0, 12.0, 9.0]);
    assert_eq!(w.prefix(0), 0.0);
    assert_eq!(w.prefix(2), 22.0);
    assert_eq!(w.prefix(10), 31.0);
    assert_eq!(w.total(), 31.0);
    assert_eq!(w.get(7), 0.0);
    assert_eq!(GlyphWidths::zeros(3).len(), 3);
}

#[test]
fn default_text_height_is_size() {
    let style = StyleSnapshot {
        size: 18.0,
        ..StyleSnapshot::default()
    };
    assert_eq!(
        HeuristicMeasure::default()
            .text_height("x", &style)
            .unwrap(),
        18.0
    );
}
