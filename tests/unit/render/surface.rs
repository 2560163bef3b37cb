use super::*;

fn glyph(ch: char) -> GlyphDraw {
    GlyphDraw {
        ch,
        index: 0,
        generation: Generation::New,
        origin: Point::new(1.0, 2.0),
        size: 16.0,
        color: Rgba8::BLACK,
    }
}

#[test]
fn recording_surface_drains() {
    let mut s = RecordingSurface::new();
    s.draw_glyph(&glyph('a'), &StyleSnapshot::default());
    s.draw_glyph(&glyph('b'), &StyleSnapshot::default());
    assert_eq!(s.glyphs().len(), 2);

    let taken = s.take();
    assert_eq!(taken[1].ch, 'b');
    assert!(s.glyphs().is_empty());
}

#[test]
fn frame_serializes_generation_in_snake_case() {
    let frame = RecordedFrame {
        progress: 0.5,
        glyphs: vec![glyph('x')],
    };
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["glyphs"][0]["generation"], "new");
    assert_eq!(json["glyphs"][0]["ch"], "x");
    assert_eq!(json["progress"], 0.5);
}
