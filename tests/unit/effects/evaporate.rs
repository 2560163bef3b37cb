use super::*;
use crate::foundation::core::{LayoutDirection, Rgba8};
use crate::text::metrics::TableMeasure;
use crate::text::style::StyleSnapshot;
use crate::transition::state::TransitionId;

const BASELINE: f32 = 20.0;

fn table() -> TableMeasure {
    TableMeasure::from_pairs(16.0, 8.0, [('A', 10.0), ('B', 12.0), ('C', 9.0)])
}

fn transition(from: &str, to: &str) -> (Evaporate, TransitionState) {
    let mut m = table();
    let mut state =
        TransitionState::new(from, StyleSnapshot::default(), &mut m, LayoutDirection::Ltr);
    state.begin_transition(
        TransitionId(1),
        to,
        StyleSnapshot::default(),
        &mut m,
        Some(0.0),
        LayoutDirection::Ltr,
    );
    let mut fx = Evaporate::default();
    fx.animate_prepare(&state, &mut m);
    (fx, state)
}

fn draw(fx: &Evaporate, state: &TransitionState) -> Vec<GlyphDraw> {
    let frame = Frame {
        state,
        geometry: FrameGeometry::default(),
        baseline: BASELINE,
    };
    let mut out = Vec::new();
    fx.draw_frame(&frame, &mut out);
    out
}

#[test]
fn duration_tracks_new_length() {
    let (mut fx, state) = transition("AB", "ABC");
    assert_eq!(fx.animate_start(&state), Duration::from_millis(330));
}

#[test]
fn appended_char_is_half_staggered_at_midpoint() {
    let (fx, mut state) = transition("AB", "ABC");
    state.set_progress(0.5);
    let glyphs = draw(&fx, &state);

    assert_eq!(glyphs.len(), 3);
    assert_eq!(glyphs[0].generation, Generation::Old);
    assert_eq!(glyphs[0].origin, Point::new(0.0, 20.0));
    assert_eq!(glyphs[1].origin, Point::new(10.0, 20.0));

    let c = &glyphs[2];
    assert_eq!(c.ch, 'C');
    assert_eq!(c.generation, Generation::New);
    // (0.5 * 330 - 30) / 300 of full opacity
    assert_eq!(c.color, Rgba8::BLACK.fade(0.45));
    // halfway up its 16px rise
    assert_eq!(c.origin, Point::new(22.0, 28.0));
}

#[test]
fn replaced_chars_float_up_and_fade() {
    let (fx, mut state) = transition("AB", "C");
    state.set_progress(0.5);
    let glyphs = draw(&fx, &state);

    let old: Vec<_> = glyphs
        .iter()
        .filter(|g| g.generation == Generation::Old)
        .collect();
    assert_eq!(old.len(), 2);
    assert_eq!(old[0].origin.y, 12.0);
    assert_eq!(old[0].color.a, 128);

    let new: Vec<_> = glyphs
        .iter()
        .filter(|g| g.generation == Generation::New)
        .collect();
    assert_eq!(new.len(), 1);
    assert_eq!(new[0].origin.y, 28.0);
}

#[test]
fn endpoints_show_only_one_generation() {
    let (fx, mut state) = transition("AB", "C");

    state.set_progress(0.0);
    let start = draw(&fx, &state);
    assert!(start.iter().all(|g| g.generation == Generation::Old));
    assert_eq!(start.len(), 2);

    state.set_progress(1.0);
    let end = draw(&fx, &state);
    assert_eq!(end.len(), 1);
    assert_eq!(end[0].ch, 'C');
    assert_eq!(end[0].origin, Point::new(0.0, 20.0));
    assert_eq!(end[0].color.a, 255);
}

#[test]
fn moving_chars_land_on_new_slots() {
    let (fx, mut state) = transition("AB", "BA");
    state.set_progress(1.0);
    let glyphs = draw(&fx, &state);
    assert_eq!(glyphs.len(), 2);
    // 'A' (old 0) ends in slot 1 after 'B' (12px); 'B' ends in slot 0.
    assert_eq!(glyphs[0].ch, 'A');
    assert_eq!(glyphs[0].origin.x, 12.0);
    assert_eq!(glyphs[1].ch, 'B');
    assert_eq!(glyphs[1].origin.x, 0.0);
}

#[test]
fn init_variables_provides_fallback_height() {
    let mut fx = Evaporate::default();
    fx.init_variables(&FrameGeometry {
        text_size: 40.0,
        ..FrameGeometry::default()
    });
    let state = TransitionState::new("", StyleSnapshot::default(), &mut table(), LayoutDirection::Ltr);
    assert_eq!(fx.name(), "evaporate");
    assert_eq!(fx.fallback_height(&state), 40.0);
}
