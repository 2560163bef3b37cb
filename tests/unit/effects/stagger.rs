use super::*;
use crate::foundation::core::LayoutDirection;
use crate::text::metrics::TableMeasure;
use crate::text::style::StyleSnapshot;
use crate::transition::state::TransitionId;

const EVAPORATE: StaggerTiming = StaggerTiming {
    char_time_ms: 300.0,
    most_count: 20,
};

#[test]
fn duration_grows_per_char() {
    assert_eq!(EVAPORATE.duration_ms(0), 300.0);
    assert_eq!(EVAPORATE.duration_ms(1), 300.0);
    assert_eq!(EVAPORATE.duration_ms(3), 330.0);
    assert_eq!(EVAPORATE.duration(3), Duration::from_millis(330));
}

#[test]
fn char_fraction_is_staggered() {
    // t = 0.5 * 330 = 165; char 2 starts at 30 -> (165 - 30) / 300
    let f = EVAPORATE.char_fraction(0.5, 3, 2);
    assert!((f - 0.45).abs() < 1e-6);
    assert_eq!(EVAPORATE.char_fraction(0.0, 3, 0), 0.0);
    assert_eq!(EVAPORATE.char_fraction(1.0, 3, 2), 1.0);
}

#[test]
fn every_char_is_complete_at_one() {
    for len in [1usize, 5, 40] {
        for i in 0..len {
            assert_eq!(EVAPORATE.char_fraction(1.0, len, i), 1.0);
        }
    }
}

#[test]
fn zero_most_count_does_not_divide_by_zero() {
    let t = StaggerTiming {
        char_time_ms: 100.0,
        most_count: 0,
    };
    assert!(t.duration_ms(4).is_finite());
}

#[test]
fn oversized_char_time_saturates_duration() {
    let t = StaggerTiming {
        char_time_ms: 1e30,
        most_count: 20,
    };
    assert_eq!(t.duration(3), Duration::MAX);

    let t = StaggerTiming {
        char_time_ms: f64::MAX,
        most_count: 1,
    };
    assert!(t.duration_ms(4).is_infinite());
    assert_eq!(t.duration(4), Duration::MAX);
}

#[test]
fn prepare_measures_isolated_chars() {
    let mut m = TableMeasure::from_pairs(16.0, 8.0, [('A', 10.0), ('B', 12.0)]);
    let mut state = TransitionState::new("AB", StyleSnapshot::default(), &mut m, LayoutDirection::Ltr);
    state.begin_transition(
        TransitionId(1),
        "BA",
        StyleSnapshot::default(),
        &mut m,
        None,
        LayoutDirection::Ltr,
    );
    let p = PreparedGlyphs::prepare(&state, &mut m, 99.0);
    assert_eq!(p.old_isolated, vec![10.0, 12.0]);
    assert_eq!(p.new_isolated, vec![12.0, 10.0]);
    assert_eq!(p.text_height, 16.0);
    assert_eq!(p.diff.need_move(0), Some(1));
    assert_eq!(p.centering(Generation::New, 0, 20.0, 1.0), 4.0);
    assert_eq!(p.centering(Generation::New, 0, 20.0, 0.5), 7.0);
    assert_eq!(p.centering(Generation::New, 9, 20.0, 1.0), 0.0);
}
