use super::*;

#[test]
fn clamp_unit_handles_out_of_range_and_nan() {
    assert_eq!(clamp_unit(-0.5), 0.0);
    assert_eq!(clamp_unit(1.5), 1.0);
    assert_eq!(clamp_unit(0.25), 0.25);
    assert_eq!(clamp_unit(f32::NAN), 0.0);
}

#[test]
fn leading_edge_follows_direction() {
    let line = LineGeometry {
        left: 12.0,
        right: 80.0,
    };
    assert_eq!(line.leading_edge(LayoutDirection::Ltr), 12.0);
    assert_eq!(line.leading_edge(LayoutDirection::Rtl), 80.0);
}

#[test]
fn fade_scales_alpha() {
    let c = Rgba8::rgb(10, 20, 30).with_alpha(200);
    assert_eq!(c.fade(0.5).a, 100);
    assert_eq!(c.fade(0.0).a, 0);
    assert_eq!(c.fade(2.0).a, 200);
    assert_eq!(c.fade(0.5).r, 10);
}
