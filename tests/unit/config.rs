use super::*;

#[test]
fn empty_object_uses_evaporate_defaults() {
    let cfg = EngineConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg.variant, VariantConfig::default());
    assert_eq!(cfg.variant.timing(), Evaporate::DEFAULT_TIMING);
    assert_eq!(cfg.ease(), Ease::InOutSine);
}

#[test]
fn scale_defaults_are_per_variant() {
    let cfg = EngineConfig::from_json_str(r#"{ "variant": { "kind": "scale" } }"#).unwrap();
    assert_eq!(cfg.variant.timing(), Scale::DEFAULT_TIMING);
    assert_eq!(cfg.variant.build().name(), "scale");
}

#[test]
fn explicit_values_round_trip() {
    let json = r#"{
        "variant": { "kind": "evaporate", "char_time_ms": 120, "most_count": 8 },
        "ease": "linear"
    }"#;
    let cfg = EngineConfig::from_json_str(json).unwrap();
    assert_eq!(
        cfg.variant.timing(),
        StaggerTiming {
            char_time_ms: 120.0,
            most_count: 8
        }
    );
    assert_eq!(cfg.ease(), Ease::Linear);
    assert_eq!(cfg.variant.build().name(), "evaporate");
}

#[test]
fn invalid_timing_is_rejected() {
    let err = EngineConfig::from_json_str(r#"{ "variant": { "kind": "scale", "most_count": 0 } }"#)
        .unwrap_err();
    assert!(matches!(err, HTextError::Validation(_)));

    let err =
        EngineConfig::from_json_str(r#"{ "variant": { "kind": "evaporate", "char_time_ms": -1 } }"#)
            .unwrap_err();
    assert!(matches!(err, HTextError::Validation(_)));
}

#[test]
fn unknown_kind_is_a_serde_error() {
    let err = EngineConfig::from_json_str(r#"{ "variant": { "kind": "rainbow" } }"#).unwrap_err();
    assert!(matches!(err, HTextError::Serde(_)));
}
