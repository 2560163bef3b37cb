use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HTextError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HTextError::measurement("x")
            .to_string()
            .contains("measurement error:")
    );
    assert!(
        HTextError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        HTextError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HTextError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
