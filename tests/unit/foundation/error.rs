use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ScrollfxError::document("x")
            .to_string()
            .contains("document error:")
    );
    assert!(
        ScrollfxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ScrollfxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
