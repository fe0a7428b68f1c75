use super::*;

#[test]
fn parse_numeric_accepts_floats() {
    assert_eq!(parse_numeric("40"), Some(40.0));
    assert_eq!(parse_numeric("-0.5"), Some(-0.5));
    assert_eq!(parse_numeric(" 12.25 "), Some(12.25));
}

#[test]
fn parse_numeric_rejects_garbage() {
    assert_eq!(parse_numeric(""), None);
    assert_eq!(parse_numeric("fast"), None);
    assert_eq!(parse_numeric("40px"), None);
    assert_eq!(parse_numeric("NaN"), None);
    assert_eq!(parse_numeric("inf"), None);
}

#[test]
fn viewport_default_is_desktop_sized() {
    assert!(Viewport::default().width > 768);
    assert_eq!(Viewport::new(375).width, 375);
}
