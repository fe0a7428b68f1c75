use super::*;
use crate::dom::build::ElementBuilder;
use crate::bind::engine::RecordingEngine;

#[test]
fn defaults_pin_without_scrub() {
    let mut doc = Document::new();
    let root = doc.root();
    let el = ElementBuilder::new("section")
        .class(PIN_CLASS)
        .build(&mut doc, root)
        .unwrap();

    let mut engine = RecordingEngine::new();
    scan(&mut doc, root, &mut engine);

    assert_eq!(engine.triggers.len(), 1);
    let spec = &engine.triggers[0].spec;
    assert_eq!(spec.trigger, el);
    assert_eq!(spec.start, DEFAULT_PIN_START);
    assert_eq!(spec.end.as_deref(), Some(DEFAULT_PIN_END));
    assert!(spec.pin);
    assert!(!spec.pin_spacing);
    assert!(!spec.scrub);
    assert!(doc.has_flag(el, BindFlags::PINNED));
}

#[test]
fn attribute_overrides_apply() {
    let mut doc = Document::new();
    let root = doc.root();
    ElementBuilder::new("section")
        .class(PIN_CLASS)
        .attr("data-pin-start", "center center")
        .attr("data-pin-end", "+=200%")
        .attr("data-pin-scrub", "true")
        .build(&mut doc, root)
        .unwrap();

    let mut engine = RecordingEngine::new();
    scan(&mut doc, root, &mut engine);

    let spec = &engine.triggers[0].spec;
    assert_eq!(spec.start, "center center");
    assert_eq!(spec.end.as_deref(), Some("+=200%"));
    assert!(spec.scrub);
}

#[test]
fn scrub_requires_the_exact_true_token() {
    let mut doc = Document::new();
    let root = doc.root();
    ElementBuilder::new("section")
        .class(PIN_CLASS)
        .attr("data-pin-scrub", "yes")
        .build(&mut doc, root)
        .unwrap();

    let mut engine = RecordingEngine::new();
    scan(&mut doc, root, &mut engine);
    assert!(!engine.triggers[0].spec.scrub);
}

#[test]
fn rescans_do_not_rebind() {
    let mut doc = Document::new();
    let root = doc.root();
    ElementBuilder::new("section")
        .class(PIN_CLASS)
        .build(&mut doc, root)
        .unwrap();

    let mut engine = RecordingEngine::new();
    scan(&mut doc, root, &mut engine);
    scan(&mut doc, root, &mut engine);
    assert_eq!(engine.triggers.len(), 1);
}
