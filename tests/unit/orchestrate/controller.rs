use super::*;
use crate::{
    bind::engine::RecordingEngine,
    bind::flip::RecordingLayout,
    bind::parallax::PARALLAX_CLASS,
    bind::pin::PIN_CLASS,
    dom::build::ElementBuilder,
    split::segment::UnicodeSegmenter,
};

type TestController = Controller<RecordingEngine, UnicodeSegmenter, RecordingLayout>;

fn controller() -> TestController {
    controller_at(1280)
}

fn controller_at(width: u32) -> TestController {
    Controller::new(
        PresetRegistry::builtin(),
        Viewport::new(width),
        RecordingEngine::new(),
        UnicodeSegmenter,
        RecordingLayout::new(),
    )
}

fn trigger_el(doc: &mut Document, style: &str) -> NodeId {
    let root = doc.root();
    ElementBuilder::new("div")
        .class(TRIGGER_CLASS)
        .attr("data-style", style)
        .build(doc, root)
        .unwrap()
}

#[test]
fn init_binds_each_element_exactly_once() {
    let mut doc = Document::new();
    let el = trigger_el(&mut doc, "fade-in");
    let mut fx = controller();

    fx.init(&mut doc, None);
    fx.init(&mut doc, None);

    assert_eq!(fx.engine().active_triggers_for(el), 1);
    assert_eq!(fx.engine().tweens.len(), 1);
    assert!(doc.has_flag(el, BindFlags::ANIMATED));
}

#[test]
fn init_runs_every_orchestrator_pass() {
    let mut doc = Document::new();
    let root = doc.root();
    trigger_el(&mut doc, "fade-in");
    ElementBuilder::new("img")
        .class(PARALLAX_CLASS)
        .build(&mut doc, root)
        .unwrap();
    ElementBuilder::new("section")
        .class(PIN_CLASS)
        .build(&mut doc, root)
        .unwrap();
    ElementBuilder::new("div")
        .class("sfx-flip-trigger")
        .build(&mut doc, root)
        .unwrap();

    let mut fx = controller();
    fx.init(&mut doc, None);

    // base tween + parallax tween + pin trigger + flip trigger
    assert_eq!(fx.engine().active_triggers(), 4);
    assert_eq!(fx.pending_flips(), 1);
}

#[test]
fn init_scopes_to_the_given_root() {
    let mut doc = Document::new();
    let root = doc.root();
    let section = ElementBuilder::new("section").build(&mut doc, root).unwrap();
    let inside = ElementBuilder::new("div")
        .class(TRIGGER_CLASS)
        .attr("data-style", "fade-in")
        .build(&mut doc, section)
        .unwrap();
    let outside = trigger_el(&mut doc, "fade-in");

    let mut fx = controller();
    fx.init(&mut doc, Some(section));

    assert!(doc.has_flag(inside, BindFlags::ANIMATED));
    assert!(!doc.has_flag(outside, BindFlags::ANIMATED));
}

#[test]
fn reset_tears_down_and_rebinds_exactly_once() {
    let mut doc = Document::new();
    let el = trigger_el(&mut doc, "fade-in scale-up");
    let mut fx = controller();

    fx.init(&mut doc, None);
    fx.reset(&mut doc);

    assert_eq!(fx.engine().kill_count, 1);
    // Old trigger destroyed, exactly one live again after the re-scan.
    assert_eq!(fx.engine().active_triggers_for(el), 1);
    assert_eq!(fx.engine().tweens.len(), 2);
}

#[test]
fn reset_clears_pending_flips_before_rescanning() {
    let mut doc = Document::new();
    let root = doc.root();
    ElementBuilder::new("div")
        .class("sfx-flip-trigger")
        .build(&mut doc, root)
        .unwrap();

    let mut fx = controller();
    fx.init(&mut doc, None);
    let stale = fx.engine().triggers[0].id;
    fx.reset(&mut doc);

    // Exactly one pending flip, addressed by the new trigger id.
    assert_eq!(fx.pending_flips(), 1);
    let fresh = fx
        .engine()
        .triggers
        .iter()
        .find(|t| t.alive)
        .map(|t| t.id)
        .unwrap();
    assert_ne!(stale, fresh);
    assert!(!fx.on_trigger_enter(&mut doc, stale));
    assert!(fx.on_trigger_enter(&mut doc, fresh));
}

#[test]
fn suppressed_elements_are_marked_but_unbound() {
    let mut doc = Document::new();
    let el = trigger_el(&mut doc, "fade-in mobile:off");
    let mut fx = controller_at(480);

    fx.init(&mut doc, None);
    assert!(doc.has_flag(el, BindFlags::ANIMATED));
    assert_eq!(fx.engine().tweens.len(), 0);

    // Wider viewport alone never re-binds; only reset does.
    fx.on_resize(1280);
    fx.init(&mut doc, None);
    assert_eq!(fx.engine().tweens.len(), 0);
    fx.reset(&mut doc);
    assert_eq!(fx.engine().tweens.len(), 1);
}

#[test]
fn animate_is_unconditional() {
    let mut doc = Document::new();
    let el = trigger_el(&mut doc, "fade-in");
    let mut fx = controller();

    fx.animate(&mut doc, el);
    fx.animate(&mut doc, el);
    // Direct animate skips marker bookkeeping by contract.
    assert_eq!(fx.engine().tweens.len(), 2);
    assert!(!doc.has_flag(el, BindFlags::ANIMATED));
}

#[test]
fn load_and_resize_only_refresh_geometry() {
    let mut doc = Document::new();
    trigger_el(&mut doc, "fade-in");
    let mut fx = controller();
    fx.init(&mut doc, None);

    fx.on_load();
    fx.on_resize(900);
    assert_eq!(fx.engine().refresh_count, 2);
    assert_eq!(fx.engine().tweens.len(), 1);
    assert_eq!(fx.viewport().width, 900);
}

#[test]
fn on_ready_scans_the_whole_document() {
    let mut doc = Document::new();
    let el = trigger_el(&mut doc, "fade-in");
    let mut fx = controller();
    fx.on_ready(&mut doc);
    assert!(doc.has_flag(el, BindFlags::ANIMATED));
    assert_eq!(fx.engine().tweens.len(), 1);
}

#[test]
fn substitute_registry_is_honored() {
    let mut registry = PresetRegistry::new();
    registry.register(crate::effects::presets::EffectDescriptor::new(
        "appear",
        [(
            crate::effects::presets::StyleProp::Opacity,
            crate::effects::presets::StyleValue::Number(0.2),
        )],
        [(
            crate::effects::presets::StyleProp::Opacity,
            crate::effects::presets::StyleValue::Number(1.0),
        )],
    ));
    let mut doc = Document::new();
    let el = trigger_el(&mut doc, "appear fade-in");

    let mut fx: TestController = Controller::new(
        registry,
        Viewport::new(1280),
        RecordingEngine::new(),
        UnicodeSegmenter,
        RecordingLayout::new(),
    );
    fx.init(&mut doc, None);

    let tween = &fx.engine().tweens[0];
    // "fade-in" is unknown to the substitute registry and contributes
    // nothing; "appear" resolves.
    assert_eq!(
        fx.engine().sets[0]
            .vars
            .get(&crate::effects::presets::StyleProp::Opacity),
        Some(&crate::effects::presets::StyleValue::Number(0.2))
    );
    assert_eq!(tween.targets, vec![el]);
}
