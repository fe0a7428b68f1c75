use crate::{
    bind::engine::{AnimationEngine, TriggerSpec},
    dom::node::{BindFlags, Document, NodeId},
};

/// Marker class selecting pin elements.
pub const PIN_CLASS: &str = "sfx-pin";

/// Default pin-start token.
pub const DEFAULT_PIN_START: &str = "top top";
/// Default pin-end token.
pub const DEFAULT_PIN_END: &str = "+=100%";

/// Register a fixed-position scroll region for every unbound pin element
/// under `root`.
///
/// Pin spacing is disabled; scrubbing is enabled only when `data-pin-scrub`
/// is exactly `"true"`.
pub fn scan<E: AnimationEngine>(doc: &mut Document, root: NodeId, engine: &mut E) {
    for el in doc.select_class(root, PIN_CLASS) {
        if doc.has_flag(el, BindFlags::PINNED) {
            continue;
        }
        doc.set_flag(el, BindFlags::PINNED);

        let start = doc
            .attr(el, "data-pin-start")
            .unwrap_or(DEFAULT_PIN_START)
            .to_string();
        let end = doc
            .attr(el, "data-pin-end")
            .unwrap_or(DEFAULT_PIN_END)
            .to_string();
        let scrub = doc.attr(el, "data-pin-scrub") == Some("true");

        engine.create_trigger(TriggerSpec {
            trigger: el,
            start,
            end: Some(end),
            toggle_actions: None,
            scrub,
            pin: true,
            pin_spacing: false,
            once: false,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bind/pin.rs"]
mod tests;
