use crate::{
    bind::base::TRIGGER_CLASS,
    bind::engine::{AnimationEngine, TriggerSpec},
    config::policy,
    dom::node::{BindFlags, Document, NodeId},
    effects::presets::{StyleMap, StyleProp, StyleValue},
    foundation::core::{Viewport, parse_numeric},
};

/// Marker class selecting parallax elements.
pub const PARALLAX_CLASS: &str = "sfx-parallax-img";

/// `data-style` substring that also opts a trigger element into parallax.
pub const PARALLAX_STYLE_MARKER: &str = "parallax";

/// Default travel distance in pixels.
pub const DEFAULT_DISTANCE: f64 = -100.0;

const START: &str = "top 95%";
const END: &str = "bottom top";

/// Bind a scrubbed parallax travel to every unbound parallax element under
/// `root`.
///
/// The visual target is the element itself when it is an image, else its
/// first descendant image; elements without a resolvable target are skipped
/// unmarked so a later scan may retry them.
pub fn scan<E: AnimationEngine>(
    doc: &mut Document,
    root: NodeId,
    viewport: Viewport,
    engine: &mut E,
) {
    let selected: Vec<NodeId> = doc
        .descendants(root)
        .into_iter()
        .filter(|&id| is_parallax(doc, id))
        .collect();

    for el in selected {
        let style = doc.attr(el, "data-style").unwrap_or_default();
        if !policy::should_run(style, viewport.width) {
            continue;
        }
        if doc.has_flag(el, BindFlags::PARALLAX) {
            continue;
        }

        let distance = doc
            .attr(el, "data-distance")
            .and_then(parse_numeric)
            .unwrap_or(DEFAULT_DISTANCE);

        let Some(target) = image_target(doc, el) else {
            tracing::debug!(element = el.0, "parallax element has no image target");
            continue;
        };

        doc.set_flag(el, BindFlags::PARALLAX);

        let from: StyleMap = [(StyleProp::Y, StyleValue::Number(distance))].into();
        let to: StyleMap = [(StyleProp::Y, StyleValue::Number(0.0))].into();
        engine.tween_from_to(&[target], &from, &to, TriggerSpec::scrubbed(el, START, END));
    }
}

fn is_parallax(doc: &Document, id: NodeId) -> bool {
    if doc.has_class(id, PARALLAX_CLASS) {
        return true;
    }
    doc.has_class(id, TRIGGER_CLASS)
        && doc
            .attr(id, "data-style")
            .is_some_and(|s| s.contains(PARALLAX_STYLE_MARKER))
}

/// The element itself when image-like, else its first descendant image.
fn image_target(doc: &Document, el: NodeId) -> Option<NodeId> {
    match doc.element(el) {
        Ok(element) if element.tag == "img" => Some(el),
        Ok(_) => doc.first_descendant_tag(el, "img"),
        Err(_) => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bind/parallax.rs"]
mod tests;
