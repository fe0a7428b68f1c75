use crate::{
    bind::engine::{AnimationEngine, TriggerSpec},
    config::{policy, resolve},
    dom::node::{Document, NodeId},
    effects::presets::PresetRegistry,
    foundation::core::Viewport,
    plan::merge::build_plan,
    split::segment::{self, TextSegmenter},
};

/// Marker class selecting elements for the base animation scan.
pub const TRIGGER_CLASS: &str = "sfx-trigger";

/// Resolve, merge and bind one element's scroll animation.
///
/// Applies the merged starting state synchronously, then registers the
/// scroll-gated tween toward the merged ending state. When a split mode is
/// resolved, the segment nodes become the target set (protected regions
/// reverted first); the trigger element is always the original element.
///
/// This does not touch the `ANIMATED` marker; idempotency bookkeeping
/// belongs to the controller scan.
pub fn bind_element<E: AnimationEngine, S: TextSegmenter>(
    doc: &mut Document,
    el: NodeId,
    registry: &PresetRegistry,
    viewport: Viewport,
    engine: &mut E,
    segmenter: &mut S,
) {
    let style = doc.attr(el, "data-style").unwrap_or_default();
    if !policy::should_run(style, viewport.width) {
        tracing::debug!(element = el.0, "suppressed on mobile viewport");
        return;
    }

    let cfg = resolve::resolve_config(doc, el, registry);

    let targets = match cfg.split {
        Some(mode) => {
            let segments = segmenter.segment(doc, el, mode);
            segment::revert_protected(doc, el);
            // Reverted segments are detached; animating them would be a
            // silent no-op, so they are dropped from the target set.
            segments
                .into_iter()
                .filter(|&s| doc.parent(s).is_some() && segment::is_segment_node(doc, s))
                .collect()
        }
        None => vec![el],
    };

    let plan = build_plan(&cfg, registry);
    engine.set_immediate(&targets, &plan.from_vars);
    engine.tween_to(
        &targets,
        &plan.to_vars,
        &plan.timing,
        TriggerSpec::playback(el, plan.start, plan.toggle),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/bind/base.rs"]
mod tests;
