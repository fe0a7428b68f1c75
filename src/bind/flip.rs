use std::collections::BTreeMap;

use crate::{
    bind::engine::{AnimationEngine, TriggerId, TriggerSpec},
    dom::node::{BindFlags, Document, NodeId},
    foundation::core::parse_numeric,
};

/// Marker class selecting flip-trigger elements.
pub const FLIP_CLASS: &str = "sfx-flip-trigger";

/// Default class toggled onto the element when the flip fires.
pub const DEFAULT_FLIP_TO: &str = "flipped";
/// Default flip trigger-start token.
pub const DEFAULT_FLIP_START: &str = "top 80%";
/// Default flip duration in seconds.
pub const DEFAULT_FLIP_DURATION: f64 = 0.8;
/// Default flip easing token.
pub const DEFAULT_FLIP_EASE: &str = "power2.out";

/// Options handed to the layout-transition utility when a flip fires.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlipOptions {
    /// Transition duration in seconds.
    pub duration: f64,
    /// Easing token.
    pub ease: String,
}

/// Contract with the external layout-transition utility.
///
/// `capture` records an element's current layout; after the caller mutates
/// the layout (here: toggling a class), `animate_from` plays the transition
/// from the captured state to the new one.
pub trait LayoutTransition {
    /// Opaque captured-layout state.
    type State;

    /// Capture the element's current layout.
    fn capture(&mut self, doc: &Document, el: NodeId) -> Self::State;

    /// Animate from a captured state to the element's current layout.
    fn animate_from(&mut self, state: Self::State, opts: FlipOptions);
}

/// Reference layout utility that records every call.
#[derive(Clone, Debug, Default)]
pub struct RecordingLayout {
    /// Elements captured, in order.
    pub captures: Vec<NodeId>,
    /// Completed `animate_from` calls: (captured element, options).
    pub animations: Vec<(NodeId, FlipOptions)>,
}

impl RecordingLayout {
    /// An empty journal.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutTransition for RecordingLayout {
    type State = NodeId;

    fn capture(&mut self, doc: &Document, el: NodeId) -> NodeId {
        let _ = doc;
        self.captures.push(el);
        el
    }

    fn animate_from(&mut self, state: NodeId, opts: FlipOptions) {
        self.animations.push((state, opts));
    }
}

/// One registered flip waiting for its enter event.
#[derive(Clone, Debug, PartialEq)]
struct FlipBinding {
    element: NodeId,
    target_class: String,
    options: FlipOptions,
}

/// Flip pass: one-shot layout transitions on scroll entry.
///
/// Scanning registers a one-shot trigger per unbound flip element and parks
/// the flip parameters in a pending table keyed by [`TriggerId`]. The `FLIPPED`
/// marker is set at registration time, before the trigger fires, so a
/// re-scan between registration and entry cannot register a duplicate. Enter
/// events arrive from the engine via [`FlipOrchestrator::fire`].
#[derive(Debug, Default)]
pub struct FlipOrchestrator {
    pending: BTreeMap<TriggerId, FlipBinding>,
}

impl FlipOrchestrator {
    /// An empty orchestrator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every unbound flip element under `root`.
    pub fn scan<E: AnimationEngine>(&mut self, doc: &mut Document, root: NodeId, engine: &mut E) {
        for el in doc.select_class(root, FLIP_CLASS) {
            if doc.has_flag(el, BindFlags::FLIPPED) {
                continue;
            }
            doc.set_flag(el, BindFlags::FLIPPED);

            let target_class = doc
                .attr(el, "data-flip-to")
                .unwrap_or(DEFAULT_FLIP_TO)
                .to_string();
            let start = doc
                .attr(el, "data-flip-start")
                .unwrap_or(DEFAULT_FLIP_START)
                .to_string();
            let duration = doc
                .attr(el, "data-flip-duration")
                .and_then(parse_numeric)
                .unwrap_or(DEFAULT_FLIP_DURATION);
            let ease = doc
                .attr(el, "data-flip-ease")
                .unwrap_or(DEFAULT_FLIP_EASE)
                .to_string();

            let id = engine.create_trigger(TriggerSpec::once(el, start));
            self.pending.insert(
                id,
                FlipBinding {
                    element: el,
                    target_class,
                    options: FlipOptions { duration, ease },
                },
            );
        }
    }

    /// Handle an enter event for trigger `id`.
    ///
    /// Captures the element's layout, toggles the target class, then plays
    /// the transition from the captured state. The binding is consumed, so
    /// a second event for the same trigger is a no-op. Returns whether a
    /// flip ran.
    pub fn fire<L: LayoutTransition>(
        &mut self,
        doc: &mut Document,
        id: TriggerId,
        layout: &mut L,
    ) -> bool {
        let Some(binding) = self.pending.remove(&id) else {
            return false;
        };
        let state = layout.capture(doc, binding.element);
        let _ = doc.add_class(binding.element, &binding.target_class);
        layout.animate_from(state, binding.options);
        true
    }

    /// Number of registered flips still waiting for their enter event.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Drop every pending flip (full reset path).
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bind/flip.rs"]
mod tests;
