use crate::{
    bind::base::{self, TRIGGER_CLASS},
    bind::engine::{AnimationEngine, TriggerId},
    bind::flip::{FlipOrchestrator, LayoutTransition},
    bind::{parallax, pin},
    dom::node::{BindFlags, Document, NodeId},
    effects::presets::PresetRegistry,
    foundation::core::Viewport,
    split::segment::TextSegmenter,
};

/// Master lifecycle controller.
///
/// Owns the preset registry, the tracked viewport and the three external
/// collaborators, and drives every binder exactly once per element. All
/// entry points are synchronous; the only re-entry is the host relaying
/// engine enter events through [`Controller::on_trigger_enter`].
pub struct Controller<E, S, L> {
    registry: PresetRegistry,
    viewport: Viewport,
    engine: E,
    segmenter: S,
    layout: L,
    flips: FlipOrchestrator,
}

impl<E, S, L> Controller<E, S, L>
where
    E: AnimationEngine,
    S: TextSegmenter,
    L: LayoutTransition,
{
    /// Build a controller from a registry, viewport and collaborators.
    pub fn new(
        registry: PresetRegistry,
        viewport: Viewport,
        engine: E,
        segmenter: S,
        layout: L,
    ) -> Self {
        Self {
            registry,
            viewport,
            engine,
            segmenter,
            layout,
            flips: FlipOrchestrator::new(),
        }
    }

    /// Borrow the engine (journal inspection, host integration).
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutably borrow the engine.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Borrow the layout-transition collaborator.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Currently tracked viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Flips registered and not yet fired.
    pub fn pending_flips(&self) -> usize {
        self.flips.pending()
    }

    /// Scan `root` (default: the whole document) and bind everything once.
    ///
    /// Marks and binds each unmarked trigger element, then runs the
    /// parallax, pin and flip passes over the same root. Safe to call
    /// repeatedly; already-marked elements are no-ops.
    #[tracing::instrument(skip(self, doc))]
    pub fn init(&mut self, doc: &mut Document, root: Option<NodeId>) {
        let root = root.unwrap_or_else(|| doc.root());
        for el in doc.select_class(root, TRIGGER_CLASS) {
            if doc.has_flag(el, BindFlags::ANIMATED) {
                continue;
            }
            doc.set_flag(el, BindFlags::ANIMATED);
            self.animate(doc, el);
        }
        self.init_parallax(doc, Some(root));
        self.init_pin(doc, Some(root));
        self.init_flip(doc, Some(root));
    }

    /// Resolve, merge and bind one element, ignoring markers.
    ///
    /// The direct counterpart of the scan body; marker bookkeeping stays
    /// with [`Controller::init`].
    pub fn animate(&mut self, doc: &mut Document, el: NodeId) {
        base::bind_element(
            doc,
            el,
            &self.registry,
            self.viewport,
            &mut self.engine,
            &mut self.segmenter,
        );
    }

    /// Run the parallax pass under `root`.
    pub fn init_parallax(&mut self, doc: &mut Document, root: Option<NodeId>) {
        let root = root.unwrap_or_else(|| doc.root());
        parallax::scan(doc, root, self.viewport, &mut self.engine);
    }

    /// Run the pin pass under `root`.
    pub fn init_pin(&mut self, doc: &mut Document, root: Option<NodeId>) {
        let root = root.unwrap_or_else(|| doc.root());
        pin::scan(doc, root, &mut self.engine);
    }

    /// Run the flip pass under `root`.
    pub fn init_flip(&mut self, doc: &mut Document, root: Option<NodeId>) {
        let root = root.unwrap_or_else(|| doc.root());
        self.flips.scan(doc, root, &mut self.engine);
    }

    /// Tear down every trigger and re-scan the whole document.
    ///
    /// Destroys all registered triggers, drops pending flips, clears every
    /// binding marker so elements become bindable again, then re-runs
    /// [`Controller::init`] over the full document.
    #[tracing::instrument(skip(self, doc))]
    pub fn reset(&mut self, doc: &mut Document) {
        self.engine.kill_all();
        self.flips.clear();
        doc.clear_flags();
        self.init(doc, None);
    }

    /// Structural-ready entry point: initial full-document scan.
    pub fn on_ready(&mut self, doc: &mut Document) {
        self.init(doc, None);
    }

    /// Viewport load event: recompute trigger geometry, never re-bind.
    pub fn on_load(&mut self) {
        self.engine.refresh();
    }

    /// Viewport resize event: track the new width and recompute trigger
    /// geometry, never re-bind.
    pub fn on_resize(&mut self, width: u32) {
        self.viewport = Viewport::new(width);
        self.engine.refresh();
    }

    /// Relay an engine enter event; runs the matching pending flip, if any.
    pub fn on_trigger_enter(&mut self, doc: &mut Document, id: TriggerId) -> bool {
        self.flips.fire(doc, id, &mut self.layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/orchestrate/controller.rs"]
mod tests;
