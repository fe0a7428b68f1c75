use crate::{
    dom::node::NodeId,
    effects::presets::StyleMap,
    plan::merge::Timing,
};

/// Handle of one registered scroll trigger.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TriggerId(pub u64);

/// Scroll-trigger parameters handed to the engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TriggerSpec {
    /// Element whose viewport position drives the trigger.
    pub trigger: NodeId,
    /// Start token ("top 80%").
    pub start: String,
    /// End token ("bottom top"), when the trigger spans a scroll window.
    pub end: Option<String>,
    /// Toggle-action token ("play none none reverse"), for enter/exit
    /// playback.
    pub toggle_actions: Option<String>,
    /// Continuous scroll scrubbing instead of discrete playback.
    pub scrub: bool,
    /// Fix the trigger element in place over the scroll window.
    pub pin: bool,
    /// Reserve layout space while pinned.
    pub pin_spacing: bool,
    /// Fire at most once, then retire.
    pub once: bool,
}

impl TriggerSpec {
    /// An enter/exit playback trigger with a toggle-action token.
    pub fn playback(trigger: NodeId, start: impl Into<String>, toggle: impl Into<String>) -> Self {
        Self {
            trigger,
            start: start.into(),
            end: None,
            toggle_actions: Some(toggle.into()),
            scrub: false,
            pin: false,
            pin_spacing: false,
            once: false,
        }
    }

    /// A continuously scrubbed trigger over a scroll window.
    pub fn scrubbed(trigger: NodeId, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            trigger,
            start: start.into(),
            end: Some(end.into()),
            toggle_actions: None,
            scrub: true,
            pin: false,
            pin_spacing: false,
            once: false,
        }
    }

    /// A one-shot enter trigger.
    pub fn once(trigger: NodeId, start: impl Into<String>) -> Self {
        Self {
            trigger,
            start: start.into(),
            end: None,
            toggle_actions: None,
            scrub: false,
            pin: false,
            pin_spacing: false,
            once: true,
        }
    }
}

/// Contract with the external tween/transition engine.
///
/// The engine owns scroll math and playback; this crate only tells it what
/// the starting state is, what to animate toward, and which scroll window
/// gates it. Every registration returns a [`TriggerId`] so a full reset can
/// be expressed as [`AnimationEngine::kill_all`] plus a re-scan.
pub trait AnimationEngine {
    /// Apply `vars` to the targets immediately, before any scroll condition
    /// is evaluated.
    fn set_immediate(&mut self, targets: &[NodeId], vars: &StyleMap);

    /// Register a scroll-gated transition from the targets' current state
    /// toward `to`.
    fn tween_to(
        &mut self,
        targets: &[NodeId],
        to: &StyleMap,
        timing: &Timing,
        trigger: TriggerSpec,
    ) -> TriggerId;

    /// Register a scroll-driven transition between two explicit states
    /// (used by the scrubbed parallax pass).
    fn tween_from_to(
        &mut self,
        targets: &[NodeId],
        from: &StyleMap,
        to: &StyleMap,
        trigger: TriggerSpec,
    ) -> TriggerId;

    /// Register a bare trigger with no tween (pin regions, flip one-shots).
    fn create_trigger(&mut self, trigger: TriggerSpec) -> TriggerId;

    /// Destroy every currently registered trigger.
    fn kill_all(&mut self);

    /// Recompute trigger geometry after viewport load/resize. Never
    /// re-binds.
    fn refresh(&mut self);
}

/// Immediate state application recorded by [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedSet {
    /// Targets the state was applied to.
    pub targets: Vec<NodeId>,
    /// Applied style state.
    pub vars: StyleMap,
}

/// Tween registration recorded by [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedTween {
    /// Trigger handle assigned to this tween.
    pub id: TriggerId,
    /// Animation targets.
    pub targets: Vec<NodeId>,
    /// Explicit starting state (`tween_from_to` only).
    pub from: Option<StyleMap>,
    /// Ending state.
    pub to: StyleMap,
    /// Timing parameters (`tween_to` only).
    pub timing: Option<Timing>,
    /// Scroll trigger gating the tween.
    pub trigger: TriggerSpec,
}

/// Trigger registration recorded by [`RecordingEngine`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedTrigger {
    /// Assigned handle.
    pub id: TriggerId,
    /// Registered parameters.
    pub spec: TriggerSpec,
    /// False once [`AnimationEngine::kill_all`] has run.
    pub alive: bool,
}

/// Reference engine that records every call.
///
/// Doubles as the collaborator-contract documentation and as the test
/// harness: scans against a `RecordingEngine` leave a full journal of sets,
/// tweens and trigger registrations to assert on.
#[derive(Clone, Debug, Default)]
pub struct RecordingEngine {
    next_id: u64,
    /// Journal of immediate state applications.
    pub sets: Vec<RecordedSet>,
    /// Journal of tween registrations.
    pub tweens: Vec<RecordedTween>,
    /// Journal of every trigger registration (tweens included).
    pub triggers: Vec<RecordedTrigger>,
    /// Number of `refresh` calls.
    pub refresh_count: usize,
    /// Number of `kill_all` calls.
    pub kill_count: usize,
}

impl RecordingEngine {
    /// An empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Triggers still alive (registered and not killed).
    pub fn active_triggers(&self) -> usize {
        self.triggers.iter().filter(|t| t.alive).count()
    }

    /// Alive triggers whose trigger element is `el`.
    pub fn active_triggers_for(&self, el: NodeId) -> usize {
        self.triggers
            .iter()
            .filter(|t| t.alive && t.spec.trigger == el)
            .count()
    }

    fn register(&mut self, spec: TriggerSpec) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.triggers.push(RecordedTrigger {
            id,
            spec,
            alive: true,
        });
        id
    }
}

impl AnimationEngine for RecordingEngine {
    fn set_immediate(&mut self, targets: &[NodeId], vars: &StyleMap) {
        self.sets.push(RecordedSet {
            targets: targets.to_vec(),
            vars: vars.clone(),
        });
    }

    fn tween_to(
        &mut self,
        targets: &[NodeId],
        to: &StyleMap,
        timing: &Timing,
        trigger: TriggerSpec,
    ) -> TriggerId {
        let id = self.register(trigger.clone());
        self.tweens.push(RecordedTween {
            id,
            targets: targets.to_vec(),
            from: None,
            to: to.clone(),
            timing: Some(timing.clone()),
            trigger,
        });
        id
    }

    fn tween_from_to(
        &mut self,
        targets: &[NodeId],
        from: &StyleMap,
        to: &StyleMap,
        trigger: TriggerSpec,
    ) -> TriggerId {
        let id = self.register(trigger.clone());
        self.tweens.push(RecordedTween {
            id,
            targets: targets.to_vec(),
            from: Some(from.clone()),
            to: to.clone(),
            timing: None,
            trigger,
        });
        id
    }

    fn create_trigger(&mut self, trigger: TriggerSpec) -> TriggerId {
        self.register(trigger)
    }

    fn kill_all(&mut self) {
        self.kill_count += 1;
        for t in &mut self.triggers {
            t.alive = false;
        }
    }

    fn refresh(&mut self) {
        self.refresh_count += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bind/engine.rs"]
mod tests;
