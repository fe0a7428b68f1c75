//! scrollfx turns declarative markup on page elements into scroll-linked
//! visual transitions.
//!
//! Elements describe the transitions they want through `data-*` attributes
//! and `sfx-*` class conventions; scrollfx resolves those descriptors,
//! merges the requested effect presets with per-instance overrides into a
//! single animation plan, and binds that plan exactly once to a
//! viewport-driven playback lifecycle (enter/exit, continuous scrub, pin,
//! one-shot flip).
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: element declarative surface -> [`ElementConfig`]
//!    (effect keys, overrides, timing, trigger tokens)
//! 2. **Merge**: `ElementConfig + PresetRegistry -> AnimationPlan`
//!    (merged from/to style maps; pure, no hidden state)
//! 3. **Bind**: starting state applied immediately, scroll-gated tween
//!    registered with the external [`AnimationEngine`]
//! 4. **Orchestrate**: independent parallax / pin / flip passes plus a full
//!    teardown-and-rescan [`Controller::reset`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No faults to the caller**: bad configuration degrades to "no effect"
//!   for that one element; sibling elements and other binders are never
//!   affected.
//! - **At-most-once binding**: per-element markers guard every binder kind;
//!   only `reset` clears them.
//! - **External playback**: tween execution, scroll math, text segmentation
//!   and layout-diff capture live behind the [`AnimationEngine`],
//!   [`TextSegmenter`] and [`LayoutTransition`] traits.
#![forbid(unsafe_code)]

mod bind;
mod config;
mod dom;
mod effects;
mod foundation;
mod orchestrate;
mod plan;
mod split;

pub use bind::base::{TRIGGER_CLASS, bind_element};
pub use bind::engine::{
    AnimationEngine, RecordedSet, RecordedTrigger, RecordedTween, RecordingEngine, TriggerId,
    TriggerSpec,
};
pub use bind::flip::{
    DEFAULT_FLIP_DURATION, DEFAULT_FLIP_EASE, DEFAULT_FLIP_START, DEFAULT_FLIP_TO, FLIP_CLASS,
    FlipOptions, FlipOrchestrator, LayoutTransition, RecordingLayout,
};
pub use bind::parallax::{DEFAULT_DISTANCE, PARALLAX_CLASS, PARALLAX_STYLE_MARKER};
pub use bind::pin::{DEFAULT_PIN_END, DEFAULT_PIN_START, PIN_CLASS};
pub use config::policy::{MOBILE_MAX_WIDTH, MOBILE_OFF_MARKER, should_run};
pub use config::resolve::{
    BLUR_CLASS_PREFIX, CLASS_PREFIX, DEFAULT_BLUR, DEFAULT_DELAY, DEFAULT_DURATION, DEFAULT_EASE,
    DEFAULT_STAGGER, DEFAULT_START, DEFAULT_TOGGLE, DISTANCE_CLASS_PREFIX, EASE_CLASS_PREFIX,
    ElementConfig, resolve_config,
};
pub use dom::build::ElementBuilder;
pub use dom::node::{BindFlags, Document, Element, Node, NodeId};
pub use effects::presets::{EffectDescriptor, PresetRegistry, StyleMap, StyleProp, StyleValue};
pub use foundation::core::{Viewport, parse_numeric};
pub use foundation::error::{ScrollfxError, ScrollfxResult};
pub use orchestrate::controller::Controller;
pub use plan::merge::{AnimationPlan, Timing, build_plan};
pub use split::segment::{
    CHAR_CLASS, LINE_CLASS, NO_SPLIT_CLASS, SplitMode, TextSegmenter, UnicodeSegmenter, WORD_CLASS,
    revert_protected,
};
