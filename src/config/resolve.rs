use crate::{
    dom::node::{Document, NodeId},
    effects::presets::PresetRegistry,
    foundation::core::parse_numeric,
    split::segment::{SplitMode, is_segmented},
};

/// Class-token prefix shared by every declarative convention.
pub const CLASS_PREFIX: &str = "sfx-";

/// Class prefix for slide distance overrides (`sfx-slide-distance-40`).
pub const DISTANCE_CLASS_PREFIX: &str = "sfx-slide-distance-";

/// Class prefix for blur radius overrides (`sfx-blur-20`).
pub const BLUR_CLASS_PREFIX: &str = "sfx-blur-";

/// Class prefix for easing tokens (`sfx-ease-power2-out`).
pub const EASE_CLASS_PREFIX: &str = "sfx-ease-";

/// Default blur radius in pixels.
pub const DEFAULT_BLUR: f64 = 8.0;
/// Default easing token.
pub const DEFAULT_EASE: &str = "power2.out";
/// Default tween duration in seconds.
pub const DEFAULT_DURATION: f64 = 0.6;
/// Default per-target stagger in seconds.
pub const DEFAULT_STAGGER: f64 = 0.05;
/// Default delay in seconds.
pub const DEFAULT_DELAY: f64 = 0.0;
/// Default trigger-start token.
pub const DEFAULT_START: &str = "top 80%";
/// Default toggle-action token.
pub const DEFAULT_TOGGLE: &str = "play none none reverse";

/// Fully resolved per-element configuration.
///
/// Derived once from the element's declarative surface and never mutated
/// afterward. Every field resolves through the same two-tier chain: explicit
/// attribute wins, else a class-token convention, else the hardcoded default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementConfig {
    /// Requested effect keys in declaration order (duplicates allowed).
    pub effects: Vec<String>,
    /// Requested split mode, absent when splitting is not requested or the
    /// element already carries segment markers.
    pub split: Option<SplitMode>,
    /// Slide distance override in pixels.
    pub distance: Option<f64>,
    /// Scale override for the scale family.
    pub scale: Option<f64>,
    /// Blur radius in pixels for `blur-in`.
    pub blur: f64,
    /// Easing token passed through to the engine.
    pub ease: String,
    /// Tween duration in seconds.
    pub duration: f64,
    /// Per-target stagger in seconds.
    pub stagger: f64,
    /// Delay in seconds.
    pub delay: f64,
    /// Trigger-start token.
    pub start: String,
    /// Toggle-action token.
    pub toggle: String,
}

/// Resolve an element's declarative surface into an [`ElementConfig`].
pub fn resolve_config(doc: &Document, el: NodeId, registry: &PresetRegistry) -> ElementConfig {
    ElementConfig {
        effects: effect_keys(doc, el, registry),
        split: split_mode(doc, el),
        distance: numeric_attr(doc, el, "data-distance")
            .or_else(|| numeric_class(doc, el, DISTANCE_CLASS_PREFIX)),
        scale: numeric_attr(doc, el, "data-scale"),
        blur: numeric_attr(doc, el, "data-blur")
            .or_else(|| numeric_class(doc, el, BLUR_CLASS_PREFIX))
            .unwrap_or(DEFAULT_BLUR),
        ease: ease_token(doc, el),
        duration: numeric_attr(doc, el, "data-duration").unwrap_or(DEFAULT_DURATION),
        stagger: numeric_attr(doc, el, "data-stagger").unwrap_or(DEFAULT_STAGGER),
        delay: numeric_attr(doc, el, "data-delay").unwrap_or(DEFAULT_DELAY),
        start: string_attr(doc, el, "data-start").unwrap_or_else(|| DEFAULT_START.to_string()),
        toggle: string_attr(doc, el, "data-toggle").unwrap_or_else(|| DEFAULT_TOGGLE.to_string()),
    }
}

/// Ordered effect keys for an element.
///
/// The free-form `data-style` token list, when present, entirely replaces the
/// class surface; the two surfaces never merge. Tokens may carry the class
/// prefix; stripping it yields the registry key. Unknown keys stay in the
/// list here and are dropped by the merger.
pub fn effect_keys(doc: &Document, el: NodeId, registry: &PresetRegistry) -> Vec<String> {
    if let Some(style) = doc.attr(el, "data-style") {
        return style
            .split_whitespace()
            .map(|token| token.strip_prefix(CLASS_PREFIX).unwrap_or(token).to_string())
            .collect();
    }
    registry
        .keys()
        .filter(|key| doc.has_class(el, &format!("{CLASS_PREFIX}{key}")))
        .map(str::to_string)
        .collect()
}

/// Requested split mode: `data-split` attribute, else split class token.
///
/// Yields `None` when the element already holds segment-marker descendants,
/// so re-scans never re-split.
pub fn split_mode(doc: &Document, el: NodeId) -> Option<SplitMode> {
    let mode = doc
        .attr(el, "data-split")
        .and_then(SplitMode::from_token)
        .or_else(|| {
            [SplitMode::Characters, SplitMode::Words, SplitMode::Lines]
                .into_iter()
                .find(|m| doc.has_class(el, &format!("{CLASS_PREFIX}split-{}", m.token())))
        })?;
    if is_segmented(doc, el) {
        return None;
    }
    Some(mode)
}

/// Easing token: attribute as-is, else class token with dashes converted to
/// the easing library's dot notation, else the default.
pub fn ease_token(doc: &Document, el: NodeId) -> String {
    string_attr(doc, el, "data-ease")
        .or_else(|| class_suffix(doc, el, EASE_CLASS_PREFIX).map(|s| s.replace('-', ".")))
        .unwrap_or_else(|| DEFAULT_EASE.to_string())
}

fn string_attr(doc: &Document, el: NodeId, name: &str) -> Option<String> {
    doc.attr(el, name).map(str::to_string)
}

fn numeric_attr(doc: &Document, el: NodeId, name: &str) -> Option<f64> {
    doc.attr(el, name).and_then(parse_numeric)
}

fn numeric_class(doc: &Document, el: NodeId, prefix: &str) -> Option<f64> {
    class_suffix(doc, el, prefix).and_then(|s| parse_numeric(&s))
}

/// Suffix of the first class token starting with `prefix`.
fn class_suffix(doc: &Document, el: NodeId, prefix: &str) -> Option<String> {
    let element = doc.element(el).ok()?;
    element
        .classes()
        .iter()
        .find_map(|c| c.strip_prefix(prefix).map(str::to_string))
}

#[cfg(test)]
#[path = "../../tests/unit/config/resolve.rs"]
mod tests;
