use crate::{
    config::resolve::ElementConfig,
    effects::presets::{PresetRegistry, StyleMap, StyleProp, StyleValue},
};

/// Timing parameters handed to the engine alongside the merged vars.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timing {
    /// Tween duration in seconds.
    pub duration: f64,
    /// Per-target stagger in seconds.
    pub stagger: f64,
    /// Start delay in seconds.
    pub delay: f64,
    /// Easing token, passed through verbatim.
    pub ease: String,
}

/// A fully merged, resolved animation plan.
///
/// Transient: built from one `(ElementConfig, PresetRegistry)` pair, handed
/// to the binder, discarded. Derivation is pure: same inputs, same plan.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationPlan {
    /// Merged starting style state.
    pub from_vars: StyleMap,
    /// Merged ending style state.
    pub to_vars: StyleMap,
    /// Resolved timing parameters.
    pub timing: Timing,
    /// Trigger-start token.
    pub start: String,
    /// Toggle-action token.
    pub toggle: String,
}

/// Merge the requested effects and per-instance overrides into one plan.
///
/// Effects are visited in declaration order; keys missing from the registry
/// contribute nothing. `from` deltas merge into the accumulator as each
/// effect is visited, while `to` deltas are collected and flattened once
/// after the loop. In both maps a later effect wins on a shared property,
/// but the `to` side sees only raw preset values, never override-adjusted
/// ones from earlier effects. That pairing is part of the contract and is
/// pinned by a regression test.
pub fn build_plan(cfg: &ElementConfig, registry: &PresetRegistry) -> AnimationPlan {
    let mut from_vars = StyleMap::new();
    let mut to_deltas: Vec<StyleMap> = Vec::new();

    for key in &cfg.effects {
        let Some(preset) = registry.lookup(key) else {
            continue;
        };
        let mut from = preset.from.clone();
        let mut to = preset.to.clone();

        apply_slide_override(key, cfg.distance, &mut from, &mut to);
        apply_scale_override(key, cfg.scale, &mut from);
        apply_blur(key, cfg.blur, &mut from, &mut to);

        from_vars.extend(from);
        to_deltas.push(to);
    }

    let mut to_vars = StyleMap::new();
    for delta in to_deltas {
        to_vars.extend(delta);
    }

    AnimationPlan {
        from_vars,
        to_vars,
        timing: Timing {
            duration: cfg.duration,
            stagger: cfg.stagger,
            delay: cfg.delay,
            ease: cfg.ease.clone(),
        },
        start: cfg.start.clone(),
        toggle: cfg.toggle.clone(),
    }
}

/// Slide-family distance override.
///
/// Vertical variants (`up`, `down`) drive the y axis, horizontal ones the x
/// axis. `left` and `up` enter from a negative offset, `right` and `down`
/// from a positive one. The destination is always 0.
fn apply_slide_override(key: &str, distance: Option<f64>, from: &mut StyleMap, to: &mut StyleMap) {
    let Some(distance) = distance else {
        return;
    };
    let Some(direction) = key.strip_prefix("slide-in-") else {
        return;
    };
    let (axis, signed) = match direction {
        "left" => (StyleProp::X, -distance),
        "right" => (StyleProp::X, distance),
        "up" => (StyleProp::Y, -distance),
        "down" => (StyleProp::Y, distance),
        _ => return,
    };
    from.insert(axis, StyleValue::Number(signed));
    to.insert(axis, StyleValue::Number(0.0));
}

/// Scale-family override: replaces the starting scale, destination stays 1.
fn apply_scale_override(key: &str, scale: Option<f64>, from: &mut StyleMap) {
    let Some(scale) = scale else {
        return;
    };
    if key == "scale-up" || key == "scale-down" {
        from.insert(StyleProp::Scale, StyleValue::Number(scale));
    }
}

/// Blur-in radius: resolved radius in, zero out.
fn apply_blur(key: &str, radius: f64, from: &mut StyleMap, to: &mut StyleMap) {
    if key == "blur-in" {
        from.insert(StyleProp::Filter, StyleValue::blur_px(radius));
        to.insert(StyleProp::Filter, StyleValue::blur_px(0.0));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/merge.rs"]
mod tests;
