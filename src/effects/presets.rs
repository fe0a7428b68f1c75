use std::collections::BTreeMap;

/// Style property animated by an effect.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StyleProp {
    /// Element opacity, 0..1.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Horizontal translation offset in pixels.
    X,
    /// Vertical translation offset in pixels.
    Y,
    /// Rotation in degrees.
    Rotation,
    /// CSS filter string ("blur(8px)").
    Filter,
}

/// Value of one style property.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Numeric value (offsets, opacity, scale, degrees).
    Number(f64),
    /// Textual value (filter strings).
    Text(String),
}

impl StyleValue {
    /// Numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Textual payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(t) => Some(t),
        }
    }

    /// A `blur(<radius>px)` filter value.
    pub fn blur_px(radius: f64) -> Self {
        Self::Text(format!("blur({radius}px)"))
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Property-to-value delta map with deterministic key order.
pub type StyleMap = BTreeMap<StyleProp, StyleValue>;

/// A named visual-effect preset: a starting delta and an ending delta.
///
/// Descriptors are registry-owned and immutable; the merger deep-copies the
/// deltas before applying per-instance overrides so no state is shared
/// across effects or elements.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EffectDescriptor {
    /// Registry key ("fade-in", "slide-in-left", ...).
    pub key: String,
    /// Starting style delta.
    pub from: StyleMap,
    /// Ending style delta.
    pub to: StyleMap,
}

impl EffectDescriptor {
    /// Build a descriptor from `(prop, value)` pairs.
    pub fn new(
        key: impl Into<String>,
        from: impl IntoIterator<Item = (StyleProp, StyleValue)>,
        to: impl IntoIterator<Item = (StyleProp, StyleValue)>,
    ) -> Self {
        Self {
            key: key.into(),
            from: from.into_iter().collect(),
            to: to.into_iter().collect(),
        }
    }
}

/// Immutable effect-key to style-delta table.
///
/// The registry is an injected value, not a global: construct one (usually
/// [`PresetRegistry::builtin`]) and hand it to the controller, so tests can
/// substitute alternate tables.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct PresetRegistry {
    presets: BTreeMap<String, EffectDescriptor>,
}

impl PresetRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in preset table.
    pub fn builtin() -> Self {
        use StyleProp::*;
        let mut registry = Self::new();
        let presets = [
            EffectDescriptor::new("fade-in", [(Opacity, 0.0.into())], [(Opacity, 1.0.into())]),
            EffectDescriptor::new("scale-up", [(Scale, 0.6.into())], [(Scale, 1.0.into())]),
            EffectDescriptor::new("scale-down", [(Scale, 1.4.into())], [(Scale, 1.0.into())]),
            EffectDescriptor::new("slide-in-left", [(X, (-10.0).into())], [(X, 0.0.into())]),
            EffectDescriptor::new("slide-in-right", [(X, 10.0.into())], [(X, 0.0.into())]),
            EffectDescriptor::new("slide-in-up", [(Y, 10.0.into())], [(Y, 0.0.into())]),
            EffectDescriptor::new("slide-in-down", [(Y, (-10.0).into())], [(Y, 0.0.into())]),
            EffectDescriptor::new(
                "rotate",
                [(Rotation, (-90.0).into()), (Opacity, 0.0.into())],
                [(Rotation, 0.0.into()), (Opacity, 1.0.into())],
            ),
            EffectDescriptor::new(
                "blur-in",
                [(Opacity, 0.0.into()), (Filter, StyleValue::blur_px(8.0))],
                [(Opacity, 1.0.into()), (Filter, StyleValue::blur_px(0.0))],
            ),
        ];
        for preset in presets {
            registry.register(preset);
        }
        registry
    }

    /// Insert or replace a preset under its own key.
    pub fn register(&mut self, descriptor: EffectDescriptor) {
        self.presets.insert(descriptor.key.clone(), descriptor);
    }

    /// Descriptor for `key`, or `None`. Absence is not an error; callers
    /// skip unknown keys silently.
    pub fn lookup(&self, key: &str) -> Option<&EffectDescriptor> {
        self.presets.get(key)
    }

    /// Registered keys in stable (sorted) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Number of registered presets.
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the registry holds no presets.
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/presets.rs"]
mod tests;
