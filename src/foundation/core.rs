/// Viewport geometry visible to the suppression policy.
///
/// Only the width matters to effect resolution; it is re-read on every scan
/// because resize events change it between scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Current viewport width in CSS pixels.
    pub width: u32,
}

impl Viewport {
    /// Build a viewport with the given width.
    pub fn new(width: u32) -> Self {
        Self { width }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280 }
    }
}

/// Parse a declarative numeric token.
///
/// Returns `None` for anything that is not a finite float, so malformed
/// overrides read as absent and the caller's default applies.
pub fn parse_numeric(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
