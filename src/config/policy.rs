/// Widest viewport still treated as mobile.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Descriptor substring that suppresses an effect on mobile viewports.
pub const MOBILE_OFF_MARKER: &str = "mobile:off";

/// Whether an element's effect should run at the given viewport width.
///
/// False iff the viewport is mobile-sized (`<= 768`) and the descriptor
/// string carries the `mobile:off` marker. Pure and evaluated fresh per
/// call: viewport width changes between scans.
pub fn should_run(descriptor: &str, viewport_width: u32) -> bool {
    !(viewport_width <= MOBILE_MAX_WIDTH && descriptor.contains(MOBILE_OFF_MARKER))
}

#[cfg(test)]
#[path = "../../tests/unit/config/policy.rs"]
mod tests;
