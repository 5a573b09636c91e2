use shared::WheelConfig;
use web_sys::window;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Spin settings for this browser.
pub fn wheel_config() -> WheelConfig {
    if prefers_reduced_motion() {
        log::debug!("Reduced motion requested, shortening wheel spin");
        WheelConfig::reduced_motion()
    } else {
        WheelConfig::default()
    }
}
