use log::Level;

/// Scroll offset past which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 100.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
