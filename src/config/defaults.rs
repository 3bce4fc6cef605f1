/// Tick intervals below this would only burn CPU; the display has 1s resolution.
pub(crate) const MIN_TICK_INTERVAL_MS: u32 = 100;

pub(crate) fn default_swipe_threshold_px() -> f64 {
    50.0
}

pub(crate) fn default_double_press_window_ms() -> u64 {
    500
}

pub(crate) fn default_presenter_window_name() -> String {
    "presenter".to_string()
}

pub(crate) fn default_presenter_window_width() -> u32 {
    1200
}

pub(crate) fn default_presenter_window_height() -> u32 {
    800
}

pub(crate) fn default_tick_interval_ms() -> u32 {
    1000
}

pub(crate) fn default_start_time_key() -> String {
    "presenterStartTime".to_string()
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
