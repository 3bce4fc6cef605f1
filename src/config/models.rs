use serde::Deserialize;

/// Runtime configuration shared by the navigator and presenter views.
///
/// Read from TOML through the sectioned layout in `tables.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    pub swipe_threshold_px: f64,
    pub double_press_window_ms: u64,
    pub presenter_window_name: String,
    pub presenter_window_width: u32,
    pub presenter_window_height: u32,
    pub tick_interval_ms: u32,
    pub start_time_key: String,
    pub log_level: LogLevel,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            swipe_threshold_px: crate::config::defaults::default_swipe_threshold_px(),
            double_press_window_ms: crate::config::defaults::default_double_press_window_ms(),
            presenter_window_name: crate::config::defaults::default_presenter_window_name(),
            presenter_window_width: crate::config::defaults::default_presenter_window_width(),
            presenter_window_height: crate::config::defaults::default_presenter_window_height(),
            tick_interval_ms: crate::config::defaults::default_tick_interval_ms(),
            start_time_key: crate::config::defaults::default_start_time_key(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl DeckConfig {
    /// Replace out-of-range values with usable ones.
    pub fn normalized(mut self) -> Self {
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px < 0.0 {
            self.swipe_threshold_px = crate::config::defaults::default_swipe_threshold_px();
        }
        self.tick_interval_ms = self
            .tick_interval_ms
            .max(crate::config::defaults::MIN_TICK_INTERVAL_MS);
        self.presenter_window_width = self.presenter_window_width.max(1);
        self.presenter_window_height = self.presenter_window_height.max(1);
        if self.presenter_window_name.trim().is_empty() {
            self.presenter_window_name = crate::config::defaults::default_presenter_window_name();
        }
        if self.start_time_key.trim().is_empty() {
            self.start_time_key = crate::config::defaults::default_start_time_key();
        }
        self
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
